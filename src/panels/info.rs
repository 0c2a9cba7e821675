//! src/panels/info.rs
//!
//! Highlight info panel: shows hover state, pointer, nearest panel and the
//! size/snap decision from the last move.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::highlight::{ClosestPanel, HighlightState, Phase, PointerState, ProximityHighlight};

/// Read-only snapshot of the controller; `snapped` highlights the border.
pub struct InfoPanel {
    pub phase: Phase,
    pub pointer: PointerState,
    pub highlight: HighlightState,
    pub closest: Option<ClosestPanel>,
    pub closest_title: Option<String>,
    pub scale: Option<f64>,
}

impl InfoPanel {
    /// Copy what the panel shows out of `controller`; `title_of` resolves
    /// panel indices to titles.
    pub fn new<'a, F>(controller: &ProximityHighlight, title_of: F) -> Self
    where
        F: Fn(usize) -> Option<&'a str>,
    {
        let closest = controller.closest();
        Self {
            phase: controller.phase(),
            pointer: controller.pointer(),
            highlight: controller.highlight(),
            closest,
            closest_title: closest.and_then(|c| title_of(c.index)).map(str::to_string),
            scale: closest.map(|c| controller.config().size_multiplier(c.distance)),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let label = |s: &'static str| Span::styled(s, Style::default().fg(Color::Yellow));
        let state = match self.phase {
            Phase::Idle => "idle",
            Phase::Tracking => "tracking",
            Phase::Detached => "detached",
        };

        let mut lines = vec![
            Line::from(vec![label("state   "), Span::raw(state)]),
            Line::from(vec![
                label("pointer "),
                Span::raw(format!("{:.0}, {:.0}", self.pointer.x, self.pointer.y)),
            ]),
        ];

        match (&self.closest, &self.closest_title) {
            (Some(c), title) => {
                lines.push(Line::from(vec![
                    label("nearest "),
                    Span::styled(
                        title.clone().unwrap_or_else(|| format!("#{}", c.index)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]));
                lines.push(Line::from(vec![
                    label("dist    "),
                    Span::raw(format!("{:.1}", c.distance)),
                ]));
            }
            (None, _) => lines.push(Line::from(vec![label("nearest "), Span::raw("-")])),
        }

        if let Some(scale) = self.scale {
            lines.push(Line::from(vec![
                label("scale   "),
                Span::raw(format!("{:.2}", scale)),
            ]));
        }
        lines.push(Line::from(vec![
            label("size    "),
            Span::raw(format!(
                "{:.0} x {:.0}",
                self.highlight.width, self.highlight.height
            )),
        ]));

        let snap_style = if self.highlight.snapped {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            label("snapped "),
            Span::styled(self.highlight.snapped.to_string(), snap_style),
        ]));
        lines
    }
}

impl crate::ui::Panel for InfoPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut block = Block::default().title("Highlight").borders(Borders::ALL);
        if self.highlight.snapped && self.phase == Phase::Tracking {
            block = block.style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        f.render_widget(Paragraph::new(self.lines()).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::highlight::{BoundingBox, HighlightConfig, Origin, Point, RenderSurface};
    use crate::ui::Panel;

    struct OnePanel;

    impl RenderSurface for OnePanel {
        fn bounding_boxes(&self) -> Vec<BoundingBox> {
            vec![BoundingBox::new(0.0, 0.0, 100.0, 100.0)]
        }

        fn container_origin(&self) -> Origin {
            Origin::default()
        }
    }

    fn render(panel: &InfoPanel) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 10)).unwrap();
        terminal.draw(|f| panel.draw(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn idle_controller_shows_no_nearest_panel() {
        let c = ProximityHighlight::mount(HighlightConfig::default(), &OnePanel);
        let panel = InfoPanel::new(&c, |_| Some("Alpha"));
        assert!(panel.closest_title.is_none());
        assert!(panel.scale.is_none());
        let text = render(&panel);
        assert!(text.contains("idle"));
        assert!(text.contains("nearest -"));
    }

    #[test]
    fn tracking_controller_reports_nearest_and_scale() {
        let mut c = ProximityHighlight::mount(HighlightConfig::default(), &OnePanel);
        c.on_enter();
        c.on_move(Point::new(225.0, 50.0), &OnePanel);
        let panel = InfoPanel::new(&c, |i| (i == 0).then_some("Alpha"));
        assert_eq!(panel.closest_title.as_deref(), Some("Alpha"));
        assert!((panel.scale.unwrap() - 0.7).abs() < 1e-9);
        let text = render(&panel);
        assert!(text.contains("tracking"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("125.0"));
        assert!(text.contains("false"));
    }
}
