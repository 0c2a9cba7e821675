//! src/panels/overlay.rs
//!
//! Highlight overlay: tints the cells under the floating highlight.
//!
//! The overlay only restyles cells already drawn by the grid, so card borders
//! and titles stay readable underneath it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::CellMetrics;
use crate::highlight::HighlightState;

/// Paints a render-ready highlight (already shrunk) inside `container`.
pub struct HighlightOverlay {
    pub state: Option<HighlightState>,
    pub cell: CellMetrics,
}

impl HighlightOverlay {
    pub fn new(state: Option<HighlightState>, cell: CellMetrics) -> Self {
        Self { state, cell }
    }

    fn style(snapped: bool) -> Style {
        if snapped {
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().bg(Color::DarkGray)
        }
    }
}

/// Cells covered by a highlight centered at `(state.x, state.y)`, clipped to `container`.
///
/// Coordinates in `state` are container-relative units. Returns `None` when
/// nothing of the highlight lands inside the container.
pub fn highlight_cells(state: &HighlightState, container: Rect, cell: CellMetrics) -> Option<Rect> {
    if cell.width <= 0.0 || cell.height <= 0.0 {
        return None;
    }
    let left = (state.x - state.width / 2.0) / cell.width;
    let right = (state.x + state.width / 2.0) / cell.width;
    let top = (state.y - state.height / 2.0) / cell.height;
    let bottom = (state.y + state.height / 2.0) / cell.height;

    let clamp = |v: f64, max: u16| v.round().clamp(0.0, max as f64) as u16;
    let x0 = clamp(left, container.width);
    let x1 = clamp(right, container.width);
    let y0 = clamp(top, container.height);
    let y1 = clamp(bottom, container.height);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect::new(container.x + x0, container.y + y0, x1 - x0, y1 - y0))
}

impl crate::ui::Panel for HighlightOverlay {
    /// Draw over whatever is already in `container`.
    fn draw(&self, f: &mut Frame<'_>, container: Rect) {
        let Some(state) = self.state else {
            return;
        };
        if let Some(area) = highlight_cells(&state, container, self.cell) {
            f.buffer_mut().set_style(area, Self::style(state.snapped));
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::ui::Panel;

    fn state(x: f64, y: f64, width: f64, height: f64, snapped: bool) -> HighlightState {
        HighlightState {
            x,
            y,
            width,
            height,
            snapped,
        }
    }

    #[test]
    fn centered_box_maps_to_cells() {
        let cell = CellMetrics::new(8.0, 16.0);
        let container = Rect::new(10, 5, 40, 20);
        // 80x48 units centered at (80, 64) -> columns 5..15, rows 2.5..5.5
        let r = highlight_cells(&state(80.0, 64.0, 80.0, 48.0, true), container, cell).unwrap();
        assert_eq!(r.x, 15);
        assert_eq!(r.width, 10);
        assert_eq!(r.y, 5 + 3);
        assert_eq!(r.height, 3);
    }

    #[test]
    fn box_is_clipped_to_container() {
        let cell = CellMetrics::new(8.0, 16.0);
        let container = Rect::new(0, 0, 10, 4);
        let r = highlight_cells(&state(0.0, 0.0, 160.0, 160.0, false), container, cell).unwrap();
        assert_eq!(r, Rect::new(0, 0, 10, 4));
    }

    #[test]
    fn box_outside_container_paints_nothing() {
        let cell = CellMetrics::default();
        let container = Rect::new(0, 0, 10, 4);
        assert!(highlight_cells(&state(-500.0, 10.0, 16.0, 16.0, false), container, cell).is_none());
        assert!(highlight_cells(&state(10.0, 10.0, 0.0, 0.0, false), container, cell).is_none());
    }

    #[test]
    fn draw_tints_only_covered_cells() {
        let overlay = HighlightOverlay::new(
            Some(state(24.0, 24.0, 16.0, 16.0, true)),
            CellMetrics::new(8.0, 16.0),
        );
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        terminal.draw(|f| overlay.draw(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        // columns 2..4, row 1..2
        assert_eq!(buffer[(2, 1)].bg, Color::Yellow);
        assert_eq!(buffer[(3, 1)].bg, Color::Yellow);
        assert_ne!(buffer[(1, 1)].bg, Color::Yellow);
        assert_ne!(buffer[(2, 0)].bg, Color::Yellow);
        assert_ne!(buffer[(2, 2)].bg, Color::Yellow);
    }

    #[test]
    fn hidden_overlay_draws_nothing() {
        let overlay = HighlightOverlay::new(None, CellMetrics::default());
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
        terminal.draw(|f| overlay.draw(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, Color::Reset);
    }
}
