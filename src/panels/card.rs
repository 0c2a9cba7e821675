//! src/panels/card.rs
//!
//! A single grid panel: bordered card with its title centered inside.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub struct PanelCard {
    pub title: String,
}

impl PanelCard {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl crate::ui::Panel for PanelCard {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // borders take one row top and bottom
        let inner_height = area.height.saturating_sub(2);
        let pad = inner_height.saturating_sub(1) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::default()).collect();
        lines.push(Line::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));

        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
