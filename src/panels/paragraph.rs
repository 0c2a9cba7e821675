//! src/panels/paragraph.rs
//!
//! Bordered text panel used for the header and the key-help footer.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct ParagraphPanel {
    pub text: String,
    pub title: String,
    pub alignment: Alignment,
    pub dim: bool,
}

impl ParagraphPanel {
    pub fn new(text: &str, title: &str) -> Self {
        Self {
            text: text.to_string(),
            title: title.to_string(),
            alignment: Alignment::Left,
            dim: false,
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn dimmed(mut self) -> Self {
        self.dim = true;
        self
    }
}

impl crate::ui::Panel for ParagraphPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let style = if self.dim {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let p = Paragraph::new(self.text.clone())
            .style(style)
            .alignment(self.alignment)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.title.clone())
                    .borders(Borders::ALL),
            );
        f.render_widget(p, area);
    }
}
