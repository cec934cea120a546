//! src/panels/help.rs
//!
//! Key hint line used for the controls footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// `(key, action)` pairs rendered as `KEY action  KEY action`.
pub struct HelpPanel {
    pub keys: &'static [(&'static str, &'static str)],
    pub title: &'static str,
}

impl HelpPanel {
    pub fn new(keys: &'static [(&'static str, &'static str)], title: &'static str) -> Self {
        Self { keys, title }
    }
}

impl crate::ui::Panel for HelpPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let spans: Vec<Span> = self
            .keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(*key, key_style),
                    Span::raw(format!(" {action}  ")),
                ]
            })
            .collect();

        let p = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: true })
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
