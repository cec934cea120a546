//! src/panels/dialog.rs
//!
//! Modal dialog drawn centered over the rest of the UI.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::dialog::{Dialog, DialogKind};
use crate::ui::centered;

/// Message width plus border and padding, kept between 30 and 70 cells.
fn dialog_width(message: &str) -> u16 {
    u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(6)
        .clamp(30, 70)
}

pub struct DialogPanel<'a> {
    pub dialog: &'a Dialog,
}

impl crate::ui::Panel for DialogPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let color = match self.dialog.kind {
            DialogKind::Error => Color::Red,
            DialogKind::Warning => Color::Yellow,
        };
        let width = dialog_width(&self.dialog.message);
        let rect = centered(area, width, 7);

        let lines = vec![
            Line::raw(self.dialog.message.as_str()),
            Line::raw(""),
            Line::styled("Enter / Esc to close", Style::default().fg(Color::DarkGray)),
        ];
        let block = Block::default()
            .title(self.dialog.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            rect,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_clamped_for_any_length() {
        assert_eq!(dialog_width("short"), 30);
        assert_eq!(dialog_width(&"x".repeat(50)), 56);
        assert_eq!(dialog_width(&"x".repeat(65_530)), 70);
        assert_eq!(dialog_width(&"x".repeat(70_000)), 70);
    }
}
