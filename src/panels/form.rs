//! src/panels/form.rs
//!
//! "Add an edge" form: three single-line inputs, the focused one highlighted
//! with a cursor.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::form::{EdgeForm, Field};

pub struct FormPanel<'a> {
    pub form: &'a EdgeForm,
    pub focus: Field,
}

impl<'a> FormPanel<'a> {
    pub fn new(form: &'a EdgeForm, focus: Field) -> Self {
        Self { form, focus }
    }
}

/// Border style shared by every focusable input.
pub fn input_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

impl crate::ui::Panel for FormPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let outer = Block::default()
            .title("Add an edge (Enter)")
            .borders(Borders::ALL);
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ])
            .split(inner);

        for (field, chunk) in [Field::NodeA, Field::NodeB, Field::Weight]
            .into_iter()
            .zip(chunks.iter())
        {
            let focused = field == self.focus;
            let text = self.form.text(field).unwrap_or_default();
            let block = Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(input_style(focused));
            f.render_widget(Paragraph::new(text).block(block), *chunk);

            if focused {
                let width = chunk.width.saturating_sub(2);
                let col = (text.chars().count() as u16).min(width.saturating_sub(1));
                f.set_cursor_position(Position::new(chunk.x + 1 + col, chunk.y + 1));
            }
        }
    }
}
