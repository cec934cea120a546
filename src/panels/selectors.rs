//! src/panels/selectors.rs
//!
//! Source/target selectors populated from the current node set.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::form::input_style;
use crate::app::form::Field;

pub struct SelectorPanel<'a> {
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
    pub focus: Field,
    pub choices: usize,
}

impl crate::ui::Panel for SelectorPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        for (field, value, chunk) in [
            (Field::Source, self.source, chunks[0]),
            (Field::Target, self.target, chunks[1]),
        ] {
            let line = match value {
                Some(v) => Line::from(vec![
                    Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(v),
                    Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
                ]),
                None if self.choices == 0 => Line::styled(
                    "add edges first",
                    Style::default().fg(Color::DarkGray),
                ),
                None => Line::styled(
                    format!("← → to choose ({})", self.choices),
                    Style::default().fg(Color::DarkGray),
                ),
            };
            let block = Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(input_style(field == self.focus));
            f.render_widget(Paragraph::new(line).block(block), chunk);
        }
    }
}
