//! src/panels/result.rs
//!
//! Result label: the last computed path as `Path: A → B → C`.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::ShortestPath;

pub struct ResultPanel<'a> {
    pub path: Option<&'a ShortestPath>,
}

/// Text of the result label.
pub fn path_label(path: &ShortestPath) -> String {
    format!("Path: {path}")
}

impl crate::ui::Panel for ResultPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let lines = match self.path {
            Some(p) => vec![
                Line::styled(
                    path_label(p),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Line::from(vec![
                    Span::styled("total weight: ", Style::default().fg(Color::Yellow)),
                    Span::raw(p.total_weight.to_string()),
                ]),
            ],
            None => Vec::new(),
        };
        let block = Block::default().title("Result").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
