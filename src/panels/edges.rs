//! src/panels/edges.rs
//!
//! Edge list panel: the most recent edges, newest highlighted, edges on the
//! last computed path marked in red.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::{Edge, ShortestPath};

pub struct EdgeListPanel<'a> {
    pub edges: &'a [Edge],
    pub path: Option<&'a ShortestPath>,
}

impl<'a> EdgeListPanel<'a> {
    pub fn new(edges: &'a [Edge], path: Option<&'a ShortestPath>) -> Self {
        Self { edges, path }
    }

    fn on_path(&self, e: &Edge) -> bool {
        self.path
            .is_some_and(|p| p.hops().any(|(u, v)| e.connects(u, v)))
    }
}

impl crate::ui::Panel for EdgeListPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        // leave room for the borders
        let height = area.height.saturating_sub(2) as usize;
        let start = self.edges.len().saturating_sub(height);
        let last_index = self.edges.len().saturating_sub(1);

        let lines: Vec<Line> = self
            .edges
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, e)| {
                let mut name_style = if self.on_path(e) {
                    Style::default().fg(Color::Red)
                } else {
                    Style::default().fg(Color::Green)
                };
                if i == last_index {
                    name_style = name_style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(format!("{:>3} ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(format!("{} — {}", e.a, e.b), name_style),
                    Span::raw("  "),
                    Span::styled(format!("w={}", e.weight), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect();

        let block = Block::default().title("Edges").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
