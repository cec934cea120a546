//! src/panels/title.rs
//!
//! Header panel: application title with node and edge counts.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct TitlePanel<'a> {
    pub title: &'a str,
    pub nodes: usize,
    pub edges: usize,
}

impl<'a> TitlePanel<'a> {
    pub fn new(title: &'a str, nodes: usize, edges: usize) -> Self {
        Self {
            title,
            nodes,
            edges,
        }
    }
}

impl crate::ui::Panel for TitlePanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} nodes, {} edges", self.nodes, self.edges),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
