//! src/panels/diagram.rs
//!
//! Diagram panel: draws a laid-out [`Diagram`] on a braille canvas.
//!
//! Edges are gray with their weight at the midpoint, path edges are drawn on
//! top in red, and node labels come last so nothing covers them.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line as TextLine, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line},
    },
};

use crate::render::Diagram;

/// Canvas bounds; the layout lives in [-1, 1] and labels need a margin.
const BOUND: f64 = 1.25;

pub struct DiagramPanel<'a> {
    pub diagram: &'a Diagram,
}

impl crate::ui::Panel for DiagramPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let d = self.diagram;
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title(d.caption.as_str())
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                    .borders(Borders::ALL),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND])
            .paint(|ctx| {
                for e in d.edges.iter().filter(|e| !e.on_path) {
                    ctx.draw(&Line::new(e.from.0, e.from.1, e.to.0, e.to.1, Color::Gray));
                }
                ctx.layer();
                for e in d.edges.iter().filter(|e| e.on_path) {
                    ctx.draw(&Line::new(e.from.0, e.from.1, e.to.0, e.to.1, Color::Red));
                }
                ctx.layer();
                for e in &d.edges {
                    let (x, y) = e.midpoint();
                    let label = Span::styled(e.weight.to_string(), Style::default().fg(Color::Cyan));
                    ctx.print(x, y, label);
                }
                for n in &d.nodes {
                    let style = if n.on_path {
                        Style::default().fg(Color::LightBlue).bold().reversed()
                    } else {
                        Style::default().fg(Color::LightBlue).bold()
                    };
                    ctx.print(
                        n.pos.0,
                        n.pos.1,
                        TextLine::styled(format!(" {} ", n.name), style),
                    );
                }
            });
        f.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::graph::{GraphStore, build_graph, shortest_path};
    use crate::render::render_diagram;
    use crate::ui::Panel;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn canvas_shows_node_and_weight_labels() {
        let mut s = GraphStore::default();
        s.add_edge("Alpha", "Beta", "7").unwrap();
        s.add_edge("Beta", "Gamma", "3").unwrap();
        let path = shortest_path(&s, "Alpha", "Gamma").unwrap();
        let diagram = render_diagram(&build_graph(&s), &path, &LayoutConfig::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|f| DiagramPanel { diagram: &diagram }.draw(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for label in ["Alpha", "Beta", "Gamma", "7", "3"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("Alpha → Beta → Gamma"));
    }
}
