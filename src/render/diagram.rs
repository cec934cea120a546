//! src/render/diagram.rs
//!
//! Node-link diagram of the graph with the shortest path highlighted.

use crate::config::LayoutConfig;
use crate::graph::layout::spring_layout;
use crate::graph::path::WeightedGraph;
use crate::graph::ShortestPath;

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramNode {
    pub name: String,
    pub pos: (f64, f64),
    pub on_path: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DiagramEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub weight: f64,
    pub on_path: bool,
}

impl DiagramEdge {
    /// Where the weight label goes.
    pub fn midpoint(&self) -> (f64, f64) {
        (
            (self.from.0 + self.to.0) / 2.0,
            (self.from.1 + self.to.1) / 2.0,
        )
    }
}

/// A laid-out snapshot ready for the diagram panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    pub caption: String,
}

/// Lay out `graph` and flag the nodes and edges belonging to `path`.
pub fn render_diagram(
    graph: &WeightedGraph<'_>,
    path: &ShortestPath,
    config: &LayoutConfig,
) -> Diagram {
    let placed = spring_layout(graph, config);
    let pos_of = |name: &str| {
        placed
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| *p)
            .unwrap_or((0.0, 0.0))
    };

    let edges = graph
        .all_edges()
        .map(|(a, b, w)| DiagramEdge {
            from: pos_of(a),
            to: pos_of(b),
            weight: *w,
            on_path: path
                .hops()
                .any(|(u, v)| (u == a && v == b) || (u == b && v == a)),
        })
        .collect();
    let nodes = placed
        .iter()
        .map(|(name, pos)| DiagramNode {
            on_path: path.nodes.iter().any(|n| n == name),
            name: name.clone(),
            pos: *pos,
        })
        .collect();

    tracing::debug!(nodes = placed.len(), "diagram laid out");
    Diagram {
        nodes,
        edges,
        caption: format!("{}  (total weight {})", path, path.total_weight),
    }
}
