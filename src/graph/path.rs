//! src/graph/path.rs
//!
//! Path engine: builds an undirected weighted graph from the store and runs a
//! non-negative shortest-path search over it.

use std::fmt;

use petgraph::algo::astar;
use petgraph::graphmap::UnGraphMap;

use super::store::GraphStore;
use crate::error::{GraphError, GraphResult};

const MSG_NO_EDGES: &str = "Please add some edges first.";
const MSG_SELECT: &str = "Please select two different nodes.";

/// Undirected graph keyed by node name. Parallel edges collapse to the most
/// recently added weight.
pub type WeightedGraph<'a> = UnGraphMap<&'a str, f64>;

pub fn build_graph(store: &GraphStore) -> WeightedGraph<'_> {
    let mut g = UnGraphMap::new();
    for e in store.edges() {
        g.add_edge(e.a.as_str(), e.b.as_str(), e.weight);
    }
    g
}

/// Minimum-weight route between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<String>,
    pub total_weight: f64,
}

impl ShortestPath {
    /// Consecutive node pairs along the path.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .windows(2)
            .map(|w| (w[0].as_str(), w[1].as_str()))
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join(" → "))
    }
}

/// Fails unless at least one edge has been added.
pub fn check_edges(store: &GraphStore) -> GraphResult<()> {
    if store.is_empty() {
        return Err(GraphError::Precondition(MSG_NO_EDGES.to_string()));
    }
    Ok(())
}

/// Check the preconditions shared by both user actions.
pub fn check_selection(store: &GraphStore, source: &str, target: &str) -> GraphResult<()> {
    check_edges(store)?;
    if source.is_empty() || target.is_empty() || source == target {
        return Err(GraphError::Precondition(MSG_SELECT.to_string()));
    }
    Ok(())
}

/// Compute the minimum-total-weight path from `source` to `target`.
///
/// Weights are non-negative (enforced by the store), so A* with a zero
/// heuristic behaves as Dijkstra with early exit at the target.
///
/// # Errors
/// * [`GraphError::Precondition`] when there are no edges or the endpoints
///   are empty or equal.
/// * [`GraphError::NoPath`] when the endpoints are disconnected or one of
///   them is not in the graph.
pub fn shortest_path(store: &GraphStore, source: &str, target: &str) -> GraphResult<ShortestPath> {
    check_selection(store, source, target)?;

    let no_path = || GraphError::NoPath {
        from: source.to_string(),
        to: target.to_string(),
    };
    if !store.contains(source) || !store.contains(target) {
        return Err(no_path());
    }

    let graph = build_graph(store);

    let (total_weight, route) = astar(
        &graph,
        source,
        |n| n == target,
        |(_, _, w)| *w,
        |_| 0.0,
    )
    .ok_or_else(no_path)?;

    tracing::info!(source, target, total_weight, hops = route.len() - 1, "shortest path");
    Ok(ShortestPath {
        nodes: route.into_iter().map(str::to_string).collect(),
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(edges: &[(&str, &str, &str)]) -> GraphStore {
        let mut s = GraphStore::default();
        for (u, v, w) in edges {
            s.add_edge(u, v, w).unwrap();
        }
        s
    }

    #[test]
    fn prefers_lighter_detour_over_direct_edge() {
        let s = store(&[("A", "B", "1"), ("B", "C", "2"), ("A", "C", "10")]);
        let p = shortest_path(&s, "A", "C").unwrap();
        assert_eq!(p.nodes, vec!["A", "B", "C"]);
        assert!((p.total_weight - 3.0).abs() < 1e-9);
        assert_eq!(p.to_string(), "A → B → C");
    }

    #[test]
    fn edges_are_undirected() {
        let s = store(&[("A", "B", "1"), ("C", "B", "2")]);
        let p = shortest_path(&s, "C", "A").unwrap();
        assert_eq!(p.nodes, vec!["C", "B", "A"]);
    }

    #[test]
    fn unknown_target_is_no_path() {
        let s = store(&[("A", "B", "1")]);
        let err = shortest_path(&s, "A", "C").unwrap_err();
        assert_eq!(
            err,
            GraphError::NoPath {
                from: "A".into(),
                to: "C".into()
            }
        );
        assert_eq!(err.to_string(), "No path found between A and C.");
    }

    #[test]
    fn disconnected_components_are_no_path() {
        let s = store(&[("A", "B", "1"), ("C", "D", "1")]);
        assert!(matches!(
            shortest_path(&s, "A", "D"),
            Err(GraphError::NoPath { .. })
        ));
    }

    #[test]
    fn preconditions_are_checked_first() {
        let empty = GraphStore::default();
        assert_eq!(
            shortest_path(&empty, "A", "B").unwrap_err(),
            GraphError::Precondition(MSG_NO_EDGES.to_string())
        );

        let s = store(&[("A", "B", "1")]);
        for (src, dst) in [("A", "A"), ("", "B"), ("A", "")] {
            assert_eq!(
                shortest_path(&s, src, dst).unwrap_err(),
                GraphError::Precondition(MSG_SELECT.to_string())
            );
        }
    }

    #[test]
    fn parallel_edge_keeps_latest_weight() {
        let s = store(&[
            ("A", "B", "1"),
            ("B", "C", "1"),
            ("A", "C", "5"),
            ("C", "A", "0.5"),
        ]);
        let p = shortest_path(&s, "A", "C").unwrap();
        assert_eq!(p.nodes, vec!["A", "C"]);
        assert!((p.total_weight - 0.5).abs() < 1e-9);

        let g = build_graph(&s);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_weight("A", "C"), Some(&0.5));
    }

    #[test]
    fn hops_walks_consecutive_pairs() {
        let p = ShortestPath {
            nodes: vec!["A".into(), "B".into(), "C".into()],
            total_weight: 3.0,
        };
        let hops: Vec<_> = p.hops().collect();
        assert_eq!(hops, vec![("A", "B"), ("B", "C")]);
    }
}
