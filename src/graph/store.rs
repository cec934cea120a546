//! src/graph/store.rs
//!
//! Session graph store: the accumulated edge list, the derived node set and
//! the automatically assigned node coordinates.

use std::collections::BTreeSet;

use crate::config::CoordinateConfig;
use crate::error::{GraphError, GraphResult};

const MSG_NODES: &str = "Nodes must be different and not empty.";
const MSG_WEIGHT: &str = "Please enter a numeric value for the weight.";

/// A weighted connection between two distinct nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

impl Edge {
    /// True when this edge joins `u` and `v` in either direction.
    pub fn connects(&self, u: &str, v: &str) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }
}

/// (latitude, longitude)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug)]
pub struct GraphStore {
    /// every accepted edge, in insertion order (parallel edges kept)
    edges: Vec<Edge>,

    /// distinct endpoints, sorted for the selectors
    nodes: BTreeSet<String>,

    /// coordinates in first-seen order; never rewritten once assigned
    positions: Vec<(String, Coordinate)>,

    config: CoordinateConfig,
}

impl GraphStore {
    pub fn new(config: CoordinateConfig) -> Self {
        Self {
            edges: Vec::new(),
            nodes: BTreeSet::new(),
            positions: Vec::new(),
            config,
        }
    }

    /// Validate and record an edge from raw form text.
    ///
    /// Fails with [`GraphError::Validation`] when a name is empty, both names
    /// are equal, or the weight is not a finite non-negative number. On
    /// failure nothing is recorded.
    ///
    /// Newly seen endpoints get a coordinate derived from the number of
    /// coordinates that existed *before* this call, so two new nodes added
    /// together sit `pair_offset` apart.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: &str) -> GraphResult<Edge> {
        let u = u.trim();
        let v = v.trim();
        let weight = parse_weight(weight)?;
        if u.is_empty() || v.is_empty() || u == v {
            return Err(GraphError::Validation(MSG_NODES.to_string()));
        }

        let edge = Edge {
            a: u.to_string(),
            b: v.to_string(),
            weight,
        };
        self.edges.push(edge.clone());
        self.nodes.insert(edge.a.clone());
        self.nodes.insert(edge.b.clone());

        let (base_lat, base_lon) = self.config.base;
        let offset = self.config.step * self.positions.len() as f64;
        if self.position(u).is_none() {
            let c = Coordinate {
                lat: base_lat + offset,
                lon: base_lon + offset,
            };
            tracing::debug!(node = u, lat = c.lat, lon = c.lon, "assigned coordinate");
            self.positions.push((u.to_string(), c));
        }
        if self.position(v).is_none() {
            let pair = self.config.pair_offset;
            let c = Coordinate {
                lat: base_lat + offset + pair,
                lon: base_lon + offset + pair,
            };
            tracing::debug!(node = v, lat = c.lat, lon = c.lon, "assigned coordinate");
            self.positions.push((v.to_string(), c));
        }

        tracing::info!(a = u, b = v, weight, edges = self.edges.len(), "edge added");
        Ok(edge)
    }

    /// Current node set in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Node coordinates in the order the nodes were first seen.
    pub fn positions(&self) -> &[(String, Coordinate)] {
        &self.positions
    }

    pub fn position(&self, id: &str) -> Option<Coordinate> {
        self.positions
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, c)| *c)
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new(CoordinateConfig::default())
    }
}

fn parse_weight(raw: &str) -> GraphResult<f64> {
    match raw.trim().parse::<f64>() {
        Ok(w) if w.is_finite() && w >= 0.0 => Ok(w),
        _ => Err(GraphError::Validation(MSG_WEIGHT.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn node_set_is_union_of_endpoints() {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();
        s.add_edge("B", "C", "2.5").unwrap();
        s.add_edge("D", "A", "0").unwrap();
        s.add_edge("A", "B", "4").unwrap();

        let nodes: Vec<&str> = s.nodes().collect();
        assert_eq!(nodes, vec!["A", "B", "C", "D"]);
        assert_eq!(s.edges().len(), 4);
    }

    #[test]
    fn self_loop_is_rejected_without_mutation() {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();

        let err = s.add_edge("C", "C", "3").unwrap_err();
        assert_eq!(err, GraphError::Validation(MSG_NODES.to_string()));
        assert_eq!(s.edges().len(), 1);
        assert!(!s.contains("C"));
        assert_eq!(s.positions().len(), 2);
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut s = GraphStore::default();
        assert!(matches!(
            s.add_edge("", "B", "1"),
            Err(GraphError::Validation(_))
        ));
        assert!(matches!(
            s.add_edge("A", "   ", "1"),
            Err(GraphError::Validation(_))
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn bad_weights_are_rejected() {
        let mut s = GraphStore::default();
        for w in ["abc", "", "1,5", "inf", "NaN", "-2"] {
            let err = s.add_edge("A", "B", w).unwrap_err();
            assert_eq!(err, GraphError::Validation(MSG_WEIGHT.to_string()), "{w}");
        }
        assert!(s.is_empty());
        assert_eq!(s.node_count(), 0);
    }

    #[test]
    fn names_and_weight_are_trimmed() {
        let mut s = GraphStore::default();
        let e = s.add_edge(" A ", "B\t", " 3.5 ").unwrap();
        assert_eq!(e.a, "A");
        assert_eq!(e.b, "B");
        assert!(approx(e.weight, 3.5));
    }

    #[test]
    fn coordinates_follow_offset_formula() {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();
        // two coordinates existed before this call
        s.add_edge("B", "C", "1").unwrap();

        let a = s.position("A").unwrap();
        let b = s.position("B").unwrap();
        let c = s.position("C").unwrap();
        assert!(approx(a.lat, 36.75) && approx(a.lon, 3.06));
        assert!(approx(b.lat, 36.751) && approx(b.lon, 3.061));
        assert!(approx(c.lat, 36.75 + 0.004 + 0.001));
        assert!(approx(c.lon, 3.06 + 0.004 + 0.001));
    }

    #[test]
    fn coordinates_are_assigned_once() {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();
        let before = s.position("A").unwrap();
        s.add_edge("C", "A", "2").unwrap();
        s.add_edge("A", "D", "2").unwrap();

        assert_eq!(s.position("A").unwrap(), before);
        let names: Vec<&str> = s.positions().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn two_new_nodes_share_pre_call_offset() {
        let mut s = GraphStore::default();
        s.add_edge("A", "B", "1").unwrap();
        s.add_edge("C", "D", "1").unwrap();

        let c = s.position("C").unwrap();
        let d = s.position("D").unwrap();
        assert!(approx(d.lat - c.lat, 0.001));
        assert!(approx(c.lat, 36.75 + 0.004));
    }

    #[test]
    fn connects_is_unordered() {
        let e = Edge {
            a: "X".into(),
            b: "Y".into(),
            weight: 1.0,
        };
        assert!(e.connects("X", "Y"));
        assert!(e.connects("Y", "X"));
        assert!(!e.connects("X", "Z"));
    }
}
