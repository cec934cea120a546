//! src/graph.rs
//!
//! Top-level `graph` module: the session store, the path engine and layout.

pub mod layout;
pub mod path;
pub mod store;

/// Re-exports
pub use path::{ShortestPath, build_graph, shortest_path};
pub use store::{Coordinate, Edge, GraphStore};
