//! src/error.rs
//!
//! Domain errors surfaced to the user as dialogs.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// Rejected form input; the store is left untouched.
    #[error("{0}")]
    Validation(String),

    #[error("No path found between {from} and {to}.")]
    NoPath { from: String, to: String },

    /// The action cannot start with the current state or selection.
    #[error("{0}")]
    Precondition(String),
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("No positions available to show the map.")]
    NoPositions,

    #[error("Failed to write map file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode map data: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
