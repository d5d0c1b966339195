//! Error types for the tricolor-graph library.

use thiserror::Error;

use super::state::Color;

/// All errors that can occur in the tricolor-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An identity field was written after creation.
    #[error("Unable to change {field} once set")]
    ImmutableValue { field: &'static str },

    /// Vertex color moved backwards.
    #[error("Invalid color transition: {from} -> {to}")]
    InvalidStateTransition { from: Color, to: Color },

    /// Link weight is negative (or not a number).
    #[error("Link weights must be non-negative: {0}")]
    InvalidWeight(f64),

    /// Traversal source or queried key is not in the graph.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// Adjacency document has the wrong shape.
    #[error("Invalid adjacency input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error in an adjacency document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
