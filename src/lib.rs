//! tricolor-graph: in-memory adjacency graph with tri-color breadth-first traversal.
//!
//! A [`Graph`] is built once from an adjacency mapping (key -> ordered
//! neighbor keys). Traversals never mutate it: each run returns a
//! [`Traversal`] holding the visit events and the per-vertex state.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{breadth_first, Graph, GraphBuilder, Traversal};
pub use types::{
    Color, GraphError, GraphResult, Link, Vertex, VertexId, VertexState, VisitEvent,
    DEFAULT_WEIGHT,
};
