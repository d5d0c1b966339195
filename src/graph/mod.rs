//! In-memory graph operations: the core data structure.

pub mod adjacency_graph;
pub mod builder;
pub mod traversal;

pub use adjacency_graph::Graph;
pub use builder::GraphBuilder;
pub use traversal::{breadth_first, Traversal};
