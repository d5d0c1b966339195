//! Command-line surface for the `tgraph` binary.

pub mod commands;
pub mod input;

pub use input::{load_graph, parse_adjacency};
