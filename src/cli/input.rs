//! Adjacency documents: JSON objects mapping a key to its neighbor keys.
//!
//! ```json
//! { "1": [2, 3], "2": ["4"], "3": [] }
//! ```
//!
//! Object order is preserved, so it fixes the link order of the graph.
//! Keys may be strings or numbers; numbers are used in their textual form.

use std::path::Path;

use serde_json::Value;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Parse an adjacency document into ordered (key, neighbors) entries.
pub fn parse_adjacency(text: &str) -> GraphResult<Vec<(String, Vec<String>)>> {
    let parsed: Value = serde_json::from_str(text)?;
    let object = parsed.as_object().ok_or_else(|| {
        GraphError::InvalidInput("top level must be an object of key -> [neighbors]".into())
    })?;

    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let list = value.as_array().ok_or_else(|| {
            GraphError::InvalidInput(format!("neighbors of {} must be an array", key))
        })?;
        let neighbors = list
            .iter()
            .map(|item| key_text(item).ok_or_else(|| bad_neighbor(key, item)))
            .collect::<GraphResult<Vec<String>>>()?;
        entries.push((key.clone(), neighbors));
    }
    Ok(entries)
}

/// Read and build a graph from an adjacency document on disk.
pub fn load_graph(path: &Path, directed: bool) -> GraphResult<Graph<String>> {
    let text = std::fs::read_to_string(path)?;
    let entries = parse_adjacency(&text)?;
    log::debug!("Loaded {} adjacency entries from {}", entries.len(), path.display());
    Ok(Graph::build(entries, directed))
}

fn key_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn bad_neighbor(key: &str, item: &Value) -> GraphError {
    GraphError::InvalidInput(format!(
        "neighbor {} of {} must be a string or number",
        item, key
    ))
}
