//! Graph vertices: identity plus outgoing neighbor list.

use super::error::{GraphError, GraphResult};
use super::VertexId;

/// A vertex owned by a [`Graph`](crate::graph::Graph).
///
/// Neighbors are stored as ids into the owning graph's vertex list, in the
/// order the links were created. Duplicate links produce duplicate entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<K> {
    id: VertexId,
    key: K,
    neighbors: Vec<VertexId>,
}

impl<K> Vertex<K> {
    /// Create a vertex with no neighbors.
    pub fn new(id: VertexId, key: K) -> Self {
        Self {
            id,
            key,
            neighbors: Vec::new(),
        }
    }

    /// Position of this vertex in its graph.
    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Keys are fixed at creation; this always fails.
    pub fn set_key(&mut self, _key: K) -> GraphResult<()> {
        Err(GraphError::ImmutableValue { field: "key" })
    }

    /// Append a neighbor. No de-duplication.
    pub fn add_neighbor(&mut self, neighbor: VertexId) {
        self.neighbors.push(neighbor);
    }

    /// Outgoing neighbors in link order; empty when there are none.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    /// Number of outgoing links.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl<K: std::fmt::Display> std::fmt::Display for Vertex<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
