//! Fluent API for building Graph instances.

use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{GraphResult, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Entries are applied in the order they were added, which fixes the link
/// order and therefore the traversal order of the built graph.
pub struct GraphBuilder<K> {
    entries: Vec<(K, Vec<K>)>,
    directed: bool,
    weight: f64,
}

impl<K> GraphBuilder<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Create an undirected builder with the default link weight.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            directed: false,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Mark the graph as directed.
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Weight assigned to every link. Checked in [`build`](Self::build).
    pub fn default_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Add a key with its ordered neighbor keys.
    pub fn adjacency<N>(mut self, key: K, neighbors: N) -> Self
    where
        N: IntoIterator<Item = K>,
    {
        self.entries.push((key, neighbors.into_iter().collect()));
        self
    }

    /// Add a key with no outgoing links.
    pub fn vertex(self, key: K) -> Self {
        self.adjacency(key, std::iter::empty())
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph<K>> {
        Graph::from_entries(self.entries, self.directed, self.weight)
    }
}

impl<K> Default for GraphBuilder<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
