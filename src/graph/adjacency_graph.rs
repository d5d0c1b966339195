//! Core graph structure: vertices + links built from an adjacency mapping.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::link::validate_weight;
use crate::types::{GraphError, GraphResult, Link, Vertex, VertexId, VisitEvent};

use super::traversal::{self, Traversal};

/// An immutable-topology graph keyed by `K`.
///
/// Vertices keep the order in which their keys were first seen; links keep
/// the order in which the adjacency input was scanned. Link weights are the
/// only thing that can change after construction.
#[derive(Debug, Clone)]
pub struct Graph<K> {
    /// All vertices, indexed by `VertexId`.
    vertices: Vec<Vertex<K>>,
    /// Key -> position in `vertices`.
    index: HashMap<K, VertexId>,
    /// All links, in creation order.
    links: Vec<Link>,
    /// Recorded at construction. Traversal does not consult it.
    directed: bool,
}

impl<K> Graph<K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Build a graph from an adjacency mapping.
    ///
    /// Each entry is a key plus its ordered neighbor keys. Neighbors that
    /// never appear as top-level keys still get a vertex. One link is
    /// created per (key, neighbor) pair, so repeated neighbors produce
    /// parallel links.
    pub fn build<I, N>(adjacency: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        N: IntoIterator<Item = K>,
    {
        let mut graph = Self::empty(directed);
        for (key, neighbors) in adjacency {
            let source = graph.insert_vertex(key);
            for neighbor in neighbors {
                let target = graph.insert_vertex(neighbor);
                graph.connect(Link::new(source, target));
            }
        }
        log::debug!(
            "Built graph: {} vertices, {} links, directed={}",
            graph.vertices.len(),
            graph.links.len(),
            directed
        );
        graph
    }

    /// Build with an explicit weight on every link (used by the builder).
    pub(crate) fn from_entries(
        entries: Vec<(K, Vec<K>)>,
        directed: bool,
        weight: f64,
    ) -> GraphResult<Self> {
        validate_weight(weight)?;
        let mut graph = Self::empty(directed);
        for (key, neighbors) in entries {
            let source = graph.insert_vertex(key);
            for neighbor in neighbors {
                let target = graph.insert_vertex(neighbor);
                graph.connect(Link::with_weight(source, target, weight)?);
            }
        }
        log::debug!(
            "Built graph: {} vertices, {} links, directed={}, weight={}",
            graph.vertices.len(),
            graph.links.len(),
            directed,
            weight
        );
        Ok(graph)
    }

    fn empty(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            links: Vec::new(),
            directed,
        }
    }

    /// Return the id for `key`, creating the vertex on first sight.
    fn insert_vertex(&mut self, key: K) -> VertexId {
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.vertices.len();
        self.index.insert(key.clone(), id);
        self.vertices.push(Vertex::new(id, key));
        id
    }

    /// Store a link and register its target as a neighbor of its source.
    fn connect(&mut self, link: Link) {
        self.vertices[link.source()].add_neighbor(link.target());
        self.links.push(link);
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Whether the graph was declared directed at construction.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn vertex_id(&self, key: &K) -> Option<VertexId> {
        self.index.get(key).copied()
    }

    /// Get a vertex by key.
    pub fn vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.vertex_id(key).map(|id| &self.vertices[id])
    }

    /// Get a vertex by id.
    pub fn vertex_at(&self, id: VertexId) -> Option<&Vertex<K>> {
        self.vertices.get(id)
    }

    /// All vertices, in first-seen order.
    pub fn vertices(&self) -> &[Vertex<K>] {
        &self.vertices
    }

    /// All keys, in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.vertices.iter().map(|v| v.key())
    }

    /// All links, in creation order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Mutable access to one link. Endpoints have no setters, so only the
    /// weight can be changed through this.
    pub fn link_mut(&mut self, index: usize) -> Option<&mut Link> {
        self.links.get_mut(index)
    }

    /// Keys of both endpoints of a link belonging to this graph.
    pub fn link_endpoints(&self, link: &Link) -> Option<(&K, &K)> {
        let source = self.vertices.get(link.source())?;
        let target = self.vertices.get(link.target())?;
        Some((source.key(), target.key()))
    }

    /// Outgoing neighbor keys of `key`, in link order.
    pub fn neighbors(&self, key: &K) -> GraphResult<Vec<&K>> {
        let vertex = self
            .vertex(key)
            .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", key)))?;
        Ok(vertex
            .neighbors()
            .iter()
            .map(|&id| self.vertices[id].key())
            .collect())
    }

    pub(crate) fn key_at(&self, id: VertexId) -> &K {
        self.vertices[id].key()
    }

    /// Breadth-first search from `source`, returning the visit events in
    /// discovery order.
    pub fn breadth_first_search(&self, source: &K) -> GraphResult<Vec<VisitEvent<K>>> {
        Ok(self.traverse(source)?.into_events())
    }

    /// Breadth-first search keeping the per-vertex traversal state.
    pub fn traverse(&self, source: &K) -> GraphResult<Traversal<'_, K>> {
        traversal::breadth_first(self, source, |_| {})
    }

    /// Breadth-first search that also hands every visit event to `on_visit`
    /// as soon as it is emitted.
    pub fn traverse_with<F>(&self, source: &K, on_visit: F) -> GraphResult<Traversal<'_, K>>
    where
        F: FnMut(&VisitEvent<K>),
    {
        traversal::breadth_first(self, source, on_visit)
    }
}

impl<K> Default for Graph<K>
where
    K: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::empty(false)
    }
}
