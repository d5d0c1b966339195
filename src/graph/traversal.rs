//! Graph traversal algorithms (tri-color BFS).

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use crate::types::{Color, GraphError, GraphResult, VertexId, VertexState, VisitEvent};

use super::Graph;

/// Outcome of one breadth-first traversal.
///
/// Holds the visit events in discovery order and the final state of every
/// vertex in the graph. Vertices the search never reached stay white, at
/// distance 0, with no predecessor.
#[derive(Debug, Clone)]
pub struct Traversal<'g, K> {
    graph: &'g Graph<K>,
    source: VertexId,
    states: Vec<VertexState>,
    events: Vec<VisitEvent<K>>,
}

impl<'g, K> Traversal<'g, K>
where
    K: Clone + Eq + Hash + Debug,
{
    /// Key the traversal started from.
    pub fn source(&self) -> &'g K {
        self.graph.key_at(self.source)
    }

    /// Visit events in discovery order.
    pub fn events(&self) -> &[VisitEvent<K>] {
        &self.events
    }

    pub fn into_events(self) -> Vec<VisitEvent<K>> {
        self.events
    }

    /// Number of vertices discovered, source included.
    pub fn visited_count(&self) -> usize {
        self.events.len()
    }

    /// Final state of the vertex with `key`.
    pub fn state(&self, key: &K) -> Option<&VertexState> {
        self.graph.vertex_id(key).map(|id| &self.states[id])
    }

    pub fn color(&self, key: &K) -> Option<Color> {
        self.state(key).map(VertexState::color)
    }

    pub fn distance(&self, key: &K) -> Option<usize> {
        self.state(key).map(VertexState::distance)
    }

    /// Key of the vertex `key` was discovered from.
    pub fn predecessor(&self, key: &K) -> Option<&'g K> {
        let pred = self.state(key)?.predecessor()?;
        Some(self.graph.key_at(pred))
    }

    pub fn is_visited(&self, key: &K) -> bool {
        self.state(key).is_some_and(VertexState::is_discovered)
    }

    /// Keys along the predecessor chain, from the source to `key` inclusive.
    ///
    /// Returns `None` when `key` is unknown or was never discovered.
    pub fn path_to(&self, key: &K) -> Option<Vec<&'g K>> {
        let mut id = self.graph.vertex_id(key)?;
        if !self.states[id].is_discovered() {
            return None;
        }
        let mut path = vec![self.graph.key_at(id)];
        while let Some(pred) = self.states[id].predecessor() {
            // Predecessors always point at an earlier discovery, so the chain
            // is bounded by the vertex count.
            if path.len() > self.states.len() {
                break;
            }
            path.push(self.graph.key_at(pred));
            id = pred;
        }
        path.reverse();
        Some(path)
    }
}

/// Tri-color BFS from `source`, reporting each visit to `on_visit`.
///
/// Every round rescans the full link list and treats links as traversable in
/// both directions. Any endpoint opposite the current vertex that is not black
/// gets `distance = current + 1` and is appended to the work list, duplicates
/// included. After the scan, every still-white vertex in the work list is
/// turned gray with the current vertex as predecessor and reported. The
/// current vertex is then blackened and the next one is taken from the front
/// of the work list. The loop ends when taking that next vertex empties the
/// list.
pub fn breadth_first<'g, K, F>(
    graph: &'g Graph<K>,
    source: &K,
    mut on_visit: F,
) -> GraphResult<Traversal<'g, K>>
where
    K: Clone + Eq + Hash + Debug,
    F: FnMut(&VisitEvent<K>),
{
    let start = graph
        .vertex_id(source)
        .ok_or_else(|| GraphError::UnknownVertex(format!("{:?}", source)))?;

    log::debug!("Starting BFS at vertex {:?}", source);

    let mut states: Vec<VertexState> = (0..graph.len()).map(VertexState::new).collect();
    let mut events: Vec<VisitEvent<K>> = Vec::new();
    let mut work: VecDeque<VertexId> = VecDeque::new();
    let mut current = start;
    work.push_back(current);

    while !work.is_empty() {
        for link in graph.links() {
            let (u, v) = (link.source(), link.target());
            if current == u && states[v].color() != Color::Black {
                let distance = states[current].distance() + 1;
                states[v].set_distance(distance);
                work.push_back(v);
            }
            if current == v && states[u].color() != Color::Black {
                let distance = states[current].distance() + 1;
                states[u].set_distance(distance);
                work.push_back(u);
            }
        }

        for &id in &work {
            let state = &mut states[id];
            if state.color() != Color::White {
                continue;
            }
            state.set_predecessor(Some(current));
            state.set_color(Color::Gray)?;
            let event = VisitEvent {
                vertex: graph.key_at(id).clone(),
                predecessor: state.predecessor().map(|p| graph.key_at(p).clone()),
                distance: state.distance(),
            };
            log::trace!(
                "Visited vertex {:?}, with predecessor {:?}, and distance {}",
                event.vertex,
                event.predecessor,
                event.distance
            );
            on_visit(&event);
            events.push(event);
        }

        states[current].set_color(Color::Black)?;
        current = match work.pop_front() {
            Some(next) => next,
            None => break,
        };
    }

    log::debug!(
        "BFS from {:?} finished: {} of {} vertices visited",
        source,
        events.len(),
        graph.len()
    );

    Ok(Traversal {
        graph,
        source: start,
        states,
        events,
    })
}
