//! Visit events emitted by breadth-first traversal.

use serde::Serialize;

/// One vertex being discovered (turned gray) during a traversal.
///
/// Events are produced in discovery order. `distance` is the value the
/// vertex carried at the moment it was discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitEvent<K> {
    /// The discovered vertex.
    pub vertex: K,
    /// The vertex it was discovered from; `None` for the traversal source.
    pub predecessor: Option<K>,
    /// Hop count from the source at discovery time.
    pub distance: usize,
}

impl<K: std::fmt::Display> std::fmt::Display for VisitEvent<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.predecessor {
            Some(pred) => write!(
                f,
                "Visited vertex {}, with predecessor {}, and distance {}.",
                self.vertex, pred, self.distance
            ),
            None => write!(
                f,
                "Visited vertex {}, with no predecessor, and distance {}.",
                self.vertex, self.distance
            ),
        }
    }
}
