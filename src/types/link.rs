//! Links (directed, weighted edges) between vertices.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::VertexId;

/// Weight given to links when none is specified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed link from `source` to `target`.
///
/// Endpoints are ids into the owning graph's vertex list and never change
/// after creation. Only the weight is mutable, and it is always `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    source: VertexId,
    target: VertexId,
    weight: f64,
}

impl Link {
    /// Create a link with the default weight of 1.0.
    pub fn new(source: VertexId, target: VertexId) -> Self {
        Self {
            source,
            target,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Create a link with an explicit weight.
    pub fn with_weight(source: VertexId, target: VertexId, weight: f64) -> GraphResult<Self> {
        validate_weight(weight)?;
        Ok(Self {
            source,
            target,
            weight,
        })
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn target(&self) -> VertexId {
        self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the weight. Negative or NaN weights are rejected and the old
    /// weight is kept.
    pub fn set_weight(&mut self, weight: f64) -> GraphResult<()> {
        validate_weight(weight)?;
        self.weight = weight;
        Ok(())
    }

    /// True if `vertex` is either endpoint.
    pub fn connects(&self, vertex: VertexId) -> bool {
        self.source == vertex || self.target == vertex
    }

    /// The endpoint across from `vertex`, if `vertex` is on this link.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.source {
            Some(self.target)
        } else if vertex == self.target {
            Some(self.source)
        } else {
            None
        }
    }
}

pub(crate) fn validate_weight(weight: f64) -> GraphResult<()> {
    if weight.is_nan() || weight < 0.0 {
        return Err(GraphError::InvalidWeight(weight));
    }
    Ok(())
}
