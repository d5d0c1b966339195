//! Per-traversal vertex state: tri-color marking, distance and predecessor.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::VertexId;

/// Discovery state of a vertex during a breadth-first traversal.
///
/// Colors only move forward: `White` -> `Gray` -> `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    /// Not discovered yet.
    White = 0,
    /// Discovered, neighbors not fully expanded.
    Gray = 1,
    /// Fully expanded.
    Black = 2,
}

impl Color {
    /// Return a human-readable name for this color.
    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Gray => "gray",
            Self::Black => "black",
        }
    }

    /// Parse a color from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "white" => Some(Self::White),
            "gray" | "grey" => Some(Self::Gray),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Traversal state of a single vertex.
///
/// One of these exists per vertex per traversal run, so the graph itself is
/// never mutated by a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexState {
    vertex: VertexId,
    color: Color,
    distance: usize,
    predecessor: Option<VertexId>,
}

impl VertexState {
    /// Fresh state: white, distance 0, no predecessor.
    pub fn new(vertex: VertexId) -> Self {
        Self {
            vertex,
            color: Color::White,
            distance: 0,
            predecessor: None,
        }
    }

    /// The vertex this state belongs to.
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Move the color forward. Re-applying the current color is a no-op;
    /// any move backwards fails and leaves the color unchanged.
    pub fn set_color(&mut self, color: Color) -> GraphResult<()> {
        if color < self.color {
            return Err(GraphError::InvalidStateTransition {
                from: self.color,
                to: color,
            });
        }
        self.color = color;
        Ok(())
    }

    pub fn distance(&self) -> usize {
        self.distance
    }

    pub fn set_distance(&mut self, distance: usize) {
        self.distance = distance;
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    /// Record the vertex this one was discovered from. Pointing a vertex at
    /// itself stores no predecessor.
    pub fn set_predecessor(&mut self, predecessor: Option<VertexId>) {
        self.predecessor = predecessor.filter(|&p| p != self.vertex);
    }

    /// True once the vertex has been discovered.
    pub fn is_discovered(&self) -> bool {
        self.color != Color::White
    }
}
