//! All data types for the tricolor-graph library.

pub mod error;
pub mod event;
pub mod link;
pub mod state;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use event::VisitEvent;
pub use link::{Link, DEFAULT_WEIGHT};
pub use state::{Color, VertexState};
pub use vertex::Vertex;

/// Index of a vertex inside its owning graph.
pub type VertexId = usize;
