//! Strongly-typed identifiers used across planning.

mod ids;

pub use ids::{DEFAULT_EXECUTION_PATH, PathId, VertexId};
