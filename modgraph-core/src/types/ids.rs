//! Identifier newtypes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of the implicit execution path holding every module not claimed by a
/// declared path.
pub const DEFAULT_EXECUTION_PATH: &str = "default";

/// Identifier for a vertex in the module graph.
///
/// Vertex ids are renumbered contiguously before sorting and double as the
/// tie-break key between modules with no ordering constraint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct VertexId(u32);

impl VertexId {
    /// Create a new vertex ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// The next id in sequence.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vertex_{}", self.0)
    }
}

/// Identifier for an execution path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathId(String);

impl PathId {
    /// Create a path ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id of the implicit default path.
    #[must_use]
    pub fn default_path() -> Self {
        Self(DEFAULT_EXECUTION_PATH.to_string())
    }

    /// Check whether this is the implicit default path.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_EXECUTION_PATH
    }

    /// Borrow the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PathId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_id_display() {
        assert_eq!(VertexId::new(7).to_string(), "vertex_7");
        assert_eq!(VertexId::new(7).next(), VertexId::new(8));
    }

    #[test]
    fn vertex_ids_order_numerically() {
        assert!(VertexId::new(2) < VertexId::new(10));
    }

    #[test]
    fn default_path() {
        let id = PathId::default_path();
        assert!(id.is_default());
        assert_eq!(id.as_str(), "default");
        assert!(!PathId::from("loop_body").is_default());
    }

    #[test]
    fn path_id_serializes_as_plain_string() {
        let yaml = serde_yaml::to_string(&PathId::from("p1")).unwrap();
        assert_eq!(yaml.trim(), "p1");
    }
}
