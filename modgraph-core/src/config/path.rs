//! Execution path declarations.

use crate::types::PathId;
use serde::{Deserialize, Serialize};

/// A named group of modules executed together, e.g. the body of a loop.
///
/// # Example
///
/// ```yaml
/// paths:
///   - id: loop_body
///     modules: [boost, integrand]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionPath {
    /// Path identifier.
    pub id: PathId,

    /// Names of member module instances.
    #[serde(default, alias = "elements")]
    pub modules: Vec<String>,
}

impl ExecutionPath {
    /// Declare a path.
    pub fn new<I, S>(id: impl Into<PathId>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the path lists the given module.
    pub fn contains(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}
