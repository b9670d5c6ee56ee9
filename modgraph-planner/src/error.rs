//! Planning errors.

use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a set of declared modules cannot be planned.
#[derive(Error, Debug)]
pub enum PlanError {
    // =========================================================================
    // Internal Errors (P000-P099)
    // =========================================================================
    /// Planning was handed input that upstream validation should have
    /// rejected, such as a module type missing from the catalog.
    #[error("P001: Invariant violated for module '{module}': {reason}")]
    InvariantViolation {
        /// The module instance involved.
        module: String,
        /// What was wrong.
        reason: String,
    },

    // =========================================================================
    // Configuration Errors (P100-P199)
    // =========================================================================
    /// The dependency graph contains a cycle.
    #[error(
        "P002: Cyclic dependency between modules: {}{}",
        modules.join(", "),
        artifact.as_ref().map(|p| format!(" (graph saved as {})", p.display())).unwrap_or_default()
    )]
    CyclicDependency {
        /// Modules that could not be ordered, by vertex id.
        modules: Vec<String>,
        /// Graphviz rendering of the graph at the time of the failure.
        dot: String,
        /// Where the rendering was written, if it was.
        artifact: Option<PathBuf>,
    },
}

impl PlanError {
    /// Get the error code (e.g., "P002").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvariantViolation { .. } => "P001",
            Self::CyclicDependency { .. } => "P002",
        }
    }

    /// Check if the user can fix this error by editing the configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::CyclicDependency { .. })
    }
}

/// Result type alias using `PlanError`.
pub type Result<T> = std::result::Result<T, PlanError>;
