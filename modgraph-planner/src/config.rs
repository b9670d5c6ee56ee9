//! Planner configuration.

use std::path::{Path, PathBuf};

/// Type name of the loop-control module unless configured otherwise.
pub const DEFAULT_LOOP_CONTROL_TYPE: &str = "Looper";

/// File the graph is dumped to when sorting finds a cycle, unless configured otherwise.
pub const DEFAULT_DEBUG_GRAPH_PATH: &str = "graph.debug";

/// Configuration for the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Module type whose instances repeat a sub-path.
    pub loop_control_type: String,
    /// Where to write the Graphviz dump on a cycle. `None` disables the dump.
    pub debug_graph_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            loop_control_type: DEFAULT_LOOP_CONTROL_TYPE.to_string(),
            debug_graph_path: Some(PathBuf::from(DEFAULT_DEBUG_GRAPH_PATH)),
        }
    }
}

impl PlannerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the loop-control module type.
    pub fn with_loop_control_type(mut self, module_type: impl Into<String>) -> Self {
        self.loop_control_type = module_type.into();
        self
    }

    /// Set the cycle debug artifact path.
    pub fn with_debug_graph_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_graph_path = Some(path.into());
        self
    }

    /// Do not write a debug artifact on cycles.
    pub fn without_debug_graph(mut self) -> Self {
        self.debug_graph_path = None;
        self
    }

    /// Get the cycle debug artifact path.
    pub fn debug_graph_path(&self) -> Option<&Path> {
        self.debug_graph_path.as_deref()
    }
}
