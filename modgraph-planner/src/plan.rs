//! The planning artifact: sorted modules grouped by execution path.

use modgraph_core::config::ModuleDecl;
use modgraph_core::types::PathId;
use serde::Serialize;

/// Modules of one execution path, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathGroup {
    /// Execution path id.
    pub id: PathId,
    /// Member modules, in global topological order.
    pub modules: Vec<ModuleDecl>,
}

impl PathGroup {
    /// Names of the member modules.
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }
}

/// Ordered execution plan.
///
/// Groups appear in the order their first module appears in the sorted
/// module list, and each path id appears once.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExecutionPlan {
    groups: Vec<PathGroup>,
}

impl ExecutionPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a module to the group of `path`, creating the group if needed.
    pub fn push(&mut self, path: PathId, module: ModuleDecl) {
        match self.groups.iter_mut().find(|group| group.id == path) {
            Some(group) => group.modules.push(module),
            None => self.groups.push(PathGroup {
                id: path,
                modules: vec![module],
            }),
        }
    }

    /// Path groups in plan order.
    pub fn groups(&self) -> &[PathGroup] {
        &self.groups
    }

    /// Get the group of a path.
    pub fn get(&self, path: &str) -> Option<&PathGroup> {
        self.groups.iter().find(|group| group.id.as_str() == path)
    }

    /// Names of every planned module, group by group.
    pub fn module_names(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|group| group.modules.iter().map(|m| m.name.as_str()))
            .collect()
    }

    /// Total number of planned modules.
    pub fn module_count(&self) -> usize {
        self.groups.iter().map(|group| group.modules.len()).sum()
    }

    /// Number of path groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no module was planned.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a ExecutionPlan {
    type Item = &'a PathGroup;
    type IntoIter = std::slice::Iter<'a, PathGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
