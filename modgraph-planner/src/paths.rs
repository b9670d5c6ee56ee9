//! Assignment of sorted modules to execution paths.

use crate::plan::ExecutionPlan;
use modgraph_core::config::{ExecutionPath, ModuleDecl};
use modgraph_core::types::PathId;

/// The path a module runs in: the first declared path listing it, or the
/// default path.
pub fn path_of(module: &str, paths: &[ExecutionPath]) -> PathId {
    paths
        .iter()
        .find(|path| path.contains(module))
        .map_or_else(PathId::default_path, |path| path.id.clone())
}

/// Group modules, given in execution order, by execution path.
pub fn assign_execution_paths<'a>(
    sorted: impl IntoIterator<Item = &'a ModuleDecl>,
    paths: &[ExecutionPath],
) -> ExecutionPlan {
    let mut plan = ExecutionPlan::new();
    for module in sorted {
        plan.push(path_of(&module.name, paths), module.clone());
    }
    plan
}
