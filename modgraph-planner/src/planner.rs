//! Planner - turns declared modules into an execution plan.

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::graph::{GraphBuilder, ModuleGraph};
use crate::looper::extend_loop_ordering;
use crate::paths::assign_execution_paths;
use crate::plan::ExecutionPlan;
use crate::prune::prune_unused;
use crate::sort::topological_sort;
use modgraph_core::catalog::ModuleCatalog;
use modgraph_core::config::{ConfigurationDefinition, ExecutionPath, ModuleDecl};

/// Plans module execution against a catalog.
///
/// Planning runs, in order: graph building, pruning of unused modules,
/// loop-ordering extension, topological sorting and execution path
/// assignment. Nothing is cached between runs.
///
/// # Example
///
/// ```ignore
/// let planner = Planner::new(&catalog);
/// let plan = planner.plan(&config.modules, &config.paths)?;
///
/// for group in &plan {
///     println!("{}: {:?}", group.id, group.module_names());
/// }
/// ```
pub struct Planner<'a> {
    catalog: &'a ModuleCatalog,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a planner with default configuration.
    pub fn new(catalog: &'a ModuleCatalog) -> Self {
        Self::with_config(catalog, PlannerConfig::default())
    }

    /// Create a planner with custom configuration.
    pub fn with_config(catalog: &'a ModuleCatalog, config: PlannerConfig) -> Self {
        Self { catalog, config }
    }

    /// Get the planner configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Build the dependency graph, pruned and extended with loop ordering
    /// constraints, ready to be sorted.
    pub fn build_graph(&self, modules: &[ModuleDecl]) -> Result<ModuleGraph> {
        let mut graph = GraphBuilder::new(self.catalog).build(modules)?;

        let pruned = prune_unused(&mut graph);
        let constraints = extend_loop_ordering(&mut graph, &self.config.loop_control_type);

        tracing::debug!(
            modules = graph.vertex_count(),
            pruned = pruned.len(),
            constraints,
            "Prepared module graph"
        );

        Ok(graph)
    }

    /// Plan the execution of `modules`, grouped by `paths`.
    pub fn plan(&self, modules: &[ModuleDecl], paths: &[ExecutionPath]) -> Result<ExecutionPlan> {
        let mut graph = self.build_graph(modules)?;
        let sorted = topological_sort(&mut graph, self.config.debug_graph_path())?;

        let ordered = sorted
            .iter()
            .filter_map(|&index| graph.vertex(index))
            .filter_map(|vertex| modules.get(vertex.declaration));
        let plan = assign_execution_paths(ordered, paths);

        tracing::info!(
            modules = plan.module_count(),
            paths = plan.len(),
            "Execution plan ready"
        );

        Ok(plan)
    }

    /// Plan a whole configuration.
    pub fn plan_configuration(&self, config: &ConfigurationDefinition) -> Result<ExecutionPlan> {
        let _span = tracing::info_span!("plan", configuration = %config.name).entered();
        self.plan(&config.modules, &config.paths)
    }
}
