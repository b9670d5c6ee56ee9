//! Graph command - export the module graph in Graphviz format.

use anyhow::{Context, Result};
use modgraph_planner::{Planner, PlannerConfig, to_dot};
use std::path::Path;

/// Run the graph command.
///
/// The exported graph is the one handed to the sorter: unused modules are
/// pruned and loop ordering constraints are present.
pub fn run(
    config_path: &Path,
    catalog_path: &Path,
    output: Option<&Path>,
    loop_type: &str,
) -> Result<()> {
    let (config, catalog) = super::load_inputs(config_path, catalog_path)?;

    let planner = Planner::with_config(
        &catalog,
        PlannerConfig::new().with_loop_control_type(loop_type),
    );
    let graph = planner
        .build_graph(&config.modules)
        .with_context(|| format!("Failed to build the graph of {}", config.name))?;
    let dot = to_dot(&graph);

    match output {
        Some(path) => {
            std::fs::write(path, &dot)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                modules = graph.vertex_count(),
                "Graph exported"
            );
        }
        None => print!("{}", dot),
    }

    Ok(())
}
