//! Plan command - print the execution plan of a configuration.

use anyhow::{Context, Result};
use clap::ValueEnum;
use modgraph_planner::{ExecutionPlan, Planner, PlannerConfig};
use std::path::{Path, PathBuf};

/// Output format of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per module, grouped by path.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Run the plan command.
pub fn run(
    config_path: &Path,
    catalog_path: &Path,
    format: OutputFormat,
    debug_graph: PathBuf,
    loop_type: &str,
) -> Result<()> {
    let (config, catalog) = super::load_inputs(config_path, catalog_path)?;

    if let Err(errors) = config.validate() {
        for error in &errors {
            tracing::error!("{}", error);
        }
        anyhow::bail!(
            "{} has {} validation error(s), run `modgraph validate` for details",
            config_path.display(),
            errors.len()
        );
    }

    let invalid = config
        .validate_parameters(&catalog)
        .iter()
        .filter(|report| !report.is_valid())
        .count();
    if invalid > 0 {
        anyhow::bail!("{} module(s) have invalid parameters", invalid);
    }

    let planner_config = PlannerConfig::new()
        .with_loop_control_type(loop_type)
        .with_debug_graph_path(debug_graph);
    let plan = Planner::with_config(&catalog, planner_config)
        .plan_configuration(&config)
        .with_context(|| format!("Failed to plan {}", config.name))?;

    match format {
        OutputFormat::Text => print_text(&config.name, &plan),
        OutputFormat::Json => println!("{}", plan.to_json()?),
    }

    Ok(())
}

fn print_text(name: &str, plan: &ExecutionPlan) {
    println!("Execution plan for: {}", name);
    println!();

    for group in plan {
        println!("[{}]", group.id);
        for (position, module) in group.modules.iter().enumerate() {
            println!("  {:>3}. {} ({})", position + 1, module.name, module.module_type);
        }
        println!();
    }

    println!(
        "{} modules in {} execution paths",
        plan.module_count(),
        plan.len()
    );
}
