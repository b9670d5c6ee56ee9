//! Validate command - check a configuration against a module catalog.

use anyhow::Result;
use modgraph_core::catalog::ModuleCatalog;
use modgraph_core::config::ConfigurationDefinition;
use modgraph_planner::{ExecutionPlan, PlanError, Planner, PlannerConfig};
use std::path::Path;

/// Run the validate command.
pub fn run(config_path: &Path, catalog_path: &Path, loop_type: &str) -> Result<()> {
    let file = config_path.display().to_string();
    tracing::info!(file = %file, "Validating configuration");

    println!("Validation Results for: {}", file);
    println!("========================{}", "=".repeat(file.len()));
    println!();

    let (config, catalog) = match super::load_inputs(config_path, catalog_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            println!("✗ LOAD ERROR:");
            println!("  {:#}", e);
            anyhow::bail!("Loading failed");
        }
    };

    println!("✓ YAML syntax is valid ({} module definitions)", catalog.len());
    println!();

    let mut has_errors = false;
    let mut has_warnings = false;

    match config.validate() {
        Ok(()) => println!("✓ Configuration structure is valid"),
        Err(errors) => {
            has_errors = true;
            println!("✗ Configuration validation failed:");
            for error in &errors {
                println!("  - {}", error);
            }
        }
    }
    println!();

    for report in config.validate_parameters(&catalog) {
        if report.is_valid() && report.warnings.is_empty() {
            continue;
        }

        println!("Module {}::{}", report.module_type, report.module);
        for error in &report.errors {
            println!("  ✗ {}", error);
        }
        for warning in &report.warnings {
            println!("  ⚠ {}", warning);
        }
        has_errors |= !report.is_valid();
        has_warnings |= !report.warnings.is_empty();
    }
    if has_warnings {
        println!("⚠ Unexpected parameters are never used by their module");
        println!();
    }

    if !has_errors {
        match dry_run(&config, &catalog, loop_type) {
            Ok(plan) => {
                println!(
                    "✓ Planning passed ({} modules in {} paths)",
                    plan.module_count(),
                    plan.len()
                );
            }
            Err(PlanError::CyclicDependency { modules, .. }) => {
                has_errors = true;
                println!("✗ Cyclic dependency between: {}", modules.join(", "));
            }
            Err(e) => {
                has_errors = true;
                println!("✗ Planning failed:");
                println!("  {}", e);
            }
        }
    }

    println!();
    println!("========================{}", "=".repeat(file.len()));

    if has_errors {
        println!("✗ Validation FAILED");
        anyhow::bail!("Configuration validation failed");
    } else if has_warnings {
        println!("⚠ Validation passed with warnings");
    } else {
        println!("✓ Validation PASSED");
    }

    Ok(())
}

/// Plan without writing a cycle artifact, honoring the loop-control type.
fn dry_run(
    config: &ConfigurationDefinition,
    catalog: &ModuleCatalog,
    loop_type: &str,
) -> Result<ExecutionPlan, PlanError> {
    let planner_config = PlannerConfig::new()
        .with_loop_control_type(loop_type)
        .without_debug_graph();
    Planner::with_config(catalog, planner_config).plan_configuration(config)
}
