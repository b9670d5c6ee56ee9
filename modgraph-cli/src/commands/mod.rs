//! CLI command implementations.

pub mod catalog;
pub mod graph;
pub mod plan;
pub mod validate;

use anyhow::{Context, Result};
use modgraph_core::catalog::ModuleCatalog;
use modgraph_core::config::ConfigurationDefinition;
use std::path::Path;

/// Load a catalog and a configuration, without validating the configuration.
pub(crate) fn load_inputs(
    config: &Path,
    catalog: &Path,
) -> Result<(ConfigurationDefinition, ModuleCatalog)> {
    let catalog = ModuleCatalog::from_file(catalog)
        .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
    let config = ConfigurationDefinition::from_file(config)
        .with_context(|| format!("Failed to load configuration {}", config.display()))?;
    Ok((config, catalog))
}
