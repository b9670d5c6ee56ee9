//! Catalog command - list module definitions.

use anyhow::{Context, Result};
use modgraph_core::catalog::ModuleCatalog;
use std::path::Path;

/// Run the catalog command.
pub fn run(path: &Path) -> Result<()> {
    let catalog = ModuleCatalog::from_file(path)
        .with_context(|| format!("Failed to load catalog {}", path.display()))?;

    println!("Module definitions in {}", path.display());
    println!();

    for definition in catalog.iter() {
        let mut flags = Vec::new();
        if definition.internal {
            flags.push("internal");
        }
        if !definition.has_outputs() {
            flags.push("no outputs");
        }
        if flags.is_empty() {
            println!("{}", definition.name);
        } else {
            println!("{} [{}]", definition.name, flags.join(", "));
        }

        if let Some(description) = &definition.description {
            println!("  {}", description);
        }
        for input in &definition.inputs {
            let mut line = format!("  in   {}", input.name);
            if input.indexed {
                line.push_str("[]");
            }
            if input.optional {
                line.push_str(" (optional)");
            }
            println!("{}", line);
        }
        for output in &definition.outputs {
            println!("  out  {}", output.name);
        }
        for attribute in &definition.attributes {
            let mut line = format!("  attr {}", attribute.name);
            if attribute.global {
                line.push_str(" (global)");
            }
            if attribute.optional {
                line.push_str(" (optional)");
            }
            println!("{}", line);
        }
        println!();
    }

    println!("{} definitions", catalog.len());
    Ok(())
}
