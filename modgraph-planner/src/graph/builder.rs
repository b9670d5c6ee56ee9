//! GraphBuilder - converts declared modules to a ModuleGraph.

use super::{Edge, ModuleGraph};
use crate::error::{PlanError, Result};
use crate::resolver::input_tags_for_input;
use modgraph_core::catalog::ModuleCatalog;
use modgraph_core::config::ModuleDecl;
use std::sync::Arc;

/// Builder that converts a list of module declarations to a [`ModuleGraph`].
pub struct GraphBuilder<'a> {
    catalog: &'a ModuleCatalog,
    graph: ModuleGraph,
}

impl<'a> GraphBuilder<'a> {
    /// Create a new graph builder.
    pub fn new(catalog: &'a ModuleCatalog) -> Self {
        Self {
            catalog,
            graph: ModuleGraph::new(),
        }
    }

    /// Build the graph: one vertex per declaration, one edge per reference
    /// from a consumer's input to another declared module's output.
    pub fn build(mut self, modules: &[ModuleDecl]) -> Result<ModuleGraph> {
        self.add_vertices(modules)?;
        self.add_edges(modules);

        tracing::debug!(
            vertices = self.graph.vertex_count(),
            edges = self.graph.edge_count(),
            "Built module graph"
        );

        Ok(self.graph)
    }

    fn add_vertices(&mut self, modules: &[ModuleDecl]) -> Result<()> {
        for (declaration, module) in modules.iter().enumerate() {
            let definition = self
                .catalog
                .get(&module.module_type)
                .ok_or_else(|| PlanError::InvariantViolation {
                    module: module.name.clone(),
                    reason: format!("type '{}' is not in the catalog", module.module_type),
                })?;

            if self.graph.index_of(&module.name).is_some() {
                return Err(PlanError::InvariantViolation {
                    module: module.name.clone(),
                    reason: "declared more than once".to_string(),
                });
            }

            self.graph.add_vertex(
                &module.name,
                &module.module_type,
                Arc::clone(definition),
                declaration,
            );
        }

        Ok(())
    }

    fn add_edges(&mut self, modules: &[ModuleDecl]) {
        for module in modules {
            let Some(consumer) = self.graph.index_of(&module.name) else {
                continue;
            };
            let Some(definition) = self.graph.vertex(consumer).map(|v| Arc::clone(&v.definition))
            else {
                continue;
            };

            for input in &definition.inputs {
                // Unconfigured optional input
                let Some(tags) = input_tags_for_input(input, &module.parameters) else {
                    continue;
                };

                for tag in tags {
                    if tag.module == module.name {
                        continue;
                    }
                    let Some(producer) = self.graph.index_of(&tag.module) else {
                        continue;
                    };
                    let produces = self.graph.vertex(producer).is_some_and(|v| {
                        v.definition
                            .outputs
                            .iter()
                            .any(|output| tag.points_to(&v.name, &output.name))
                    });
                    if !produces {
                        continue;
                    }

                    tracing::trace!(
                        producer = %tag.module,
                        consumer = %module.name,
                        input = %input.name,
                        label = %tag.label(),
                        "Adding edge"
                    );
                    self.graph.add_edge(Edge::data(producer, consumer, tag.label()));
                }
            }
        }
    }
}
