//! Removal of modules whose outputs nobody consumes.

use crate::graph::ModuleGraph;

/// Remove every vertex with no outgoing edge, except internal modules and
/// modules declaring no output at all.
///
/// Vertices are visited in declaration order, and sweeps repeat until one
/// removes nothing: a module whose only consumer was pruned is pruned too.
/// Returns the names of the removed modules in removal order.
pub fn prune_unused(graph: &mut ModuleGraph) -> Vec<String> {
    let mut removed = Vec::new();

    loop {
        let before = removed.len();
        let candidates: Vec<usize> = graph.indices().collect();

        for index in candidates {
            let Some(vertex) = graph.vertex(index) else {
                continue;
            };
            if graph.out_degree(index) > 0
                || vertex.is_internal()
                || !vertex.definition.has_outputs()
            {
                continue;
            }

            if let Some(vertex) = graph.remove_vertex(index) {
                tracing::info!(
                    module = %vertex.name,
                    module_type = %vertex.module_type,
                    "Module output is not used by any other module, removing it from the configuration"
                );
                removed.push(vertex.name);
            }
        }

        if removed.len() == before {
            break;
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use modgraph_core::catalog::ModuleDefinition;
    use std::sync::Arc;

    fn producer() -> Arc<ModuleDefinition> {
        Arc::new(ModuleDefinition::new("Producer").with_output("out"))
    }

    #[test]
    fn unused_producer_is_removed() {
        let mut graph = ModuleGraph::new();
        let a = graph.add_vertex("a", "Producer", producer(), 0);
        let b = graph.add_vertex("b", "Producer", producer(), 1);
        let sink = graph.add_vertex("sink", "Sink", Arc::new(ModuleDefinition::new("Sink")), 2);
        graph.add_edge(Edge::data(a, sink, "out"));

        let removed = prune_unused(&mut graph);

        assert_eq!(removed, vec!["b"]);
        assert!(graph.vertex(b).is_none());
        assert!(graph.vertex(a).is_some());
        assert!(graph.vertex(sink).is_some());
    }

    #[test]
    fn internal_modules_are_kept() {
        let mut graph = ModuleGraph::new();
        graph.add_vertex(
            "cuba",
            "cuba",
            Arc::new(ModuleDefinition::new("cuba").with_output("ps_points").internal()),
            0,
        );

        assert!(prune_unused(&mut graph).is_empty());
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn pruning_cascades_to_a_fixed_point() {
        // a -> b -> c, c produces output nobody reads
        let mut graph = ModuleGraph::new();
        let a = graph.add_vertex("a", "Producer", producer(), 0);
        let b = graph.add_vertex("b", "Producer", producer(), 1);
        let c = graph.add_vertex("c", "Producer", producer(), 2);
        graph.add_edge(Edge::data(a, b, "out"));
        graph.add_edge(Edge::data(b, c, "out"));

        let removed = prune_unused(&mut graph);

        assert_eq!(removed, vec!["c", "b", "a"]);
        assert!(graph.is_empty());
    }

    #[test]
    fn later_declarations_are_caught_in_the_same_sweep() {
        // b is declared after its only consumer c
        let mut graph = ModuleGraph::new();
        let c = graph.add_vertex("c", "Producer", producer(), 0);
        let b = graph.add_vertex("b", "Producer", producer(), 1);
        graph.add_edge(Edge::data(b, c, "out"));

        assert_eq!(prune_unused(&mut graph), vec!["c", "b"]);
    }
}
