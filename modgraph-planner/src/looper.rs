//! Ordering constraints around loop-control modules.

use crate::graph::{Edge, ModuleGraph};

/// Make every module feeding a sibling input of a loop-control module's
/// dependents run before the loop-control module.
///
/// For each vertex `L` of `loop_control_type`, each direct successor `T` of
/// `L` and each other direct predecessor `P` of `T`: when `P` is connected
/// to `L` in neither direction, an ordering-only edge `P -> L` is added.
/// Successor and predecessor lists are taken before inserting, so new edges
/// are not expanded further; they do count for later connectivity checks.
/// Returns the number of edges added.
pub fn extend_loop_ordering(graph: &mut ModuleGraph, loop_control_type: &str) -> usize {
    let loopers: Vec<usize> = graph
        .vertices()
        .filter(|(_, vertex)| vertex.module_type == loop_control_type)
        .map(|(index, _)| index)
        .collect();

    let mut added = 0;
    for looper in loopers {
        for target in graph.successors(looper) {
            for source in graph.predecessors(target) {
                if source == looper || graph.is_connected(source, looper) {
                    continue;
                }

                if let (Some(from), Some(to)) = (graph.vertex(source), graph.vertex(looper)) {
                    tracing::debug!(
                        module = %from.name,
                        looper = %to.name,
                        "Adding ordering constraint before loop"
                    );
                }
                graph.add_edge(Edge::ordering(source, looper));
                added += 1;
            }
        }
    }

    added
}
