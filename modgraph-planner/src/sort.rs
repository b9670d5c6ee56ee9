//! Topological sorting with cycle diagnostics.

use crate::error::{PlanError, Result};
use crate::graph::{ModuleGraph, to_dot};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::path::{Path, PathBuf};

/// Sort the graph so that every edge, data or ordering-only, points forwards.
///
/// Vertex ids are first renumbered contiguously in declaration order; among
/// vertices ready at the same time the smallest id goes first, so unrelated
/// modules keep their declared order. Internal modules are dropped from the
/// returned vertex indices.
///
/// On a cycle nothing is returned: the graph is rendered to DOT, written to
/// `debug_graph_path` when one is given, and reported as
/// [`PlanError::CyclicDependency`].
pub fn topological_sort(
    graph: &mut ModuleGraph,
    debug_graph_path: Option<&Path>,
) -> Result<Vec<usize>> {
    graph.reassign_ids();

    let mut in_degree: HashMap<usize, usize> = graph
        .indices()
        .map(|index| (index, graph.in_degree(index)))
        .collect();

    let mut ready: BinaryHeap<Reverse<_>> = graph
        .vertices()
        .filter(|(index, _)| in_degree[index] == 0)
        .map(|(index, vertex)| Reverse((vertex.id, index)))
        .collect();

    let mut sorted = Vec::with_capacity(in_degree.len());

    while let Some(Reverse((_, index))) = ready.pop() {
        sorted.push(index);

        for target in graph.successors(index) {
            if let Some(degree) = in_degree.get_mut(&target) {
                *degree -= 1;
                if *degree == 0 {
                    if let Some(vertex) = graph.vertex(target) {
                        ready.push(Reverse((vertex.id, target)));
                    }
                }
            }
        }
    }

    if sorted.len() != in_degree.len() {
        return Err(cycle_error(graph, &sorted, debug_graph_path));
    }

    sorted.retain(|&index| graph.vertex(index).is_some_and(|v| !v.is_internal()));
    Ok(sorted)
}

fn cycle_error(
    graph: &ModuleGraph,
    sorted: &[usize],
    debug_graph_path: Option<&Path>,
) -> PlanError {
    let modules: Vec<String> = graph
        .vertices()
        .filter(|(index, _)| !sorted.contains(index))
        .map(|(_, vertex)| vertex.name.clone())
        .collect();

    let dot = to_dot(graph);
    let artifact = debug_graph_path.and_then(|path| write_artifact(path, &dot));

    tracing::error!(
        modules = ?modules,
        artifact = ?artifact,
        "Cyclic dependency found while sorting the module graph"
    );

    PlanError::CyclicDependency {
        modules,
        dot,
        artifact,
    }
}

fn write_artifact(path: &Path, dot: &str) -> Option<PathBuf> {
    match std::fs::write(path, dot) {
        Ok(()) => Some(path.to_path_buf()),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to write graph debug artifact"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Edge;
    use modgraph_core::catalog::ModuleDefinition;
    use std::sync::Arc;

    fn graph(names: &[&str]) -> ModuleGraph {
        let def = Arc::new(ModuleDefinition::new("T").with_output("out"));
        let mut graph = ModuleGraph::new();
        for (i, name) in names.iter().enumerate() {
            graph.add_vertex(*name, "T", Arc::clone(&def), i);
        }
        graph
    }

    fn names(graph: &ModuleGraph, order: &[usize]) -> Vec<String> {
        order
            .iter()
            .map(|&i| graph.vertex(i).unwrap().name.clone())
            .collect()
    }

    #[test]
    fn linear_graph() {
        let mut g = graph(&["c", "b", "a"]);
        g.add_edge(Edge::data(2, 1, "out"));
        g.add_edge(Edge::data(1, 0, "out"));

        let order = topological_sort(&mut g, None).unwrap();
        assert_eq!(names(&g, &order), vec!["a", "b", "c"]);
    }

    #[test]
    fn independent_vertices_keep_declaration_order() {
        let mut g = graph(&["x", "y", "z", "w"]);
        g.add_edge(Edge::data(3, 0, "out"));

        let order = topological_sort(&mut g, None).unwrap();
        assert_eq!(names(&g, &order), vec!["y", "z", "w", "x"]);
    }

    #[test]
    fn ordering_edges_are_respected() {
        let mut g = graph(&["looper", "outside"]);
        g.add_edge(Edge::ordering(1, 0));

        let order = topological_sort(&mut g, None).unwrap();
        assert_eq!(names(&g, &order), vec!["outside", "looper"]);
    }

    #[test]
    fn internal_vertices_are_dropped() {
        let mut g = graph(&["a"]);
        let cuba = g.add_vertex(
            "cuba",
            "cuba",
            Arc::new(ModuleDefinition::new("cuba").with_output("ps_points").internal()),
            1,
        );
        g.add_edge(Edge::data(cuba, 0, "ps_points"));

        let order = topological_sort(&mut g, None).unwrap();
        assert_eq!(names(&g, &order), vec!["a"]);
    }

    #[test]
    fn ids_are_renumbered_after_removal() {
        let mut g = graph(&["a", "b", "c"]);
        g.remove_vertex(0);

        topological_sort(&mut g, None).unwrap();
        assert_eq!(g.vertex(1).unwrap().id.as_u32(), 0);
        assert_eq!(g.vertex(2).unwrap().id.as_u32(), 1);
    }

    #[test]
    fn cycle_is_reported_with_dot_snapshot() {
        let mut g = graph(&["a", "b", "c"]);
        g.add_edge(Edge::data(0, 1, "out"));
        g.add_edge(Edge::data(1, 0, "out"));

        match topological_sort(&mut g, None) {
            Err(PlanError::CyclicDependency {
                modules,
                dot,
                artifact,
            }) => {
                assert_eq!(modules, vec!["a", "b"]);
                assert!(dot.contains("0->1"));
                assert!(dot.contains("1->0"));
                assert!(artifact.is_none());
            }
            other => panic!("Expected cyclic dependency, got {:?}", other),
        }
    }

    #[test]
    fn cycle_writes_debug_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.debug");

        let mut g = graph(&["a", "b"]);
        g.add_edge(Edge::data(0, 1, "out"));
        g.add_edge(Edge::data(1, 0, "out"));

        let err = topological_sort(&mut g, Some(&path)).unwrap_err();
        let PlanError::CyclicDependency { dot, artifact, .. } = err else {
            panic!("Expected cyclic dependency");
        };
        assert_eq!(artifact.as_deref(), Some(path.as_path()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), dot);
    }

    #[test]
    fn unwritable_artifact_keeps_cycle_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("graph.debug");

        let mut g = graph(&["a", "b"]);
        g.add_edge(Edge::data(0, 1, "out"));
        g.add_edge(Edge::data(1, 0, "out"));

        match topological_sort(&mut g, Some(&path)) {
            Err(PlanError::CyclicDependency { artifact, .. }) => assert!(artifact.is_none()),
            other => panic!("Expected cyclic dependency, got {:?}", other),
        }
    }
}
