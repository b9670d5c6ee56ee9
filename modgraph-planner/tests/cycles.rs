//! Integration tests for cycle detection and the debug artifact.

use modgraph_core::InputTag;
use modgraph_core::config::ModuleDecl;
use modgraph_planner::{PlanError, Planner, PlannerConfig};

mod common;

use common::{generic_catalog, reading};

fn cyclic_modules() -> Vec<ModuleDecl> {
    vec![
        reading("A", "Pass", "B"),
        reading("B", "Pass", "A"),
        ModuleDecl::new("sink", "Sink")
            .with_parameter("input", vec![InputTag::new("A", "out")]),
    ]
}

#[test]
fn cycle_fails_without_partial_order() {
    let catalog = generic_catalog();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.debug");
    let planner = Planner::with_config(&catalog, PlannerConfig::new().with_debug_graph_path(&path));

    let (modules, dot, artifact) = match planner.plan(&cyclic_modules(), &[]) {
        Err(PlanError::CyclicDependency {
            modules,
            dot,
            artifact,
        }) => (modules, dot, artifact),
        other => panic!("Expected cyclic dependency, got {:?}", other),
    };

    assert_eq!(modules, vec!["A", "B", "sink"]);
    assert!(dot.starts_with("digraph G {"));
    assert!(dot.contains("label=\"A\""));
    assert!(dot.contains("label=\"B\""));
    assert_eq!(artifact.as_deref(), Some(path.as_path()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), dot);
}

#[test]
fn cycle_without_debug_artifact() {
    let catalog = generic_catalog();
    let planner = Planner::with_config(&catalog, PlannerConfig::new().without_debug_graph());

    let err = planner.plan(&cyclic_modules(), &[]).unwrap_err();

    assert_eq!(err.code(), "P002");
    assert!(err.is_config_error());
    assert!(matches!(err, PlanError::CyclicDependency { artifact: None, .. }));
}

#[test]
fn two_module_cycle_is_not_pruned_away() {
    // A and B consume each other, so neither has zero out-degree
    let catalog = generic_catalog();
    let planner = Planner::with_config(&catalog, PlannerConfig::new().without_debug_graph());
    let modules = vec![reading("A", "Pass", "B"), reading("B", "Pass", "A")];

    let err = planner.plan(&modules, &[]).unwrap_err();
    assert!(matches!(err, PlanError::CyclicDependency { .. }));
}
