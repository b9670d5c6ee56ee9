//! Common test utilities for integration tests.

#![allow(dead_code)]

use modgraph_core::catalog::{InputSlot, ModuleCatalog, ModuleDefinition};
use modgraph_core::config::{ConfigurationDefinition, ModuleDecl};
use modgraph_core::tag::InputTag;
use modgraph_planner::graph::ModuleGraph;
use modgraph_planner::{Planner, PlannerConfig};

/// Catalog of a small matrix-element style pipeline.
pub const CATALOG: &str = r#"
- name: cuba
  internal: true
  outputs:
    - name: ps_points

- name: Input
  internal: true
  outputs:
    - name: p1
    - name: p2

- name: BreitWignerGenerator
  inputs:
    - name: ps_point
  outputs:
    - name: s
    - name: jacobian
  attributes:
    - name: mass
    - name: width
    - name: energy
      global: true

- name: BlockD
  inputs:
    - name: s13
    - name: s24
    - name: particles
      many: true
  outputs:
    - name: solutions

- name: Looper
  inputs:
    - name: solutions
  outputs:
    - name: particles
    - name: jacobian
  attributes:
    - name: path

- name: Constant
  outputs:
    - name: value
  attributes:
    - name: value

- name: Product
  inputs:
    - name: a
    - name: b
  outputs:
    - name: product

- name: Integrand
  inputs:
    - name: inputs
      many: true
"#;

/// Configuration using every type of [`CATALOG`].
///
/// `unused` produces outputs nobody reads. `weight` feeds the loop body but
/// is otherwise unrelated to `looper`.
pub const CONFIG: &str = r#"
name: looped_integration
global_parameters:
  energy: 13000.0

modules:
  - name: cuba
    type: cuba
  - name: input
    type: Input
  - name: flatter_s13
    type: BreitWignerGenerator
    parameters:
      ps_point: "cuba::ps_points/0"
      mass: 80.419002
      width: 2.0476
  - name: flatter_s24
    type: BreitWignerGenerator
    parameters:
      ps_point: "cuba::ps_points/1"
      mass: 80.419002
      width: 2.0476
  - name: blockd
    type: BlockD
    parameters:
      s13: "flatter_s13::s"
      s24: "flatter_s24::s"
      particles: ["input::p1", "input::p2"]
  - name: looper
    type: Looper
    parameters:
      solutions: "blockd::solutions"
      path: loop_body
  - name: weight
    type: Constant
    parameters:
      value: 2.0
  - name: term
    type: Product
    parameters:
      a: "looper::jacobian"
      b: "weight::value"
  - name: integrand
    type: Integrand
    parameters:
      inputs: ["term::product", "flatter_s13::jacobian", "flatter_s24::jacobian"]
  - name: unused
    type: BreitWignerGenerator
    parameters:
      ps_point: "cuba::ps_points/2"
      mass: 173.0
      width: 1.5

paths:
  - id: loop_body
    modules: [term]
"#;

/// Load [`CATALOG`].
pub fn catalog() -> ModuleCatalog {
    ModuleCatalog::from_yaml(CATALOG).unwrap()
}

/// Load [`CONFIG`].
pub fn config() -> ConfigurationDefinition {
    ConfigurationDefinition::from_yaml_validated(CONFIG).unwrap()
}

/// Planner configuration that never writes to the working directory.
pub fn test_planner_config() -> PlannerConfig {
    PlannerConfig::new().without_debug_graph()
}

/// Plan `modules` against `catalog` without writing debug artifacts.
pub fn planner(catalog: &ModuleCatalog) -> Planner<'_> {
    Planner::with_config(catalog, test_planner_config())
}

/// A catalog with a generic producer, consumer and two-input combiner.
pub fn generic_catalog() -> ModuleCatalog {
    ModuleCatalog::from_definitions([
        ModuleDefinition::new("Source").with_output("out"),
        ModuleDefinition::new("Pass")
            .with_input(InputSlot::required("input"))
            .with_output("out"),
        ModuleDefinition::new("Combine")
            .with_input(InputSlot::required("a"))
            .with_input(InputSlot::required("b"))
            .with_output("out"),
        ModuleDefinition::new("Sink").with_input(InputSlot::required("input").many()),
    ])
    .unwrap()
}

/// Declare a module of type `module_type` reading `input` from `producer::out`.
pub fn reading(name: &str, module_type: &str, producer: &str) -> ModuleDecl {
    ModuleDecl::new(name, module_type).with_parameter("input", InputTag::new(producer, "out"))
}

/// Names of the live vertices, in the given index order.
pub fn names(graph: &ModuleGraph, order: &[usize]) -> Vec<String> {
    order
        .iter()
        .map(|&index| graph.vertex(index).unwrap().name.clone())
        .collect()
}

/// Assert that every edge between two sorted vertices points forwards.
pub fn assert_topological(graph: &ModuleGraph, order: &[usize]) {
    let position = |index: usize| order.iter().position(|&i| i == index);

    for edge in graph.edges() {
        if let (Some(source), Some(target)) = (position(edge.source), position(edge.target)) {
            assert!(
                source < target,
                "edge {} -> {} ({}) points backwards",
                graph.vertex(edge.source).unwrap().name,
                graph.vertex(edge.target).unwrap().name,
                edge.description
            );
        }
    }
}
