//! Integration tests from YAML documents to execution plans.

use std::io::Write;

use modgraph_core::catalog::{ModuleCatalog, ParameterIssue, validate_parameters};
use modgraph_core::config::ConfigurationDefinition;
use modgraph_planner::to_dot;

mod common;

use common::{CATALOG, CONFIG, catalog, config, planner};

#[test]
fn configured_parameters_match_the_catalog() {
    let catalog = catalog();

    for module in &config().modules {
        let report = validate_parameters(module, &catalog);
        assert!(report.is_valid(), "{}: {:?}", module.name, report.errors);
        assert!(report.warnings.is_empty(), "{}: {:?}", module.name, report.warnings);
    }
}

#[test]
fn missing_parameters_are_reported_before_planning() {
    let yaml = r#"
name: broken
modules:
  - name: gen
    type: BreitWignerGenerator
    parameters:
      mass: 80.4
      color: red
      "@weight": 1
"#;
    let config = ConfigurationDefinition::from_yaml_validated(yaml).unwrap();
    let report = validate_parameters(&config.modules[0], &catalog());

    assert_eq!(
        report.errors,
        vec![
            ParameterIssue::MissingInput {
                name: "ps_point".to_string()
            },
            ParameterIssue::MissingAttribute {
                name: "width".to_string()
            },
        ]
    );
    assert_eq!(
        report.warnings,
        vec![ParameterIssue::UnexpectedParameter {
            name: "color".to_string()
        }]
    );
}

#[test]
fn global_attributes_are_resolved_from_the_configuration() {
    let catalog = catalog();
    assert!(config().validate_parameters(&catalog).iter().all(|r| r.is_valid()));

    let yaml = r#"
name: no_globals
modules:
  - name: flatter
    type: BreitWignerGenerator
    parameters:
      ps_point: "cuba::ps_points/0"
      mass: 80.4
      width: 2.0
"#;
    let config = ConfigurationDefinition::from_yaml_validated(yaml).unwrap();
    let reports = config.validate_parameters(&catalog);

    assert_eq!(reports.len(), 1);
    assert_eq!(
        reports[0].errors,
        vec![ParameterIssue::MissingGlobalAttribute {
            name: "energy".to_string()
        }]
    );
}

#[test]
fn plan_from_files() {
    let dir = tempfile::tempdir().unwrap();

    let catalog_path = dir.path().join("catalog.yaml");
    std::fs::File::create(&catalog_path)
        .unwrap()
        .write_all(CATALOG.as_bytes())
        .unwrap();

    let config_path = dir.path().join("config.yaml");
    std::fs::File::create(&config_path)
        .unwrap()
        .write_all(CONFIG.as_bytes())
        .unwrap();

    let catalog = ModuleCatalog::from_file(&catalog_path).unwrap();
    let config = ConfigurationDefinition::from_file(&config_path).unwrap();
    config.validate().unwrap();

    let plan = planner(&catalog).plan_configuration(&config).unwrap();
    assert_eq!(plan.module_count(), 7);
}

#[test]
fn plan_serializes_to_json() {
    let catalog = catalog();
    let plan = planner(&catalog).plan_configuration(&config()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
    let groups = json["groups"].as_array().unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["id"], "default");
    assert_eq!(groups[1]["id"], "loop_body");
    assert_eq!(groups[1]["modules"][0]["name"], "term");
    assert_eq!(groups[1]["modules"][0]["parameters"]["a"], "looper::jacobian");
}

#[test]
fn graph_export_shows_pruned_and_extended_graph() {
    let catalog = catalog();
    let graph = planner(&catalog).build_graph(&config().modules).unwrap();
    let dot = to_dot(&graph);

    assert!(dot.contains("label=\"cuba\""));
    assert!(dot.contains("style=\"dashed\",label=\"cuba\""));
    assert!(!dot.contains("label=\"unused\""));
    assert!(dot.contains("label=\"ps_points[0]\""));
    assert!(dot.contains("style=\"invis\",label=\"virtual link\""));
}

#[test]
fn structural_errors_are_caught_by_validation() {
    let yaml = r#"
name: broken
modules:
  - name: a
    type: Constant
  - name: a
    type: Constant
paths:
  - id: body
    modules: [a, ghost]
"#;
    let config = ConfigurationDefinition::from_yaml(yaml).unwrap();
    let errors = config.validate().unwrap_err();
    assert_eq!(errors.len(), 2);
}
