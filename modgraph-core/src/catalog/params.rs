//! Checking a module instance's parameters against its definition.

use super::ModuleCatalog;
use crate::config::{ModuleDecl, ParameterSet};
use std::fmt;

/// Prefix of parameters reserved for the framework itself.
const INTERNAL_PARAMETER_PREFIX: char = '@';

/// A single finding about a module instance's parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterIssue {
    /// The instance's type is not in the catalog.
    UnknownType {
        /// The unresolved type name.
        module_type: String,
    },
    /// A non-optional input slot has no configured reference.
    MissingInput {
        /// Input slot name.
        name: String,
    },
    /// A required, non-global attribute is not set.
    MissingAttribute {
        /// Attribute name.
        name: String,
    },
    /// A required global attribute is set neither on the instance nor in
    /// the configuration's global parameters.
    MissingGlobalAttribute {
        /// Attribute name.
        name: String,
    },
    /// An input slot is configured with something other than references of
    /// the right shape.
    MalformedInput {
        /// Input slot name.
        name: String,
        /// Whether the slot expects a list of references.
        indexed: bool,
    },
    /// A parameter matches neither an input nor an attribute.
    UnexpectedParameter {
        /// Parameter name.
        name: String,
    },
}

impl fmt::Display for ParameterIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { module_type } => write!(f, "Unknown module type: {}", module_type),
            Self::MissingInput { name } => write!(f, "Input not found: {}", name),
            Self::MissingAttribute { name } => write!(f, "Attribute not found: {}", name),
            Self::MissingGlobalAttribute { name } => {
                write!(f, "Global attribute not found: {}", name)
            }
            Self::MalformedInput { name, indexed: true } => {
                write!(f, "Input {} expects a list of input tags", name)
            }
            Self::MalformedInput { name, indexed: false } => {
                write!(f, "Input {} expects a single input tag", name)
            }
            Self::UnexpectedParameter { name } => write!(f, "Unexpected parameter: {}", name),
        }
    }
}

/// Outcome of [`validate_parameters`] for one module instance.
#[derive(Debug, Clone, Default)]
pub struct ParameterReport {
    /// Instance name.
    pub module: String,
    /// Instance type.
    pub module_type: String,
    /// Findings that make the instance unusable.
    pub errors: Vec<ParameterIssue>,
    /// Findings that are reported but tolerated.
    pub warnings: Vec<ParameterIssue>,
}

impl ParameterReport {
    /// Whether no error was found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check a module instance's parameters against its catalog definition.
///
/// Required inputs and required non-global attributes must be set, and
/// configured inputs must hold references of the shape the slot expects.
/// Parameters the definition does not know are only warned about; names
/// starting with `@` are skipped. Findings are logged as well as returned.
///
/// Global attributes are not checked here since they may come from the
/// configuration; see [`validate_parameters_with_globals`].
pub fn validate_parameters(module: &ModuleDecl, catalog: &ModuleCatalog) -> ParameterReport {
    check_parameters(module, None, catalog)
}

/// Like [`validate_parameters`], and additionally requires every
/// non-optional global attribute to be set on the instance or in `globals`.
pub fn validate_parameters_with_globals(
    module: &ModuleDecl,
    globals: &ParameterSet,
    catalog: &ModuleCatalog,
) -> ParameterReport {
    check_parameters(module, Some(globals), catalog)
}

fn check_parameters(
    module: &ModuleDecl,
    globals: Option<&ParameterSet>,
    catalog: &ModuleCatalog,
) -> ParameterReport {
    let mut report = ParameterReport {
        module: module.name.clone(),
        module_type: module.module_type.clone(),
        ..Default::default()
    };

    let Some(definition) = catalog.get(&module.module_type) else {
        report.errors.push(ParameterIssue::UnknownType {
            module_type: module.module_type.clone(),
        });
        log_report(&report);
        return report;
    };

    for input in &definition.inputs {
        match module.parameters.get(&input.name) {
            None if input.optional => {}
            None => report.errors.push(ParameterIssue::MissingInput {
                name: input.name.clone(),
            }),
            Some(value) => {
                let well_formed = if input.indexed {
                    value.is_input_tag_list()
                } else {
                    value.is_input_tag()
                };
                if !well_formed {
                    report.errors.push(ParameterIssue::MalformedInput {
                        name: input.name.clone(),
                        indexed: input.indexed,
                    });
                }
            }
        }
    }

    for attribute in &definition.attributes {
        if attribute.optional || module.parameters.exists(&attribute.name) {
            continue;
        }
        if !attribute.global {
            report.errors.push(ParameterIssue::MissingAttribute {
                name: attribute.name.clone(),
            });
        } else if globals.is_some_and(|globals| !globals.exists(&attribute.name)) {
            report.errors.push(ParameterIssue::MissingGlobalAttribute {
                name: attribute.name.clone(),
            });
        }
    }

    for name in module.parameters.names() {
        if name.starts_with(INTERNAL_PARAMETER_PREFIX) {
            continue;
        }
        if !definition.has_input_or_attribute(name) {
            report.warnings.push(ParameterIssue::UnexpectedParameter {
                name: name.to_string(),
            });
        }
    }

    log_report(&report);
    report
}

fn log_report(report: &ParameterReport) {
    for warning in &report.warnings {
        tracing::warn!(
            module = %report.module,
            module_type = %report.module_type,
            "{}", warning
        );
    }
    for error in &report.errors {
        tracing::error!(
            module = %report.module,
            module_type = %report.module_type,
            "{}", error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AttributeSlot, InputSlot, ModuleDefinition};
    use crate::tag::InputTag;

    fn catalog() -> ModuleCatalog {
        ModuleCatalog::from_definitions([ModuleDefinition::new("BlockD")
            .with_input(InputSlot::required("s12"))
            .with_input(InputSlot::required("particles").many())
            .with_input(InputSlot::optional("branches").many())
            .with_output("solutions")
            .with_attribute(AttributeSlot::new("energy").global())
            .with_attribute(AttributeSlot::new("pT_is_met").optional())
            .with_attribute(AttributeSlot::new("mode"))])
        .unwrap()
    }

    fn complete() -> ModuleDecl {
        ModuleDecl::new("blockd", "BlockD")
            .with_parameter("s12", InputTag::new("flatter", "s"))
            .with_parameter(
                "particles",
                vec![InputTag::new("input", "p1"), InputTag::new("input", "p2")],
            )
            .with_parameter("mode", "fast")
    }

    #[test]
    fn complete_parameters_pass() {
        let report = validate_parameters(&complete(), &catalog());
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn missing_input_and_attribute() {
        let module = ModuleDecl::new("blockd", "BlockD")
            .with_parameter("particles", vec![InputTag::new("input", "p1")]);
        let report = validate_parameters(&module, &catalog());

        assert!(!report.is_valid());
        assert_eq!(
            report.errors,
            vec![
                ParameterIssue::MissingInput {
                    name: "s12".to_string()
                },
                ParameterIssue::MissingAttribute {
                    name: "mode".to_string()
                },
            ]
        );
        assert_eq!(report.errors[0].to_string(), "Input not found: s12");
        assert_eq!(report.errors[1].to_string(), "Attribute not found: mode");
    }

    #[test]
    fn unexpected_parameters_are_warnings() {
        let module = complete()
            .with_parameter("typo", 1.0)
            .with_parameter("@internal", true);
        let report = validate_parameters(&module, &catalog());

        assert!(report.is_valid());
        assert_eq!(
            report.warnings,
            vec![ParameterIssue::UnexpectedParameter {
                name: "typo".to_string()
            }]
        );
    }

    #[test]
    fn input_shape_is_checked() {
        let module = complete()
            .with_parameter("s12", vec![InputTag::new("flatter", "s")])
            .with_parameter("particles", InputTag::new("input", "p1"));
        let report = validate_parameters(&module, &catalog());

        assert_eq!(
            report.errors,
            vec![
                ParameterIssue::MalformedInput {
                    name: "s12".to_string(),
                    indexed: false
                },
                ParameterIssue::MalformedInput {
                    name: "particles".to_string(),
                    indexed: true
                },
            ]
        );
    }

    #[test]
    fn global_attributes_come_from_module_or_globals() {
        let catalog = catalog();
        let globals = ParameterSet::new().set("energy", 13000.0);

        let report = validate_parameters_with_globals(&complete(), &globals, &catalog);
        assert!(report.is_valid());

        let local = complete().with_parameter("energy", 8000.0);
        let report = validate_parameters_with_globals(&local, &ParameterSet::new(), &catalog);
        assert!(report.is_valid());

        let report = validate_parameters_with_globals(&complete(), &ParameterSet::new(), &catalog);
        assert_eq!(
            report.errors,
            vec![ParameterIssue::MissingGlobalAttribute {
                name: "energy".to_string()
            }]
        );
        assert_eq!(report.errors[0].to_string(), "Global attribute not found: energy");

        // Without a configuration the global attribute is not required
        assert!(validate_parameters(&complete(), &catalog).is_valid());
    }

    #[test]
    fn unknown_type() {
        let report = validate_parameters(&ModuleDecl::new("x", "Nope"), &catalog());
        assert_eq!(
            report.errors,
            vec![ParameterIssue::UnknownType {
                module_type: "Nope".to_string()
            }]
        );
    }
}
