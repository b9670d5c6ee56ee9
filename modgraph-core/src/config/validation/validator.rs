//! Configuration validation logic.

use std::collections::{HashMap, HashSet};

use super::ValidationResult;
use super::error::{ValidationError, ValidationErrorKind};
use super::limits::ValidationLimits;
use crate::config::{ConfigurationDefinition, ModuleDecl, ParameterValue};
use crate::tag::InputTag;
use crate::types::DEFAULT_EXECUTION_PATH;

/// Validator for configuration documents.
///
/// Checks structure only; parameter sets are checked against module
/// definitions by [`crate::catalog::validate_parameters`].
pub struct ConfigurationValidator {
    errors: Vec<ValidationError>,
    limits: ValidationLimits,
}

impl ConfigurationValidator {
    /// Create a new validator with default limits.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            limits: ValidationLimits::default(),
        }
    }

    /// Create a validator with custom limits.
    pub fn with_limits(limits: ValidationLimits) -> Self {
        Self {
            errors: Vec::new(),
            limits,
        }
    }

    /// Validate a configuration.
    pub fn validate(mut self, config: &ConfigurationDefinition) -> ValidationResult {
        self.validate_limits(config);
        self.validate_metadata(config);
        self.validate_modules(config);
        self.validate_paths(config);

        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }

    fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    fn validate_limits(&mut self, config: &ConfigurationDefinition) {
        if config.modules.len() > self.limits.max_module_count {
            self.add_error(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "modules",
                format!(
                    "module count ({}) exceeds maximum allowed ({})",
                    config.modules.len(),
                    self.limits.max_module_count
                ),
            ));
        }

        if config.paths.len() > self.limits.max_path_count {
            self.add_error(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "paths",
                format!(
                    "path count ({}) exceeds maximum allowed ({})",
                    config.paths.len(),
                    self.limits.max_path_count
                ),
            ));
        }
    }

    fn validate_metadata(&mut self, config: &ConfigurationDefinition) {
        if config.name.is_empty() {
            self.add_error(ValidationError::missing_field("configuration", "name"));
        }
    }

    fn validate_modules(&mut self, config: &ConfigurationDefinition) {
        let mut seen = HashSet::new();

        for (idx, module) in config.modules.iter().enumerate() {
            let location = format!("modules[{}]", idx);

            if module.name.is_empty() {
                self.add_error(ValidationError::missing_field(&location, "name"));
            } else if !seen.insert(module.name.as_str()) {
                self.add_error(ValidationError::duplicate_id(&location, &module.name));
            }

            if module.module_type.is_empty() {
                self.add_error(ValidationError::missing_field(&location, "type"));
            }

            self.validate_tags(module, &location);
        }
    }

    /// Strings containing `::` must parse as input tags.
    fn validate_tags(&mut self, module: &ModuleDecl, location: &str) {
        for (name, value) in module.parameters.iter() {
            let mut malformed = Vec::new();
            collect_malformed_tags(value, &mut malformed);
            for raw in malformed {
                let cause = InputTag::parse(raw)
                    .err()
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                self.add_error(ValidationError::new(
                    ValidationErrorKind::InvalidInputTag,
                    format!("{}.parameters.{}", location, name),
                    cause,
                ));
            }
        }
    }

    fn validate_paths(&mut self, config: &ConfigurationDefinition) {
        let declared: HashSet<&str> = config.modules.iter().map(|m| m.name.as_str()).collect();
        let mut seen_ids = HashSet::new();
        let mut owner: HashMap<&str, &str> = HashMap::new();

        for (idx, path) in config.paths.iter().enumerate() {
            let location = format!("paths[{}]", idx);
            let id = path.id.as_str();

            if id.is_empty() {
                self.add_error(ValidationError::missing_field(&location, "id"));
            } else if id == DEFAULT_EXECUTION_PATH {
                self.add_error(ValidationError::invalid_value(
                    &location,
                    format!("path id '{}' is reserved", DEFAULT_EXECUTION_PATH),
                ));
            } else if !seen_ids.insert(id) {
                self.add_error(ValidationError::duplicate_id(&location, id));
            }

            for member in &path.modules {
                if !declared.contains(member.as_str()) {
                    self.add_error(ValidationError::invalid_reference(&location, member));
                    continue;
                }

                match owner.get(member.as_str()) {
                    Some(&first) if first != id => {
                        self.add_error(ValidationError::new(
                            ValidationErrorKind::DuplicateMembership,
                            &location,
                            format!(
                                "module '{}' already belongs to path '{}'",
                                member, first
                            ),
                        ));
                    }
                    Some(_) => {}
                    None => {
                        owner.insert(member.as_str(), id);
                    }
                }
            }
        }
    }
}

impl Default for ConfigurationValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_malformed_tags<'v>(value: &'v ParameterValue, out: &mut Vec<&'v str>) {
    match value {
        ParameterValue::String(s) if s.contains("::") && !InputTag::is_input_tag(s) => {
            out.push(s.as_str());
        }
        ParameterValue::List(items) => {
            for item in items {
                collect_malformed_tags(item, out);
            }
        }
        _ => {}
    }
}
