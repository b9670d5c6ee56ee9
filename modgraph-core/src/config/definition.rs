//! Configuration definition - the top-level YAML document.

use super::validation::{
    ConfigurationValidator, ValidationError, ValidationErrorKind, ValidationLimits,
    ValidationResult,
};
use super::{ExecutionPath, ModuleDecl, ParameterSet};
use crate::catalog::{ModuleCatalog, ParameterReport, validate_parameters_with_globals};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A complete configuration: the module instances to plan and the
/// execution paths grouping them.
///
/// # Example
///
/// ```yaml
/// name: tt_fullyleptonic
/// global_parameters:
///   energy: 13000.0
///
/// modules:
///   - name: cuba
///     type: Cuba
///   - name: flatter_s13
///     type: BreitWignerGenerator
///     parameters:
///       ps_point: "cuba::ps_points/0"
///       mass: 80.419002
///       width: 2.047600
///   - name: integrand
///     type: IntegrandSum
///     parameters:
///       inputs: ["flatter_s13::jacobian"]
///
/// paths:
///   - id: loop_body
///     modules: [flatter_s13]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDefinition {
    /// Configuration name (required).
    pub name: String,

    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Parameters shared by every module (satisfy `global` attributes).
    #[serde(default)]
    pub global_parameters: ParameterSet,

    /// Declared module instances, in declaration order.
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,

    /// Declared execution paths, in declaration order.
    #[serde(default)]
    pub paths: Vec<ExecutionPath>,
}

impl ConfigurationDefinition {
    /// Create an empty configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            global_parameters: ParameterSet::new(),
            modules: Vec::new(),
            paths: Vec::new(),
        }
    }

    /// Parse a configuration from a YAML string.
    ///
    /// Does not check size or depth limits; use
    /// [`from_yaml_with_limits`](Self::from_yaml_with_limits) for untrusted input.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse a configuration, enforcing size and depth limits.
    pub fn from_yaml_with_limits(
        yaml: &str,
        limits: &ValidationLimits,
    ) -> Result<Self, ConfigLoadError> {
        limits
            .validate_content_size(yaml)
            .map_err(|error| ConfigLoadError::LimitExceeded { error })?;

        let value: serde_yaml::Value =
            serde_yaml::from_str(yaml).map_err(|source| ConfigLoadError::ParseString { source })?;

        limits
            .validate_nesting_depth(&value)
            .map_err(|error| ConfigLoadError::LimitExceeded { error })?;

        serde_yaml::from_value(value).map_err(|source| ConfigLoadError::ParseString { source })
    }

    /// Load a configuration file with default limits.
    pub fn from_file(path: &Path) -> Result<Self, ConfigLoadError> {
        Self::from_file_with_limits(path, &ValidationLimits::default())
    }

    /// Load a configuration file with custom limits.
    pub fn from_file_with_limits(
        path: &Path,
        limits: &ValidationLimits,
    ) -> Result<Self, ConfigLoadError> {
        let metadata = std::fs::metadata(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() > limits.max_file_size as u64 {
            return Err(ConfigLoadError::LimitExceeded {
                error: ValidationError::new(
                    ValidationErrorKind::LimitExceeded,
                    "configuration",
                    format!(
                        "file size ({} bytes) exceeds maximum allowed ({} bytes)",
                        metadata.len(),
                        limits.max_file_size
                    ),
                ),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_with_limits(&content, limits).map_err(|e| match e {
            ConfigLoadError::ParseString { source } => ConfigLoadError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate in one step with default limits.
    pub fn from_yaml_validated(yaml: &str) -> Result<Self, ConfigLoadError> {
        Self::from_yaml_validated_with_limits(yaml, &ValidationLimits::default())
    }

    /// Parse and validate in one step with custom limits.
    pub fn from_yaml_validated_with_limits(
        yaml: &str,
        limits: &ValidationLimits,
    ) -> Result<Self, ConfigLoadError> {
        let config = Self::from_yaml_with_limits(yaml, limits)?;

        ConfigurationValidator::with_limits(limits.clone())
            .validate(&config)
            .map_err(|errors| ConfigLoadError::Validation { errors })?;

        Ok(config)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Validate the configuration structure.
    pub fn validate(&self) -> ValidationResult {
        ConfigurationValidator::new().validate(self)
    }

    /// Check every module's parameters against the catalog, in declaration
    /// order. Global attributes may be satisfied by `global_parameters`.
    pub fn validate_parameters(&self, catalog: &ModuleCatalog) -> Vec<ParameterReport> {
        self.modules
            .iter()
            .map(|module| {
                validate_parameters_with_globals(module, &self.global_parameters, catalog)
            })
            .collect()
    }

    /// Set description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set global parameters.
    pub fn with_global_parameters(mut self, parameters: ParameterSet) -> Self {
        self.global_parameters = parameters;
        self
    }

    /// Declare a module.
    pub fn with_module(mut self, module: ModuleDecl) -> Self {
        self.modules.push(module);
        self
    }

    /// Declare an execution path.
    pub fn with_path(mut self, path: ExecutionPath) -> Self {
        self.paths.push(path);
        self
    }

    /// Get a module by instance name.
    pub fn get_module(&self, name: &str) -> Option<&ModuleDecl> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Check if a module with the given name is declared.
    pub fn has_module(&self, name: &str) -> bool {
        self.get_module(name).is_some()
    }
}

/// Error loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// I/O error reading file.
    #[error("failed to read configuration file '{}': {source}", path.display())]
    Io {
        /// Path to the file that couldn't be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// YAML parse error from file.
    #[error("failed to parse configuration file '{}': {source}", path.display())]
    Parse {
        /// Path to the file that couldn't be parsed.
        path: PathBuf,
        /// The underlying YAML parse error.
        source: serde_yaml::Error,
    },

    /// YAML parse error from string input.
    #[error("failed to parse YAML: {source}")]
    ParseString {
        /// The underlying YAML parse error.
        source: serde_yaml::Error,
    },

    /// Validation failed with one or more errors.
    #[error("configuration validation failed with {} error(s):{}", errors.len(), format_errors(errors))]
    Validation {
        /// List of validation errors.
        errors: Vec<ValidationError>,
    },

    /// A size, depth or count limit was exceeded.
    #[error("configuration limit exceeded: {error}")]
    LimitExceeded {
        /// The specific limit that was exceeded.
        error: ValidationError,
    },
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| format!("\n  - {}", e)).collect()
}
