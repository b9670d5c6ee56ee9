//! Configuration validation.
//!
//! - Structural validation (module count, path count, nesting depth)
//! - Semantic validation (unique names, path membership, input tag syntax)
//! - Size limits for untrusted documents

mod error;
mod limits;
mod validator;

pub use error::{ValidationError, ValidationErrorKind};
pub use limits::ValidationLimits;
pub use validator::ConfigurationValidator;

/// Result of configuration validation.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigurationDefinition, ExecutionPath, ModuleDecl};

    fn minimal_config() -> ConfigurationDefinition {
        ConfigurationDefinition::new("test")
            .with_module(ModuleDecl::new("x", "Producer"))
            .with_module(ModuleDecl::new("y", "Producer"))
            .with_module(ModuleDecl::new("z", "Consumer").with_parameter("a", "x::out"))
    }

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result.unwrap_err().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn validate_minimal_config() {
        assert!(ConfigurationValidator::new().validate(&minimal_config()).is_ok());
    }

    #[test]
    fn validate_missing_name() {
        let mut config = minimal_config();
        config.name = String::new();

        let errors = ConfigurationValidator::new().validate(&config).unwrap_err();
        assert!(errors.iter().any(|e| {
            e.kind == ValidationErrorKind::MissingField && e.location == "configuration"
        }));
    }

    #[test]
    fn validate_duplicate_module_names() {
        let config = minimal_config().with_module(ModuleDecl::new("x", "Producer"));
        let errors = ConfigurationValidator::new().validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].location, "modules[3]");
    }

    #[test]
    fn validate_missing_type() {
        let config = minimal_config().with_module(ModuleDecl::new("w", ""));
        assert_eq!(
            kinds(ConfigurationValidator::new().validate(&config)),
            vec![ValidationErrorKind::MissingField]
        );
    }

    #[test]
    fn validate_malformed_tag() {
        let config = minimal_config().with_module(
            ModuleDecl::new("w", "Consumer").with_parameter("a", "x::out/first"),
        );
        let errors = ConfigurationValidator::new().validate(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidInputTag);
        assert_eq!(errors[0].location, "modules[3].parameters.a");
    }

    #[test]
    fn validate_path_members() {
        let config = minimal_config()
            .with_path(ExecutionPath::new("p1", ["x", "ghost"]))
            .with_path(ExecutionPath::new("p2", ["x"]));

        assert_eq!(
            kinds(ConfigurationValidator::new().validate(&config)),
            vec![
                ValidationErrorKind::InvalidReference,
                ValidationErrorKind::DuplicateMembership
            ]
        );
    }

    #[test]
    fn validate_path_ids() {
        let config = minimal_config()
            .with_path(ExecutionPath::new("default", ["x"]))
            .with_path(ExecutionPath::new("p", ["y"]))
            .with_path(ExecutionPath::new("p", ["z"]));

        assert_eq!(
            kinds(ConfigurationValidator::new().validate(&config)),
            vec![ValidationErrorKind::InvalidValue, ValidationErrorKind::DuplicateId]
        );
    }

    #[test]
    fn validate_module_limit() {
        let limits = ValidationLimits::new().with_max_module_count(2);
        assert_eq!(
            kinds(ConfigurationValidator::with_limits(limits).validate(&minimal_config())),
            vec![ValidationErrorKind::LimitExceeded]
        );
    }
}
