//! Configuration types for YAML deserialization.
//!
//! - [`ConfigurationDefinition`] - The top-level configuration document
//! - [`ModuleDecl`] - A declared module instance and its parameters
//! - [`ExecutionPath`] - A named group of modules
//!
//! # Example YAML
//!
//! ```yaml
//! name: looped_integration
//!
//! modules:
//!   - name: blockd
//!     type: BlockD
//!     parameters:
//!       s13: "flatter_s13::s"
//!   - name: looper
//!     type: Looper
//!     parameters:
//!       solutions: "blockd::solutions"
//!       path: loop_body
//!
//! paths:
//!   - id: loop_body
//!     modules: [boost, integrand]
//! ```

mod definition;
mod module;
mod path;
pub mod validation;

pub use definition::{ConfigLoadError, ConfigurationDefinition};
pub use module::{ModuleDecl, ParameterSet, ParameterValue};
pub use path::ExecutionPath;
pub use validation::{ValidationError, ValidationErrorKind, ValidationLimits, ValidationResult};
