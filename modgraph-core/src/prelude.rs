//! Prelude for convenient imports.
//!
//! ```ignore
//! use modgraph_core::prelude::*;
//! ```

// Core types
pub use crate::types::{DEFAULT_EXECUTION_PATH, PathId, VertexId};

// Error handling
pub use crate::error::{CoreError, Result};

// Catalog
pub use crate::catalog::{
    AttributeSlot, InputSlot, ModuleCatalog, ModuleDefinition, OutputSlot, ParameterIssue,
    ParameterReport, validate_parameters, validate_parameters_with_globals,
};

// Configuration
pub use crate::config::{
    ConfigLoadError, ConfigurationDefinition, ExecutionPath, ModuleDecl, ParameterSet,
    ParameterValue, ValidationError, ValidationErrorKind, ValidationLimits, ValidationResult,
};

// References
pub use crate::tag::InputTag;
