//! modgraph Core Library
//!
//! Data model shared by the planner and the command-line front-end.
//!
//! # Key Components
//!
//! - **Catalog**: Module definitions (input, output and attribute slots) keyed by type name
//! - **Config**: Declared module instances, their parameters and execution paths
//! - **Tags**: Cross-module references of the form `producer::output[/index]`
//! - **Types**: Strongly-typed identifiers
//!
//! # Example
//!
//! ```ignore
//! use modgraph_core::prelude::*;
//!
//! let catalog = ModuleCatalog::from_file(Path::new("catalog.yaml"))?;
//! let config = ConfigurationDefinition::from_file(Path::new("config.yaml"))?;
//!
//! for module in &config.modules {
//!     let report = validate_parameters(module, &catalog);
//!     assert!(report.is_valid());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod prelude;
pub mod tag;
pub mod types;

// Re-export key types at crate root for convenience
pub use catalog::{ModuleCatalog, ModuleDefinition};
pub use config::{ConfigurationDefinition, ExecutionPath, ModuleDecl, ParameterSet, ParameterValue};
pub use error::{CoreError, Result};
pub use tag::InputTag;
pub use types::{DEFAULT_EXECUTION_PATH, PathId, VertexId};
