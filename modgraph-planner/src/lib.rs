//! modgraph Planner
//!
//! Turns a list of declared module instances into an ordered execution
//! plan that respects their data dependencies.
//!
//! # Pipeline
//!
//! 1. [`graph::GraphBuilder`] adds one vertex per module and one edge per
//!    cross-module reference
//! 2. [`prune::prune_unused`] drops modules whose outputs nobody reads
//! 3. [`looper::extend_loop_ordering`] orders outside inputs of a loop
//!    body before the loop-control module
//! 4. [`sort::topological_sort`] orders the graph and reports cycles
//! 5. [`paths::assign_execution_paths`] groups the result by execution path
//!
//! [`Planner`] runs all of them.
//!
//! # Example
//!
//! ```ignore
//! use modgraph_core::{ConfigurationDefinition, ModuleCatalog};
//! use modgraph_planner::Planner;
//!
//! let catalog = ModuleCatalog::from_file(Path::new("catalog.yaml"))?;
//! let config = ConfigurationDefinition::from_file(Path::new("config.yaml"))?;
//!
//! let plan = Planner::new(&catalog).plan_configuration(&config)?;
//! println!("{}", plan.to_json()?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod graph;
pub mod looper;
pub mod observability;
pub mod paths;
pub mod plan;
pub mod planner;
pub mod prune;
pub mod resolver;
pub mod sort;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use graph::{ModuleGraph, to_dot};
pub use plan::{ExecutionPlan, PathGroup};
pub use planner::Planner;
