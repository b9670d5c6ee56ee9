//! Logging setup for modgraph binaries.
//!
//! Library code only emits `tracing` events; binaries pick the subscriber.
//!
//! # Configuration
//!
//! Logging format is controlled via `MODGRAPH_LOG_FORMAT` env var:
//! - `json` - Structured JSON output
//! - `pretty` - Human-readable multi-line output (default for TTY)
//! - `compact` - Compact single-line format (default for non-TTY)
//!
//! The filter comes from `MODGRAPH_LOG_LEVEL`, then `RUST_LOG`.
//! `MODGRAPH_LOG_LOCATION=true` adds file and line to each event.
//!
//! # Example
//!
//! ```ignore
//! use modgraph_planner::observability::{TracingConfig, init_tracing};
//!
//! init_tracing(TracingConfig::from_env())?;
//!
//! // Or with explicit settings
//! let config = TracingConfig::builder()
//!     .json_format(true)
//!     .log_filter("debug")
//!     .build();
//! init_tracing(config)?;
//! ```

mod config;
mod tracing_setup;

pub use config::{LogFormat, TracingConfig, TracingConfigBuilder};
pub use tracing_setup::init_tracing;
