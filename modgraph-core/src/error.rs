//! Error types for modgraph core.
//!
//! Each variant carries a stable code so that diagnostics printed by the CLI
//! can be grepped and documented independently of the message text.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for catalog and configuration handling.
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Input Tag Errors (E100-E199)
    // =========================================================================
    /// A cross-module reference string could not be parsed.
    #[error("E101: Invalid input tag '{tag}': {cause}")]
    InputTagSyntax {
        /// The offending reference string.
        tag: String,
        /// Why it was rejected.
        cause: String,
    },

    // =========================================================================
    // Catalog Errors (E200-E299)
    // =========================================================================
    /// Two catalog entries share the same module type name.
    #[error("E201: Module definition '{name}' is declared more than once")]
    DuplicateDefinition {
        /// The duplicated type name.
        name: String,
    },

    /// A module definition has an empty type name.
    #[error("E202: Module definition at position {position} has an empty name")]
    UnnamedDefinition {
        /// Zero-based position in the catalog document.
        position: usize,
    },

    // =========================================================================
    // Configuration Errors (E800-E899)
    // =========================================================================
    /// YAML parsing failed.
    #[error("E801: Failed to parse YAML at {path}: {cause}")]
    YamlParse {
        /// The path of the YAML file.
        path: PathBuf,
        /// Parse error details.
        cause: String,
    },

    // =========================================================================
    // I/O Errors (E900-E999)
    // =========================================================================
    /// General I/O error.
    #[error("E901: I/O error at {path}: {cause}")]
    Io {
        /// The path involved in the I/O operation.
        path: PathBuf,
        /// Reason for the I/O failure.
        cause: String,
    },
}

impl CoreError {
    /// Get the error code (e.g., "E101").
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InputTagSyntax { .. } => "E101",
            Self::DuplicateDefinition { .. } => "E201",
            Self::UnnamedDefinition { .. } => "E202",
            Self::YamlParse { .. } => "E801",
            Self::Io { .. } => "E901",
        }
    }

    /// Check if this error was caused by user-supplied configuration.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;
