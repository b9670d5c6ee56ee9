//! Module catalog: the registry of module definitions, keyed by type name.
//!
//! The catalog is immutable once loaded. Planning only ever reads from it.
//!
//! # Example YAML
//!
//! ```yaml
//! - name: cuba
//!   internal: true
//!   outputs:
//!     - name: ps_points
//!
//! - name: BreitWignerGenerator
//!   inputs:
//!     - name: ps_point
//!   outputs:
//!     - name: s
//!     - name: jacobian
//!   attributes:
//!     - name: mass
//!     - name: width
//! ```

mod definition;
mod params;

pub use definition::{AttributeSlot, InputSlot, ModuleDefinition, OutputSlot};
pub use params::{
    ParameterIssue, ParameterReport, validate_parameters, validate_parameters_with_globals,
};

use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Registry of module definitions.
#[derive(Debug, Clone, Default)]
pub struct ModuleCatalog {
    /// Definitions in registration order.
    definitions: Vec<Arc<ModuleDefinition>>,
    /// Index into `definitions` by type name.
    by_name: HashMap<String, usize>,
}

impl ModuleCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of definitions.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ModuleDefinition>,
    ) -> Result<Self> {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from a YAML sequence of definitions.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Self::parse(yaml, Path::new("<inline>"))
    }

    /// Load a catalog from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::Io {
            path: path.to_path_buf(),
            cause: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    fn parse(yaml: &str, origin: &Path) -> Result<Self> {
        let definitions: Vec<ModuleDefinition> =
            serde_yaml::from_str(yaml).map_err(|e| CoreError::YamlParse {
                path: PathBuf::from(origin),
                cause: e.to_string(),
            })?;

        for (position, definition) in definitions.iter().enumerate() {
            if definition.name.is_empty() {
                return Err(CoreError::UnnamedDefinition { position });
            }
        }

        let catalog = Self::from_definitions(definitions)?;
        tracing::debug!(
            origin = %origin.display(),
            definitions = catalog.len(),
            "Loaded module catalog"
        );
        Ok(catalog)
    }

    /// Register a definition. Type names must be unique.
    pub fn register(&mut self, definition: ModuleDefinition) -> Result<()> {
        if self.by_name.contains_key(&definition.name) {
            return Err(CoreError::DuplicateDefinition {
                name: definition.name,
            });
        }
        self.by_name
            .insert(definition.name.clone(), self.definitions.len());
        self.definitions.push(Arc::new(definition));
        Ok(())
    }

    /// Register a definition, builder style.
    pub fn with_definition(mut self, definition: ModuleDefinition) -> Result<Self> {
        self.register(definition)?;
        Ok(self)
    }

    /// Look up a definition by type name.
    pub fn get(&self, name: &str) -> Option<&Arc<ModuleDefinition>> {
        self.by_name.get(name).map(|&idx| &self.definitions[idx])
    }

    /// Check if a type name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Iterate over definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ModuleDefinition> {
        self.definitions.iter().map(|d| d.as_ref())
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
