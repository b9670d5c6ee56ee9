//! Module definitions: the type-level contract of a module.

use serde::{Deserialize, Serialize};

/// An input slot of a module type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSlot {
    /// Parameter name under which the reference is configured.
    pub name: String,
    /// Whether the slot may be left unconfigured.
    #[serde(default)]
    pub optional: bool,
    /// Whether the slot takes a list of references instead of a single one.
    #[serde(default, alias = "many")]
    pub indexed: bool,
}

impl InputSlot {
    /// A required single-reference input.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            optional: false,
            indexed: false,
        }
    }

    /// An optional single-reference input.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            optional: true,
            ..Self::required(name)
        }
    }

    /// Turn this slot into a list-of-references slot.
    pub fn many(mut self) -> Self {
        self.indexed = true;
        self
    }
}

/// An output slot of a module type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSlot {
    /// Output name, referenced by consumers as `module::name`.
    pub name: String,
}

impl OutputSlot {
    /// Create an output slot.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An attribute (literal parameter) slot of a module type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSlot {
    /// Parameter name.
    pub name: String,
    /// Whether the value may come from the global parameter set instead.
    #[serde(default)]
    pub global: bool,
    /// Whether the attribute may be omitted.
    #[serde(default)]
    pub optional: bool,
}

impl AttributeSlot {
    /// A required attribute.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            global: false,
            optional: false,
        }
    }

    /// Mark as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Mark as resolvable from global parameters.
    pub fn global(mut self) -> Self {
        self.global = true;
        self
    }
}

/// The definition of a module type, as published by the module registry.
///
/// # Example
///
/// ```yaml
/// name: BreitWignerGenerator
/// inputs:
///   - name: ps_point
/// outputs:
///   - name: s
///   - name: jacobian
/// attributes:
///   - name: mass
///   - name: width
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDefinition {
    /// Type name. Module instances refer to it as their `type`.
    pub name: String,

    /// Input slots, in declaration order.
    #[serde(default)]
    pub inputs: Vec<InputSlot>,

    /// Output slots, in declaration order.
    #[serde(default)]
    pub outputs: Vec<OutputSlot>,

    /// Attribute slots.
    #[serde(default)]
    pub attributes: Vec<AttributeSlot>,

    /// Synthetic bookkeeping module never handed to the runtime.
    #[serde(default)]
    pub internal: bool,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ModuleDefinition {
    /// Create an empty definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            attributes: Vec::new(),
            internal: false,
            description: None,
        }
    }

    /// Add an input slot.
    pub fn with_input(mut self, input: InputSlot) -> Self {
        self.inputs.push(input);
        self
    }

    /// Add an output slot.
    pub fn with_output(mut self, name: impl Into<String>) -> Self {
        self.outputs.push(OutputSlot::new(name));
        self
    }

    /// Add an attribute slot.
    pub fn with_attribute(mut self, attribute: AttributeSlot) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set description.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Mark as internal.
    pub fn internal(mut self) -> Self {
        self.internal = true;
        self
    }

    /// Get an input slot by name.
    pub fn get_input(&self, name: &str) -> Option<&InputSlot> {
        self.inputs.iter().find(|i| i.name == name)
    }

    /// Get an output slot by name.
    pub fn get_output(&self, name: &str) -> Option<&OutputSlot> {
        self.outputs.iter().find(|o| o.name == name)
    }

    /// Get an attribute slot by name.
    pub fn get_attribute(&self, name: &str) -> Option<&AttributeSlot> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Whether `name` is declared as an input or an attribute.
    pub fn has_input_or_attribute(&self, name: &str) -> bool {
        self.get_input(name).is_some() || self.get_attribute(name).is_some()
    }

    /// Whether the module declares at least one output. Modules without
    /// outputs run only for their side effects and are never pruned.
    pub fn has_outputs(&self) -> bool {
        !self.outputs.is_empty()
    }
}
