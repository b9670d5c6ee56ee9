//! Module declarations and their parameter sets.

use crate::tag::InputTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configured parameter value.
///
/// Strings that parse as an [`InputTag`] (`module::output[/index]`) are
/// cross-module references; every other value is a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Float(f64),
    /// String literal or input tag.
    String(String),
    /// Sequence of values (e.g. several input tags for an indexed input).
    List(Vec<ParameterValue>),
    /// Nested table.
    Table(BTreeMap<String, ParameterValue>),
}

impl ParameterValue {
    /// Interpret the value as a single input tag.
    pub fn as_input_tag(&self) -> Option<InputTag> {
        match self {
            Self::String(s) => InputTag::parse(s).ok(),
            _ => None,
        }
    }

    /// Every input tag held by this value, in order.
    ///
    /// A string yields at most one tag, a list yields the tags of its
    /// elements; literals yield nothing.
    pub fn input_tags(&self) -> Vec<InputTag> {
        match self {
            Self::String(_) => self.as_input_tag().into_iter().collect(),
            Self::List(items) => items.iter().flat_map(Self::input_tags).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the value is a single input tag.
    pub fn is_input_tag(&self) -> bool {
        self.as_input_tag().is_some()
    }

    /// Whether the value is a list made only of input tags.
    pub fn is_input_tag_list(&self) -> bool {
        match self {
            Self::List(items) => items.iter().all(Self::is_input_tag),
            _ => false,
        }
    }

    /// Get the value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for ParameterValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<InputTag> for ParameterValue {
    fn from(tag: InputTag) -> Self {
        Self::String(tag.to_string())
    }
}

impl From<Vec<InputTag>> for ParameterValue {
    fn from(tags: Vec<InputTag>) -> Self {
        Self::List(tags.into_iter().map(Self::from).collect())
    }
}

/// Parameters of one module instance, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParameterValue>);

impl ParameterSet {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, builder style.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a parameter.
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.0.get(name)
    }

    /// Check if a parameter is set.
    pub fn exists(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Parameter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A module instance declared in a configuration.
///
/// # Example
///
/// ```yaml
/// name: flatter_s13
/// type: BreitWignerGenerator
/// parameters:
///   ps_point: "cuba::ps_points/0"
///   mass: 80.419002
///   width: 2.047600
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDecl {
    /// Instance name, unique within a configuration.
    pub name: String,

    /// Module type, resolved against the catalog.
    #[serde(rename = "type")]
    pub module_type: String,

    /// Configured parameters.
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl ModuleDecl {
    /// Declare a module instance with no parameters.
    pub fn new(name: impl Into<String>, module_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module_type: module_type.into(),
            parameters: ParameterSet::new(),
        }
    }

    /// Set one parameter.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Replace the whole parameter set.
    pub fn with_parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }
}
