//! Cross-module references (input tags).
//!
//! An input tag points one module's input at another module's named output,
//! written `producer::output`, or `producer::output/index` when the producer
//! emits several values under the same output name.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MODULE_SEPARATOR: &str = "::";
const INDEX_SEPARATOR: char = '/';

/// A reference to a named output of another module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InputTag {
    /// Name of the producing module instance.
    pub module: String,
    /// Name of the output on the producing module.
    pub parameter: String,
    /// Position within an output holding several values.
    pub index: Option<usize>,
}

impl InputTag {
    /// Create an unindexed tag.
    pub fn new(module: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            parameter: parameter.into(),
            index: None,
        }
    }

    /// Create a tag pointing at one element of an output.
    pub fn indexed(module: impl Into<String>, parameter: impl Into<String>, index: usize) -> Self {
        Self {
            module: module.into(),
            parameter: parameter.into(),
            index: Some(index),
        }
    }

    /// Parse the textual form of a tag.
    pub fn parse(input: &str) -> Result<Self> {
        let syntax_error = |cause: &str| CoreError::InputTagSyntax {
            tag: input.to_string(),
            cause: cause.to_string(),
        };

        let (module, rest) = input
            .split_once(MODULE_SEPARATOR)
            .ok_or_else(|| syntax_error("missing '::' between module and output"))?;

        let (parameter, index) = match rest.split_once(INDEX_SEPARATOR) {
            Some((parameter, index)) => {
                let index = index
                    .parse::<usize>()
                    .map_err(|_| syntax_error("index must be a non-negative integer"))?;
                (parameter, Some(index))
            }
            None => (rest, None),
        };

        if !is_valid_identifier(module) {
            return Err(syntax_error("invalid module name"));
        }
        if !is_valid_identifier(parameter) {
            return Err(syntax_error("invalid output name"));
        }

        Ok(Self {
            module: module.to_string(),
            parameter: parameter.to_string(),
            index,
        })
    }

    /// Check whether a string is a well-formed input tag.
    pub fn is_input_tag(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Whether the tag selects a single element of its output.
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Edge label for this reference: the output name, plus `[index]` if indexed.
    pub fn label(&self) -> String {
        match self.index {
            Some(index) => format!("{}[{}]", self.parameter, index),
            None => self.parameter.clone(),
        }
    }

    /// Check whether this tag names the given producer output, ignoring the index.
    pub fn points_to(&self, module: &str, output: &str) -> bool {
        self.module == module && self.parameter == output
    }
}

fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.module, MODULE_SEPARATOR, self.parameter)?;
        if let Some(index) = self.index {
            write!(f, "{}{}", INDEX_SEPARATOR, index)?;
        }
        Ok(())
    }
}

impl FromStr for InputTag {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for InputTag {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<InputTag> for String {
    fn from(tag: InputTag) -> Self {
        tag.to_string()
    }
}
