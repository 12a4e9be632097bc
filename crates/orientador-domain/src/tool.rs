//! Tool descriptions and invocations

use std::collections::BTreeMap;

/// A required string parameter of a tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParam {
    /// Parameter name as the model must send it
    pub name: &'static str,

    /// Human readable description shown to the model
    pub description: &'static str,
}

impl ToolParam {
    /// Create a new parameter description
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Declaration of a tool the model may call
///
/// Every parameter is a required string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSpec {
    /// Tool name (unique within a registry)
    pub name: &'static str,

    /// What the tool does, written for the model
    pub description: &'static str,

    /// Required parameters, in declaration order
    pub params: Vec<ToolParam>,
}

impl ToolSpec {
    /// Names of the parameters, in declaration order
    pub fn param_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|p| p.name)
    }
}

/// A tool invocation requested by the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCall {
    /// Name of the tool to run
    pub name: String,

    /// Arguments by parameter name
    pub arguments: BTreeMap<String, String>,
}

impl ToolCall {
    /// Create a call without arguments
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: BTreeMap::new(),
        }
    }

    /// Add an argument
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }
}
