//! Tool registry and dispatch

use orientador_catalog::Catalog;
use orientador_domain::{ToolCall, ToolSpec};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::ToolError;
use crate::tools::{self, detail, listing, lookup, search};

/// The set of tools bound to one catalog
///
/// Owns the [`Catalog`] context object; every invocation reads from it and the
/// document is loaded on the first call that needs it.
#[derive(Debug)]
pub struct ToolRegistry {
    catalog: Catalog,
    specs: Vec<ToolSpec>,
}

impl ToolRegistry {
    /// Create a registry over the given catalog
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            specs: tools::all_specs(),
        }
    }

    /// Declarations of every tool
    pub fn definitions(&self) -> &[ToolSpec] {
        &self.specs
    }

    /// Declaration of a single tool
    pub fn definition(&self, name: &str) -> Option<&ToolSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access, used to invalidate the cached document
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Run a tool call requested by the model
    pub fn invoke_call(&self, call: &ToolCall) -> Result<String, ToolError> {
        self.invoke(&call.name, json!(call.arguments))
    }

    /// Run a tool by name with JSON arguments
    ///
    /// # Errors
    ///
    /// Returns error if the tool does not exist or the arguments do not match
    /// its parameters. Lookup misses are answered with text, not errors.
    pub fn invoke(&self, name: &str, arguments: Value) -> Result<String, ToolError> {
        debug!("Invoking tool {} with {}", name, arguments);
        let catalog = &self.catalog;

        let answer = match name {
            lookup::UNIVERSITY_CAREERS => {
                lookup::handle_university_careers(catalog, parse(name, arguments)?)
            }
            lookup::CAREER_UNIVERSITIES => {
                lookup::handle_career_universities(catalog, parse(name, arguments)?)
            }
            listing::LIST_UNIVERSITIES => listing::handle_list_universities(catalog),
            listing::LIST_CAREERS => listing::handle_list_careers(catalog),
            search::SEARCH_UNIVERSITIES => {
                search::handle_search_universities(catalog, parse(name, arguments)?)
            }
            search::SEARCH_CAREERS => search::handle_search_careers(catalog, parse(name, arguments)?),
            detail::UNIVERSITY_DETAIL => {
                detail::handle_university_detail(catalog, parse(name, arguments)?)
            }
            detail::CAREER_DETAIL => detail::handle_career_detail(catalog, parse(name, arguments)?),
            detail::COMPARE_UNIVERSITIES => {
                detail::handle_compare_universities(catalog, parse(name, arguments)?)
            }
            detail::COMPARE_CAREERS => {
                detail::handle_compare_careers(catalog, parse(name, arguments)?)
            }
            listing::CAREERS_NEAR_UNIVERSITY => {
                listing::handle_careers_near_university(catalog, parse(name, arguments)?)
            }
            listing::UNIVERSITIES_WITH_CAREER => {
                listing::handle_universities_with_career(catalog, parse(name, arguments)?)
            }
            _ => return Err(ToolError::UnknownTool(name.to_string())),
        };

        Ok(answer)
    }
}

fn parse<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T, ToolError> {
    let arguments = match arguments {
        Value::Null => json!({}),
        other => other,
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

/// JSON Schema describing a tool's parameters
pub fn input_schema(spec: &ToolSpec) -> Value {
    let properties: Map<String, Value> = spec
        .params
        .iter()
        .map(|p| {
            (
                p.name.to_string(),
                json!({"type": "string", "description": p.description}),
            )
        })
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": spec.param_names().collect::<Vec<_>>(),
    })
}
