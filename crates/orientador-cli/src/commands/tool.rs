//! Tool command implementation.

use crate::cli::ToolArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use orientador_tools::ToolRegistry;
use serde_json::{Map, Value};

/// Execute the tool command.
pub fn execute_tool(args: ToolArgs, registry: &ToolRegistry, formatter: &Formatter) -> Result<()> {
    let arguments = parse_params(&args.params)?;
    let output = registry.invoke(&args.name, arguments)?;
    println!("{}", formatter.format_tool_output(&args.name, &output)?);
    Ok(())
}

/// Turn `clave=valor` pairs into a JSON object of string arguments.
///
/// Only the first `=` splits, so values may contain `=`.
pub fn parse_params(params: &[String]) -> Result<Value> {
    let mut arguments = Map::new();
    for param in params {
        let (key, value) = param.split_once('=').ok_or_else(|| {
            CliError::InvalidInput(format!("Expected clave=valor, got: {}", param))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::InvalidInput(format!("Missing parameter name in: {}", param)));
        }
        arguments.insert(key.to_string(), Value::String(value.to_string()));
    }
    Ok(Value::Object(arguments))
}
