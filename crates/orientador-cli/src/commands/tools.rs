//! Tools command implementation.

use crate::error::Result;
use crate::output::Formatter;
use orientador_tools::ToolRegistry;

/// Execute the tools command.
pub fn execute_tools(registry: &ToolRegistry, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_tools(registry.definitions())?);
    Ok(())
}
