//! Error types for tool dispatch

use thiserror::Error;

/// Errors raised before a tool can run
///
/// Lookup misses are not errors: tools answer them with a "not found" text.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool with this name
    #[error("Tool not found: {0}")]
    UnknownTool(String),

    /// Arguments missing or of the wrong shape
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments {
        /// Tool being called
        tool: String,
        /// What was wrong
        reason: String,
    },
}
