//! Error types for MCP server operations.

use orientador_tools::ToolError;
use thiserror::Error;

/// MCP server error types
#[derive(Error, Debug)]
pub enum McpError {
    /// Malformed JSON-RPC request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Unknown JSON-RPC method
    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Missing or malformed tool parameters
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to JSON-RPC error code
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::MethodNotFound(_) | McpError::ToolNotFound(_) => -32601,
            McpError::InvalidParams(_) => -32602,
            McpError::Json(_) => -32700,
            McpError::Io(_) => -32000,
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::UnknownTool(name) => McpError::ToolNotFound(name),
            other @ ToolError::InvalidArguments { .. } => McpError::InvalidParams(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(McpError::InvalidRequest("x".into()).error_code(), -32600);
        assert_eq!(McpError::MethodNotFound("x".into()).error_code(), -32601);
        assert_eq!(McpError::InvalidParams("x".into()).error_code(), -32602);
    }

    #[test]
    fn test_from_tool_error() {
        let err: McpError = ToolError::UnknownTool("volar".into()).into();
        assert!(matches!(err, McpError::ToolNotFound(ref name) if name == "volar"));

        let err: McpError = ToolError::InvalidArguments {
            tool: "buscarPorCarrera".into(),
            reason: "missing field `carrera`".into(),
        }
        .into();
        assert_eq!(err.error_code(), -32602);
        assert!(err.to_string().contains("carrera"));
    }
}
