//! MCP protocol types (JSON-RPC 2.0)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP revision this server speaks
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC request or notification
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,
    /// Request ID, absent for notifications
    #[serde(default)]
    pub id: Option<Value>,
    /// Method name
    pub method: String,
    /// Method parameters
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    /// Notifications expect no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// JSON-RPC response (success)
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: &'static str,
    /// Request ID
    pub id: Option<Value>,
    /// Result data
    pub result: Value,
}

/// JSON-RPC error response
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: &'static str,
    /// Request ID
    pub id: Option<Value>,
    /// Error details
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Error code
    pub code: i32,
    /// Error message
    pub message: String,
}

/// Either kind of response, serialized without a tag
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JsonRpcMessage {
    /// Successful call
    Success(JsonRpcResponse),
    /// Failed call
    Failure(JsonRpcError),
}

impl JsonRpcMessage {
    /// Create a success response
    pub fn success(id: Option<Value>, result: Value) -> Self {
        JsonRpcMessage::Success(JsonRpcResponse {
            jsonrpc: "2.0",
            id,
            result,
        })
    }

    /// Create an error response
    pub fn failure(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        JsonRpcMessage::Failure(JsonRpcError {
            jsonrpc: "2.0",
            id,
            error: ErrorDetail {
                code,
                message: message.into(),
            },
        })
    }

    /// Whether this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, JsonRpcMessage::Failure(_))
    }
}

/// MCP tool list response
#[derive(Debug, Serialize)]
pub struct ToolListResponse {
    /// Available tools
    pub tools: Vec<ToolDefinition>,
}

/// Tool definition
#[derive(Debug, Serialize)]
pub struct ToolDefinition {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Result of `tools/call`
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    /// Output blocks
    pub content: Vec<TextContent>,
    /// Set when the tool ran but could not answer
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// A single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text",
                text: text.into(),
            }],
            is_error: false,
        }
    }
}

/// Plain text content block
#[derive(Debug, Serialize)]
pub struct TextContent {
    /// Always "text"
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// The text
    pub text: String,
}

/// MCP server info
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// Initialize response
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    /// Protocol version
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server info
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Capabilities
    pub capabilities: Capabilities,
}

/// Server capabilities
#[derive(Debug, Serialize)]
pub struct Capabilities {
    /// Tools capability
    pub tools: ToolsCapability,
}

/// Tools capability
#[derive(Debug, Serialize)]
pub struct ToolsCapability {
    /// The tool list never changes while running
    #[serde(rename = "listChanged")]
    pub list_changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_id_is_notification() {
        let request: JsonRpcRequest =
            serde_json::from_value(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
                .unwrap();
        assert!(request.is_notification());
        assert_eq!(request.params, Value::Null);
    }

    #[test]
    fn test_messages_serialize_untagged() {
        let ok = serde_json::to_value(JsonRpcMessage::success(Some(json!(1)), json!({}))).unwrap();
        assert_eq!(ok, json!({"jsonrpc": "2.0", "id": 1, "result": {}}));

        let err = serde_json::to_value(JsonRpcMessage::failure(None, -32700, "Parse error")).unwrap();
        assert_eq!(
            err,
            json!({"jsonrpc": "2.0", "id": null, "error": {"code": -32700, "message": "Parse error"}})
        );
    }

    #[test]
    fn test_tool_result_shape() {
        let value = serde_json::to_value(ToolCallResult::text("Carreras:\n- Medicina")).unwrap();
        assert_eq!(
            value,
            json!({"content": [{"type": "text", "text": "Carreras:\n- Medicina"}], "isError": false})
        );
    }
}
