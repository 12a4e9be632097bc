//! MCP server implementation

use orientador_tools::{input_schema, ToolRegistry};
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

use crate::error::McpError;
use crate::protocol::*;

/// MCP Server
///
/// Answers Model Context Protocol requests, one JSON-RPC message per line.
pub struct McpServer {
    tools: ToolRegistry,
}

impl McpServer {
    /// Create a server over a tool registry
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    /// The tools being served
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Run the MCP server on stdin and stdout until stdin closes
    pub fn run(&mut self) -> Result<(), McpError> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Serve requests from `reader`, writing responses to `writer`
    pub fn serve<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<(), McpError> {
        info!("MCP server started");

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            if let Some(response) = self.handle_line(&line) {
                write_response(&mut writer, &response)?;
            }
        }

        info!("MCP server stopped");
        Ok(())
    }

    /// Handle one raw line; notifications produce no response
    pub fn handle_line(&mut self, line: &str) -> Option<JsonRpcMessage> {
        debug!("Received request: {}", line);

        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request),
            Err(e) => {
                error!("Failed to parse request: {}", e);
                Some(JsonRpcMessage::failure(None, -32700, format!("Parse error: {}", e)))
            }
        }
    }

    /// Handle a parsed JSON-RPC request
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> Option<JsonRpcMessage> {
        if request.is_notification() {
            debug!("Notification: {}", request.method);
            return None;
        }

        let id = request.id.clone();
        let result = if request.jsonrpc != "2.0" {
            Err(McpError::InvalidRequest(format!(
                "unsupported jsonrpc version: {}",
                request.jsonrpc
            )))
        } else {
            match request.method.as_str() {
                "initialize" => self.handle_initialize(),
                "ping" => Ok(Value::Object(Default::default())),
                "tools/list" => self.handle_tools_list(),
                "tools/call" => self.handle_tool_call(&request.params),
                other => Err(McpError::MethodNotFound(other.to_string())),
            }
        };

        Some(match result {
            Ok(value) => JsonRpcMessage::success(id, value),
            Err(e) => {
                warn!("Request {} failed: {}", request.method, e);
                JsonRpcMessage::failure(id, e.error_code(), e.to_string())
            }
        })
    }

    fn handle_initialize(&self) -> Result<Value, McpError> {
        let response = InitializeResponse {
            protocol_version: PROTOCOL_VERSION.to_string(),
            server_info: ServerInfo {
                name: "orientador-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
        };
        Ok(serde_json::to_value(response)?)
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        let tools = self
            .tools
            .definitions()
            .iter()
            .map(|spec| ToolDefinition {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                input_schema: input_schema(spec),
            })
            .collect();

        Ok(serde_json::to_value(ToolListResponse { tools })?)
    }

    fn handle_tool_call(&mut self, params: &Value) -> Result<Value, McpError> {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| McpError::InvalidParams("Missing tool name".to_string()))?;
        let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

        debug!("Calling tool {}", name);
        let text = self.tools.invoke(name, arguments)?;
        Ok(serde_json::to_value(ToolCallResult::text(text))?)
    }
}

fn write_response<W: Write>(writer: &mut W, response: &JsonRpcMessage) -> Result<(), McpError> {
    let response_str = serde_json::to_string(response)?;
    writeln!(writer, "{}", response_str)?;
    writer.flush()?;
    debug!("Sent response: {}", response_str);
    Ok(())
}
