//! Ollama Provider Implementation
//!
//! Talks to a local Ollama instance through its chat API, including native tool
//! calling.
//!
//! # Features
//!
//! - Async HTTP communication with `/api/chat`
//! - Configurable endpoint, model, temperature and timeout
//! - Retry logic with exponential backoff
//! - Tool declarations derived from `ToolSpec`
//!
//! # Examples
//!
//! ```no_run
//! use orientador_llm::{OllamaConfig, OllamaProvider};
//!
//! let provider = OllamaProvider::from_config(&OllamaConfig::default()).unwrap();
//! ```

use crate::LlmError;
use orientador_domain::{ChatMessage, ChatModel, ChatReply, ChatRequest, Role, ToolCall, ToolSpec};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model
pub const DEFAULT_MODEL: &str = "qwen3:1.7b";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.75;

/// Default timeout for LLM requests (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Connection and sampling settings for Ollama
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// API endpoint
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Attempts per request for transient failures
    pub max_retries: u32,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Ollama API provider for local LLM inference
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    temperature: f32,
    timeout_secs: u64,
    client: reqwest::Client,
    max_retries: u32,
}

/// Request body for Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Value>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tool_calls: Vec<WireToolCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tool_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    function: WireFunction,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunction {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Response from Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: WireMessage,
    #[allow(dead_code)]
    #[serde(default)]
    done: bool,
}

impl OllamaProvider {
    /// Create a new Ollama provider with default sampling settings
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "qwen3:1.7b")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, LlmError> {
        Self::from_config(&OllamaConfig {
            endpoint: endpoint.into(),
            model: model.into(),
            ..OllamaConfig::default()
        })
    }

    /// Create a provider from a full configuration
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built
    pub fn from_config(config: &OllamaConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            timeout_secs: config.timeout_secs,
            client,
            max_retries: config.max_retries.max(1),
        })
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Send one chat turn to Ollama
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Ollama is not running
    /// - Model is not available
    /// - The request times out
    /// - Response format is invalid
    pub async fn send_chat(&self, messages: &[ChatMessage], tools: &[ToolSpec]) -> Result<ChatReply, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let request_body = OllamaChatRequest {
            model: &self.model,
            messages: messages.iter().map(to_wire).collect(),
            tools: tools.iter().map(function_schema).collect(),
            stream: false,
            options: OllamaOptions {
                temperature: self.temperature,
            },
        };

        // Retry logic with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        let body = response.json::<OllamaChatResponse>().await.map_err(|e| {
                            LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                        })?;
                        return from_wire(body.message);
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) if e.is_timeout() => {
                    return Err(LlmError::Timeout(self.timeout_secs));
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                warn!("Ollama request failed, retrying in {:?}", delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl ChatModel for OllamaProvider {
    type Error = LlmError;

    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatReply, Self::Error> {
        debug!(
            "Chat turn: {} messages, {} tools",
            request.messages.len(),
            request.tools.len()
        );
        self.send_chat(request.messages, request.tools).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Ollama function declaration for a tool
fn function_schema(spec: &ToolSpec) -> Value {
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
        "type": "function",
        "function": {
            "name": spec.name,
            "description": spec.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": spec.param_names().collect::<Vec<_>>(),
            }
        }
    })
}

fn to_wire(message: &ChatMessage) -> WireMessage {
    WireMessage {
        role: message.role.as_str().to_string(),
        content: message.content.clone(),
        tool_calls: message
            .tool_calls
            .iter()
            .map(|call| WireToolCall {
                function: WireFunction {
                    name: call.name.clone(),
                    arguments: json!(call.arguments),
                },
            })
            .collect(),
        tool_name: message.tool_name.clone(),
    }
}

fn from_wire(message: WireMessage) -> Result<ChatReply, LlmError> {
    if Role::parse(&message.role) != Some(Role::Assistant) {
        return Err(LlmError::InvalidResponse(format!(
            "Expected assistant message, got role '{}'",
            message.role
        )));
    }

    let tool_calls = message
        .tool_calls
        .into_iter()
        .map(|call| ToolCall {
            name: call.function.name,
            arguments: string_arguments(call.function.arguments),
        })
        .collect();

    Ok(ChatReply {
        content: message.content,
        tool_calls,
    })
}

/// Flatten tool arguments to strings
///
/// Some models send the arguments object JSON-encoded inside a string.
fn string_arguments(arguments: Value) -> BTreeMap<String, String> {
    let arguments = match arguments {
        Value::String(raw) => serde_json::from_str(&raw).unwrap_or(Value::Null),
        other => other,
    };

    match arguments {
        Value::Object(map) => map
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orientador_domain::ToolParam;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new("http://localhost:11434/", "qwen3:1.7b").unwrap();
        assert_eq!(provider.endpoint, "http://localhost:11434");
        assert_eq!(provider.model, "qwen3:1.7b");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(provider.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(provider.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_ollama_provider_builders() {
        let provider = OllamaProvider::new(DEFAULT_ENDPOINT, "mistral")
            .unwrap()
            .with_max_retries(0)
            .with_temperature(0.2);
        assert_eq!(provider.max_retries, 1);
        assert_eq!(provider.temperature, 0.2);
        assert_eq!(provider.model_name(), "mistral");
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: OllamaConfig = serde_json::from_str(r#"{"model": "llama3.2"}"#).unwrap();
        assert_eq!(config.model, "llama3.2");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, 120);
    }

    #[test]
    fn test_function_schema() {
        let spec = ToolSpec {
            name: "compararCarreras",
            description: "Compara dos carreras",
            params: vec![
                ToolParam::new("carrera1", "Primera carrera"),
                ToolParam::new("carrera2", "Segunda carrera"),
            ],
        };
        let schema = function_schema(&spec);
        assert_eq!(schema["type"], "function");
        assert_eq!(schema["function"]["name"], "compararCarreras");
        assert_eq!(schema["function"]["parameters"]["properties"]["carrera1"]["type"], "string");
        assert_eq!(schema["function"]["parameters"]["required"], json!(["carrera1", "carrera2"]));
    }

    #[test]
    fn test_to_wire_tool_message() {
        let wire = to_wire(&ChatMessage::tool("listarCarreras", "Carreras:\n- Medicina"));
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["role"], "tool");
        assert_eq!(value["tool_name"], "listarCarreras");
        assert!(value.get("tool_calls").is_none());
    }

    #[test]
    fn test_to_wire_assistant_tool_calls() {
        let call = ToolCall::new("buscarPorCarrera").with_arg("carrera", "Medicina");
        let wire = to_wire(&ChatMessage::assistant("", vec![call]));
        let value = serde_json::to_value(&wire).unwrap();
        assert_eq!(value["tool_calls"][0]["function"]["name"], "buscarPorCarrera");
        assert_eq!(value["tool_calls"][0]["function"]["arguments"]["carrera"], "Medicina");
    }

    #[test]
    fn test_parse_tool_call_response() {
        let body = r#"{
            "model": "qwen3:1.7b",
            "message": {
                "role": "assistant",
                "content": "",
                "tool_calls": [
                    {"function": {"name": "buscarPorUniversidad", "arguments": {"universidad": "UBA"}}}
                ]
            },
            "done": true
        }"#;
        let response: OllamaChatResponse = serde_json::from_str(body).unwrap();
        let reply = from_wire(response.message).unwrap();
        assert_eq!(reply.tool_calls.len(), 1);
        assert_eq!(reply.tool_calls[0].name, "buscarPorUniversidad");
        assert_eq!(reply.tool_calls[0].arguments["universidad"], "UBA");
    }

    #[test]
    fn test_parse_text_response() {
        let body = r#"{"message": {"role": "assistant", "content": "¡Hola!"}, "done": true}"#;
        let response: OllamaChatResponse = serde_json::from_str(body).unwrap();
        let reply = from_wire(response.message).unwrap();
        assert_eq!(reply, ChatReply::text("¡Hola!"));
    }

    #[test]
    fn test_parse_rejects_non_assistant_role() {
        let message = WireMessage {
            role: "user".to_string(),
            content: "eco".to_string(),
            tool_calls: Vec::new(),
            tool_name: None,
        };
        assert!(matches!(from_wire(message), Err(LlmError::InvalidResponse(_))));
    }

    #[test]
    fn test_string_arguments_variants() {
        let args = string_arguments(json!({"universidad": "UBA", "limite": 3}));
        assert_eq!(args["universidad"], "UBA");
        assert_eq!(args["limite"], "3");

        let args = string_arguments(json!("{\"carrera\": \"Derecho\"}"));
        assert_eq!(args["carrera"], "Derecho");

        assert!(string_arguments(json!("not json")).is_empty());
        assert!(string_arguments(Value::Null).is_empty());
    }

    // Integration tests (requires running Ollama)
    #[tokio::test]
    #[ignore] // Only run when Ollama is available
    async fn test_ollama_chat_integration() {
        let provider = OllamaProvider::from_config(&OllamaConfig::default()).unwrap();
        let messages = [ChatMessage::user("Decí 'hola' y nada más")];
        let result = provider.send_chat(&messages, &[]).await;

        if let Ok(reply) = result {
            assert!(!reply.content.is_empty());
        }
    }

    #[tokio::test]
    async fn test_ollama_error_handling() {
        // Nothing listens on port 9 locally
        let provider = OllamaProvider::new("http://127.0.0.1:9", "qwen3:1.7b")
            .unwrap()
            .with_max_retries(1);

        let result = provider.send_chat(&[ChatMessage::user("hola")], &[]).await;

        match result {
            Err(LlmError::Communication(_)) | Err(LlmError::Timeout(_)) => {} // Expected
            other => panic!("Expected Communication error, got {:?}", other.map(|r| r.content)),
        }
    }
}
