//! Conversation model

use crate::tool::{ToolCall, ToolSpec};

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Instructions that frame the whole conversation
    System,

    /// The person talking to the counselor
    User,

    /// The language model
    Assistant,

    /// Output of a tool invocation fed back to the model
    Tool,
}

impl Role {
    /// Get the role name as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }

    /// Parse a role from its wire name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            "tool" => Some(Role::Tool),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single message in the conversation history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    /// Who wrote the message
    pub role: Role,

    /// Message text
    pub content: String,

    /// Tool calls requested by the assistant (empty for other roles)
    pub tool_calls: Vec<ToolCall>,

    /// Name of the tool that produced this message (tool role only)
    pub tool_name: Option<String>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_name: None,
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message, optionally carrying tool calls
    pub fn assistant(content: impl Into<String>, tool_calls: Vec<ToolCall>) -> Self {
        Self {
            tool_calls,
            ..Self::new(Role::Assistant, content)
        }
    }

    /// Create a tool result message
    pub fn tool(tool_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_name: Some(tool_name.into()),
            ..Self::new(Role::Tool, content)
        }
    }
}

/// Everything the model needs to produce the next turn
#[derive(Debug, Clone, Copy)]
pub struct ChatRequest<'a> {
    /// Full conversation so far, system prompt first
    pub messages: &'a [ChatMessage],

    /// Tools the model may call
    pub tools: &'a [ToolSpec],
}

/// The model's answer to a [`ChatRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatReply {
    /// Text content (may be empty when the model only calls tools)
    pub content: String,

    /// Tools the model wants to run before answering
    pub tool_calls: Vec<ToolCall>,
}

impl ChatReply {
    /// A plain text reply without tool calls
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tool_calls: Vec::new(),
        }
    }

    /// A reply that only requests tool calls
    pub fn calls(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            content: String::new(),
            tool_calls,
        }
    }

    /// Whether the model asked for any tool
    pub fn wants_tools(&self) -> bool {
        !self.tool_calls.is_empty()
    }
}
