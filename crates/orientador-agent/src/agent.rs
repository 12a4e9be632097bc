//! Conversation loop

use orientador_domain::{ChatMessage, ChatModel, ChatRequest, ToolSpec};
use orientador_tools::ToolRegistry;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::prompt::EMPTY_REPLY_FALLBACK;

static THINK_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<think>.*?(?:</think>|\z)").expect("think pattern is valid")
});

/// Remove reasoning blocks and surrounding whitespace from a model reply
pub fn clean_reply(content: &str) -> String {
    THINK_BLOCK.replace_all(content, "").trim().to_string()
}

/// Vocational counselor bound to a model and a tool registry
pub struct Agent<M> {
    model: M,
    tools: ToolRegistry,
    config: AgentConfig,
    history: Vec<ChatMessage>,
}

impl<M: ChatModel> Agent<M> {
    /// Create an agent with an empty conversation
    pub fn new(model: M, tools: ToolRegistry, config: AgentConfig) -> Self {
        let history = vec![ChatMessage::system(config.system_prompt.clone())];
        Self {
            model,
            tools,
            config,
            history,
        }
    }

    /// Conversation so far, system prompt first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// The tools available to the model
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Mutable access to the tools (to reload the document)
    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    /// Identifier of the model in use
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Forget the conversation, keeping the system prompt
    pub fn reset(&mut self) {
        self.history.truncate(1);
        info!("Conversation reset");
    }

    /// Send a user message and return the counselor's reply
    ///
    /// The model may call tools up to `max_tool_rounds` times; after that it is
    /// asked once more without tools so it has to answer. Tool failures are fed
    /// back to the model as text.
    ///
    /// # Errors
    ///
    /// Returns error if the message is blank or the model fails. A failed turn
    /// leaves the history as it was before the call.
    pub async fn send(&mut self, user_message: &str) -> Result<String, AgentError> {
        let user_message = user_message.trim();
        if user_message.is_empty() {
            return Err(AgentError::EmptyMessage);
        }

        let turn_start = self.history.len();
        self.history.push(ChatMessage::user(user_message));

        let max_rounds = self.config.max_tool_rounds;
        for round in 0..=max_rounds {
            let tools: &[ToolSpec] = if round < max_rounds {
                self.tools.definitions()
            } else {
                &[]
            };

            let request = ChatRequest {
                messages: &self.history,
                tools,
            };
            let reply = match self.model.chat(request).await {
                Ok(reply) => reply,
                Err(e) => {
                    self.history.truncate(turn_start);
                    return Err(AgentError::Model(e.to_string()));
                }
            };

            if !reply.wants_tools() || round == max_rounds {
                if reply.wants_tools() {
                    warn!("Model still wants tools after {} rounds, ignoring", max_rounds);
                }
                let text = clean_reply(&reply.content);
                self.history
                    .push(ChatMessage::assistant(reply.content, Vec::new()));
                return Ok(if text.is_empty() {
                    EMPTY_REPLY_FALLBACK.to_string()
                } else {
                    text
                });
            }

            self.history
                .push(ChatMessage::assistant(reply.content, reply.tool_calls.clone()));
            for call in &reply.tool_calls {
                let output = match self.tools.invoke_call(call) {
                    Ok(output) => output,
                    Err(e) => {
                        warn!("Tool call failed: {}", e);
                        format!("Error: {}", e)
                    }
                };
                debug!("Tool {} answered {} chars", call.name, output.len());
                self.history.push(ChatMessage::tool(call.name.clone(), output));
            }
        }

        // The last round never offers tools, so the loop always returns
        Ok(EMPTY_REPLY_FALLBACK.to_string())
    }
}
