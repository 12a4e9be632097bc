//! Configuration for the agent

use crate::prompt::SYSTEM_PROMPT;
use serde::{Deserialize, Serialize};

/// Agent behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model round trips allowed to run tools before a final answer is forced
    pub max_tool_rounds: usize,

    /// Persona and instructions sent as the first message
    pub system_prompt: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: 5,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}
