//! Error types for the agent

use thiserror::Error;

/// Errors that end a conversation turn without a reply
#[derive(Error, Debug)]
pub enum AgentError {
    /// The language model could not be reached or answered badly
    #[error("Model error: {0}")]
    Model(String),

    /// Blank user message
    #[error("Empty message")]
    EmptyMessage,
}
