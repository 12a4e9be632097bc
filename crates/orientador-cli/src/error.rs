//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Language model backend error
    #[error(transparent)]
    Llm(#[from] orientador_llm::LlmError),

    /// Conversation turn failed
    #[error(transparent)]
    Agent(#[from] orientador_agent::AgentError),

    /// Tool could not be invoked
    #[error(transparent)]
    Tool(#[from] orientador_tools::ToolError),

    /// Line editor error
    #[error("Editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
