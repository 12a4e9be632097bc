//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::chat::{ChatReply, ChatRequest};

/// Trait for language-model backends that support tool calling
///
/// Implemented by the infrastructure layer (orientador-llm)
#[allow(async_fn_in_trait)]
pub trait ChatModel {
    /// Error type for model operations
    type Error: std::error::Error;

    /// Produce the next assistant turn for the given conversation
    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatReply, Self::Error>;

    /// Identifier of the underlying model (for logs and status output)
    fn model_name(&self) -> &str;
}
