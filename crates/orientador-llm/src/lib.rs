//! Orientador LLM Provider Layer
//!
//! Implementations of the `ChatModel` trait from `orientador-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Scripted replies for deterministic testing
//! - `OllamaProvider`: Local Ollama chat API with tool calling
//!
//! # Examples
//!
//! ```
//! use orientador_llm::MockProvider;
//! use orientador_domain::{ChatMessage, ChatRequest, ChatModel};
//!
//! # tokio_test_block_on(async {
//! let provider = MockProvider::new("¡Hola!");
//! let messages = [ChatMessage::user("hola")];
//! let reply = provider.chat(ChatRequest { messages: &messages, tools: &[] }).await.unwrap();
//! assert_eq!(reply.content, "¡Hola!");
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Runtime::new().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;

use orientador_domain::{ChatModel, ChatReply, ChatRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use ollama::{OllamaConfig, OllamaProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The backend did not answer in time
    #[error("No response after {0} seconds")]
    Timeout(u64),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock chat model for deterministic testing
///
/// Returns scripted replies in order, then the default reply. No network calls.
///
/// # Examples
///
/// ```
/// use orientador_llm::MockProvider;
/// use orientador_domain::{ChatReply, ToolCall};
///
/// let provider = MockProvider::new("Listo")
///     .then(ChatReply::calls(vec![ToolCall::new("listarCarreras")]))
///     .then(ChatReply::text("Estas son las carreras"));
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: String,
    script: Arc<Mutex<VecDeque<Result<ChatReply, String>>>>,
    call_count: Arc<Mutex<usize>>,
    seen_message_counts: Arc<Mutex<Vec<usize>>>,
}

impl MockProvider {
    /// Create a MockProvider that answers every turn with `reply`
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            script: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
            seen_message_counts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a reply for the next unanswered turn
    pub fn then(self, reply: ChatReply) -> Self {
        self.script.lock().unwrap().push_back(Ok(reply));
        self
    }

    /// Queue a failure for the next unanswered turn
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Number of times `chat` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// History length seen on each call, in call order
    pub fn seen_message_counts(&self) -> Vec<usize> {
        self.seen_message_counts.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl ChatModel for MockProvider {
    type Error = LlmError;

    async fn chat(&self, request: ChatRequest<'_>) -> Result<ChatReply, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        self.seen_message_counts
            .lock()
            .unwrap()
            .push(request.messages.len());

        match self.script.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(LlmError::Other(message)),
            None => Ok(ChatReply::text(self.default_reply.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orientador_domain::{ChatMessage, ToolCall};

    fn request(messages: &[ChatMessage]) -> ChatRequest<'_> {
        ChatRequest { messages, tools: &[] }
    }

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let reply = provider.chat(request(&[ChatMessage::user("hola")])).await.unwrap();
        assert_eq!(reply.content, "Test response");
        assert!(!reply.wants_tools());
    }

    #[tokio::test]
    async fn test_mock_provider_script_then_default() {
        let provider = MockProvider::default()
            .then(ChatReply::calls(vec![ToolCall::new("listarUniversidades")]))
            .then(ChatReply::text("segunda"));
        let messages = [ChatMessage::user("hola")];

        assert!(provider.chat(request(&messages)).await.unwrap().wants_tools());
        assert_eq!(provider.chat(request(&messages)).await.unwrap().content, "segunda");
        assert_eq!(
            provider.chat(request(&messages)).await.unwrap().content,
            "Default mock response"
        );
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let provider = MockProvider::default().then_fail("backend down");
        let result = provider.chat(request(&[ChatMessage::user("hola")])).await;
        assert!(matches!(result, Err(LlmError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_provider_records_history_length() {
        let provider = MockProvider::default();
        provider.chat(request(&[ChatMessage::user("a")])).await.unwrap();
        provider
            .chat(request(&[ChatMessage::user("a"), ChatMessage::user("b")]))
            .await
            .unwrap();
        assert_eq!(provider.seen_message_counts(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.chat(request(&[ChatMessage::user("a")])).await.unwrap();

        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
