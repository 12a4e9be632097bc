//! Orientador Domain Layer
//!
//! Core vocabulary shared by every other crate in the workspace. It has ZERO
//! external dependencies and defines the conversation model, tool descriptions
//! and the trait the language-model backends implement.
//!
//! ## Key Concepts
//!
//! - **ChatMessage**: One turn of the conversation (system, user, assistant or tool)
//! - **ToolSpec**: Name, description and required string parameters of a tool
//! - **ToolCall**: A request from the model to run a tool with string arguments
//! - **ChatModel**: The boundary to the language-model backend
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod tool;
pub mod traits;

// Re-exports for convenience
pub use chat::{ChatMessage, ChatReply, ChatRequest, Role};
pub use tool::{ToolCall, ToolParam, ToolSpec};
pub use traits::ChatModel;
