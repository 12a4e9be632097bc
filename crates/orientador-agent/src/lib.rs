//! Orientador Agent
//!
//! The vocational counselor: a fixed persona prompt, the conversation history,
//! and the loop that lets the model call catalog tools before answering.
//!
//! # Architecture
//!
//! ```text
//! user → Agent → ChatModel ──tool calls──→ ToolRegistry → Catalog
//!                    ↑                          │
//!                    └────── tool results ──────┘
//! ```
//!
//! # Example Usage
//!
//! ```
//! use orientador_agent::{Agent, AgentConfig};
//! use orientador_catalog::{Catalog, CatalogConfig, InMemorySource};
//! use orientador_llm::MockProvider;
//! use orientador_tools::ToolRegistry;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let catalog = Catalog::new(InMemorySource::new(""), CatalogConfig::default());
//! let mut agent = Agent::new(
//!     MockProvider::new("¿Qué materias te gustan?"),
//!     ToolRegistry::new(catalog),
//!     AgentConfig::default(),
//! );
//!
//! let reply = agent.send("No sé qué estudiar").await.unwrap();
//! assert_eq!(reply, "¿Qué materias te gustan?");
//! # });
//! ```

#![warn(missing_docs)]

mod agent;
mod config;
mod error;
mod prompt;

pub use agent::{clean_reply, Agent};
pub use config::AgentConfig;
pub use error::AgentError;
pub use prompt::{EMPTY_REPLY_FALLBACK, SYSTEM_PROMPT, WELCOME_MESSAGE};
