//! Orientador MCP Server
//!
//! Exposes the catalog tools to Model Context Protocol clients over stdio.
//! Every tool from the chat assistant is available under the same name and
//! parameters, and answers with a single text content block.
//!
//! # Example
//!
//! ```no_run
//! use orientador_catalog::{Catalog, CatalogConfig};
//! use orientador_mcp::McpServer;
//! use orientador_tools::ToolRegistry;
//!
//! let catalog = Catalog::from_path("universidades.pdf", CatalogConfig::default());
//! let mut server = McpServer::new(ToolRegistry::new(catalog));
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;

pub use error::McpError;
pub use protocol::{JsonRpcError, JsonRpcMessage, JsonRpcRequest, JsonRpcResponse};
pub use server::McpServer;
