//! Orientador Tools
//!
//! The catalog queries exposed to the conversational agent (and to MCP clients)
//! as named tools. Every tool takes required string parameters and answers with
//! a plain Spanish text meant to be read by the model.
//!
//! Provides 12 tools:
//! - `buscarPorUniversidad` / `buscarPorCarrera` - Exact-name lookups
//! - `listarUniversidades` / `listarCarreras` - Everything the document names
//! - `buscarUniversidadPorPalabra` / `buscarCarreraPorPalabra` - Keyword search
//! - `detalleUniversidad` / `detalleCarrera` - Text block about a name
//! - `compararUniversidades` / `compararCarreras` - Two details side by side
//! - `listarCarrerasDeUniversidad` / `listarUniversidadesDeCarrera` - Proximity scans
//!
//! # Example
//!
//! ```
//! use orientador_catalog::{Catalog, CatalogConfig, InMemorySource};
//! use orientador_tools::ToolRegistry;
//! use serde_json::json;
//!
//! let catalog = Catalog::new(
//!     InMemorySource::new("Universidad: Tecnológica Carrera: Ingeniería"),
//!     CatalogConfig::default(),
//! );
//! let registry = ToolRegistry::new(catalog);
//!
//! let answer = registry
//!     .invoke("buscarPorUniversidad", json!({"universidad": "Tecnológica"}))
//!     .unwrap();
//! assert!(answer.contains("Ingeniería"));
//! ```

#![warn(missing_docs)]

mod error;
mod registry;
pub mod tools;

pub use error::ToolError;
pub use registry::{input_schema, ToolRegistry};
