//! Orientador Catalog
//!
//! Turns the text of a single university catalog document into lookup
//! structures and answers the queries behind the counselor's tools.
//!
//! # Overview
//!
//! ```text
//! PDF / text file → DocumentSource → Corpus { text, CatalogIndex } → Catalog queries
//! ```
//!
//! The document is read lazily on the first query and cached for the lifetime of
//! the [`Catalog`]. A document that cannot be read leaves the catalog empty; every
//! query then reports "not found" instead of failing.
//!
//! # Input format
//!
//! The index is built from `Universidad: <name>` and `Carrera: <name>` markers.
//! A university and a career that appear on the same line are associated with
//! each other. Detail and proximity queries work on the raw text and treat every
//! user supplied name as literal text.
//!
//! # Example Usage
//!
//! ```
//! use orientador_catalog::{Catalog, CatalogConfig, InMemorySource};
//!
//! let text = "Universidad: Tecnológica Carrera: Ingeniería\n";
//! let catalog = Catalog::new(InMemorySource::new(text), CatalogConfig::default());
//!
//! assert_eq!(catalog.careers_of("Tecnológica"), Some(&["Ingeniería".to_string()][..]));
//! assert_eq!(catalog.universities(), vec!["Tecnológica"]);
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod error;
mod index;
mod search;
mod source;


pub use catalog::{Catalog, CatalogStats, Corpus};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use index::{Associations, CatalogIndex};
pub use search::{career_lines_after, find_block, literal_pattern};
pub use source::{resolve_document_path, DocumentSource, FileSource, InMemorySource};
