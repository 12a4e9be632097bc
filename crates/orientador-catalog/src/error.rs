//! Error types for the catalog

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Document file missing or unreadable
    #[error("Cannot read document {path}: {source}")]
    Io {
        /// Path that failed
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The PDF could not be converted to text
    #[error("Cannot extract text from PDF {path}: {reason}")]
    Pdf {
        /// Path of the PDF
        path: String,
        /// Parser message
        reason: String,
    },

    /// A query name is longer than the configured limit
    #[error("Query too long: {0} chars (max: {1})")]
    QueryTooLong(usize, usize),

    /// A search pattern could not be compiled
    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
