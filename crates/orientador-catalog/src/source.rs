//! Document sources

use crate::error::CatalogError;
use std::panic;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Something that can produce the full text of the catalog document
pub trait DocumentSource {
    /// Read the whole document as text
    fn load(&self) -> Result<String, CatalogError>;

    /// Short description for logs and status output
    fn describe(&self) -> String;
}

/// A document on disk
///
/// `.pdf` files go through the PDF text extractor; anything else is read as UTF-8.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_pdf(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"))
    }

    fn io_error(&self, source: std::io::Error) -> CatalogError {
        CatalogError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl DocumentSource for FileSource {
    fn load(&self) -> Result<String, CatalogError> {
        if self.is_pdf() {
            let bytes = std::fs::read(&self.path).map_err(|e| self.io_error(e))?;
            let path = self.path.display().to_string();
            // The extractor panics on some malformed fonts and pages
            match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
                Ok(result) => result.map_err(|e| CatalogError::Pdf {
                    path,
                    reason: e.to_string(),
                }),
                Err(_) => {
                    warn!("PDF parser panicked on {}", path);
                    Err(CatalogError::Pdf {
                        path,
                        reason: "PDF parser panicked".to_string(),
                    })
                }
            }
        } else {
            std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Text held in memory, for fixtures and tests
#[derive(Debug, Clone)]
pub struct InMemorySource {
    text: String,
}

impl InMemorySource {
    /// Wrap the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for InMemorySource {
    fn load(&self) -> Result<String, CatalogError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("<memoria: {} caracteres>", self.text.chars().count())
    }
}

/// Resolve a configured document path
///
/// Absolute paths are returned unchanged. Relative paths resolve against the
/// installation directory when the file exists there, otherwise against `cwd`.
pub fn resolve_document_path(path: &Path, install_dir: Option<&Path>, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    if let Some(dir) = install_dir {
        let candidate = dir.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    cwd.join(path)
}
