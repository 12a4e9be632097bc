//! The catalog context object

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::index::CatalogIndex;
use crate::search;
use crate::source::{DocumentSource, FileSource};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Loaded document text and the index built from it
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Full document text
    pub text: String,

    /// University and career tables
    pub index: CatalogIndex,

    /// Why the document could not be loaded, if it could not
    pub load_error: Option<String>,
}

impl Corpus {
    /// Build a corpus from already extracted text
    pub fn from_text(text: String) -> Self {
        let index = CatalogIndex::from_text(&text);
        Self {
            text,
            index,
            load_error: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            load_error: Some(reason),
            ..Self::default()
        }
    }

    fn load(source: &dyn DocumentSource, config: &CatalogConfig) -> Self {
        match source.load() {
            Ok(mut text) => {
                let total = text.chars().count();
                if total > config.max_document_chars {
                    warn!(
                        "Document {} has {} chars, truncating to {}",
                        source.describe(),
                        total,
                        config.max_document_chars
                    );
                    let cut = text
                        .char_indices()
                        .nth(config.max_document_chars)
                        .map_or(text.len(), |(i, _)| i);
                    text.truncate(cut);
                }
                let corpus = Self::from_text(text);
                info!(
                    "Loaded {}: {} universities, {} careers",
                    source.describe(),
                    corpus.index.universities.len(),
                    corpus.index.careers.len()
                );
                corpus
            }
            Err(e) => {
                warn!("Document unavailable, catalog will be empty: {}", e);
                Self::failed(e.to_string())
            }
        }
    }
}

/// Summary of the loaded document
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    /// Where the document comes from
    pub source: String,
    /// Characters of extracted text
    pub characters: usize,
    /// Lines of extracted text
    pub lines: usize,
    /// Distinct universities
    pub universities: usize,
    /// Distinct careers
    pub careers: usize,
    /// University-career links
    pub associations: usize,
    /// Load failure, if any
    pub load_error: Option<String>,
}

/// Lazily loaded catalog of universities and careers
///
/// Owns the document source and caches the extracted corpus on first use.
/// Queries never fail because of a missing document: they simply find nothing.
pub struct Catalog {
    source: Box<dyn DocumentSource + Send + Sync>,
    config: CatalogConfig,
    corpus: OnceLock<Corpus>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("source", &self.source.describe())
            .field("config", &self.config)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl Catalog {
    /// Create a catalog over any document source
    pub fn new(source: impl DocumentSource + Send + Sync + 'static, config: CatalogConfig) -> Self {
        Self {
            source: Box::new(source),
            config,
            corpus: OnceLock::new(),
        }
    }

    /// Create a catalog over a file on disk
    pub fn from_path(path: impl Into<PathBuf>, config: CatalogConfig) -> Self {
        Self::new(FileSource::new(path), config)
    }

    /// Active limits
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The corpus, loading the document on first call
    pub fn corpus(&self) -> &Corpus {
        self.corpus
            .get_or_init(|| Corpus::load(self.source.as_ref(), &self.config))
    }

    /// Whether the document has been read already
    pub fn is_loaded(&self) -> bool {
        self.corpus.get().is_some()
    }

    /// Drop the cached corpus so the next query reads the document again
    pub fn invalidate(&mut self) {
        if self.corpus.take().is_some() {
            debug!("Catalog cache invalidated for {}", self.source.describe());
        }
    }

    /// Careers linked to a university (exact name)
    pub fn careers_of(&self, university: &str) -> Option<&[String]> {
        self.corpus().index.universities.get(university.trim())
    }

    /// Universities linked to a career (exact name)
    pub fn universities_of(&self, career: &str) -> Option<&[String]> {
        self.corpus().index.careers.get(career.trim())
    }

    /// All university names in document order
    pub fn universities(&self) -> Vec<&str> {
        self.corpus().index.universities.names().collect()
    }

    /// All career names in document order
    pub fn careers(&self) -> Vec<&str> {
        self.corpus().index.careers.names().collect()
    }

    /// Universities whose name contains the keyword (case-insensitive)
    pub fn search_universities(&self, keyword: &str) -> Vec<&str> {
        self.corpus().index.universities.search(keyword.trim())
    }

    /// Careers whose name contains the keyword (case-insensitive)
    pub fn search_careers(&self, keyword: &str) -> Vec<&str> {
        self.corpus().index.careers.search(keyword.trim())
    }

    /// Block of text describing `name`, if the name appears in the document
    pub fn detail(&self, name: &str) -> Result<Option<String>, CatalogError> {
        let name = self.check_query(name)?;
        Ok(search::find_block(&self.corpus().text, name, self.config.max_block_chars)?)
    }

    /// Career-looking lines near the first mention of a university
    pub fn careers_near(&self, university: &str) -> Result<Vec<String>, CatalogError> {
        let university = self.check_query(university)?;
        Ok(search::career_lines_after(
            &self.corpus().text,
            university,
            self.config.window_chars,
        )?)
    }

    /// Known universities whose nearby career lines mention `career`
    pub fn universities_offering(&self, career: &str) -> Result<Vec<String>, CatalogError> {
        let career = self.check_query(career)?;
        if career.is_empty() {
            return Ok(Vec::new());
        }
        let needle = career.to_lowercase();
        let corpus = self.corpus();

        let mut found = Vec::new();
        for university in corpus.index.universities.names() {
            let lines = search::career_lines_after(&corpus.text, university, self.config.window_chars)?;
            if lines.iter().any(|line| line.to_lowercase().contains(&needle)) {
                found.push(university.to_string());
            }
        }
        Ok(found)
    }

    /// Summary of the loaded document
    pub fn stats(&self) -> CatalogStats {
        let corpus = self.corpus();
        CatalogStats {
            source: self.source.describe(),
            characters: corpus.text.chars().count(),
            lines: corpus.text.lines().count(),
            universities: corpus.index.universities.len(),
            careers: corpus.index.careers.len(),
            associations: corpus.index.universities.link_count(),
            load_error: corpus.load_error.clone(),
        }
    }

    fn check_query<'a>(&self, name: &'a str) -> Result<&'a str, CatalogError> {
        let name = name.trim();
        let len = name.chars().count();
        if len > self.config.max_query_chars {
            return Err(CatalogError::QueryTooLong(len, self.config.max_query_chars));
        }
        Ok(name)
    }
}
