//! Configuration for the catalog

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Limits applied while loading and querying the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Longest name accepted by detail and proximity queries (characters)
    pub max_query_chars: usize,

    /// Longest block returned by a detail lookup (characters)
    pub max_block_chars: usize,

    /// Characters scanned after a university's first occurrence
    pub window_chars: usize,

    /// Documents longer than this are truncated after extraction (characters)
    pub max_document_chars: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_query_chars: 200,
            max_block_chars: 2_000,
            window_chars: 1_000,
            max_document_chars: 5_000_000,
        }
    }
}

impl CatalogConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.max_query_chars == 0 {
            return Err(CatalogError::Config("max_query_chars must be greater than 0".to_string()));
        }
        if self.max_block_chars == 0 {
            return Err(CatalogError::Config("max_block_chars must be greater than 0".to_string()));
        }
        if self.window_chars == 0 {
            return Err(CatalogError::Config("window_chars must be greater than 0".to_string()));
        }
        if self.window_chars > self.max_document_chars {
            return Err(CatalogError::Config("window_chars cannot exceed max_document_chars".to_string()));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CatalogError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        toml::to_string_pretty(self)
            .map_err(|e| CatalogError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
