//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use orientador_agent::AgentConfig;
use orientador_catalog::{resolve_document_path, CatalogConfig, CatalogError};
use orientador_llm::OllamaConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Document looked up when nothing else is configured
pub const DEFAULT_DOCUMENT: &str = "data/universidades.pdf";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ollama connection and sampling
    #[serde(default)]
    pub llm: OllamaConfig,

    /// Source document and query limits
    #[serde(default)]
    pub document: DocumentConfig,

    /// Counselor behavior
    #[serde(default)]
    pub agent: AgentConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Where the universities document lives and how it is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Path to the PDF (or text) document
    #[serde(default = "default_document")]
    pub path: PathBuf,

    /// Query and loading limits
    #[serde(flatten)]
    pub limits: CatalogConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Chat history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Text and tables
    Table,
    /// JSON format
    Json,
}

impl Config {
    /// Directory holding the configuration and chat history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".orientador"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        self.document.limits.validate().map_err(|e| match e {
            CatalogError::Config(msg) => CliError::Config(msg),
            other => CliError::Config(other.to_string()),
        })?;
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(CliError::Config(format!(
                "temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 {
            return Err(CliError::Config("timeout_secs must be greater than 0".into()));
        }
        Ok(())
    }

    /// Resolve the document path against the install directory or the working directory.
    pub fn document_path(&self) -> Result<PathBuf> {
        let install_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        let cwd = std::env::current_dir()?;
        Ok(resolve_document_path(&self.document.path, install_dir.as_deref(), &cwd))
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document(),
            limits: CatalogConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

fn default_document() -> PathBuf {
    PathBuf::from(DEFAULT_DOCUMENT)
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.model, "qwen3:1.7b");
        assert_eq!(config.document.path, PathBuf::from(DEFAULT_DOCUMENT));
        assert_eq!(config.document.limits.max_query_chars, 200);
        assert_eq!(config.agent.max_tool_rounds, 5);
        assert!(config.settings.color);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [llm]
            model = "llama3.2"

            [document]
            path = "/srv/guia.pdf"
            window_chars = 500

            [settings]
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.llm.model, "llama3.2");
        assert_eq!(config.llm.endpoint, "http://localhost:11434");
        assert_eq!(config.document.path, PathBuf::from("/srv/guia.pdf"));
        assert_eq!(config.document.limits.window_chars, 500);
        assert_eq!(config.document.limits.max_block_chars, 2_000);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.llm.temperature = 0.2;
        config.settings.history_size = 50;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[document]\nwindow_chars = 0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: window_chars must be greater than 0");

        std::fs::write(&path, "[llm]\ntemperature = 5.0\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_absolute_document_path_unchanged() {
        let mut config = Config::default();
        let absolute = std::env::temp_dir().join("guia.pdf");
        config.document.path = absolute.clone();
        assert_eq!(config.document_path().unwrap(), absolute);
    }
}
