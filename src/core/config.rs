//! Configuration management for jsonsearch.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{JsonSearchError, Result};
use crate::core::relationship::{KeyRef, Relationship};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Which documents to load
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    /// Explicit document files
    #[serde(default)]
    pub paths: Vec<PathBuf>,

    /// Directory walked for document files
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File patterns to include when walking `directory` (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// Maximum file size in MB (skip larger files)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

/// Indexes built at startup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IndexConfig {
    /// `document.key` pairs to index
    #[serde(default)]
    pub keys: Vec<String>,

    /// Fail startup when an index cannot be built
    #[serde(default)]
    pub strict: bool,
}

/// Search configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// `docA.key:docB.key` relationships joined into every search
    #[serde(default)]
    pub relationships: Vec<String>,
}

// Default value functions
fn default_include_patterns() -> Vec<String> {
    vec!["*.json".to_string()]
}

fn default_max_file_size() -> usize {
    256
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            directory: None,
            include_patterns: default_include_patterns(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

/// Split a comma separated list, trimming entries and dropping empties
/// and duplicates while keeping first-seen order.
pub fn split_list(value: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in value.split(',').map(str::trim) {
        if item.is_empty() {
            tracing::debug!("Ignoring empty list entry in '{}'", value);
            continue;
        }
        if !items.iter().any(|existing| existing == item) {
            items.push(item.to_string());
        }
    }
    items
}

/// Append `extra` to `items`, skipping entries already present
pub fn merge_unique<T: PartialEq>(items: &mut Vec<T>, extra: impl IntoIterator<Item = T>) {
    for item in extra {
        if !items.contains(&item) {
            items.push(item);
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            JsonSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. JSONSEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/jsonsearch/config.toml)
    /// 3. ./jsonsearch.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("JSONSEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("jsonsearch.toml").exists() {
                Self::from_file("jsonsearch.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// List variables are appended to what the file configured.
    pub fn merge_env(&mut self) {
        // Documents configuration
        if let Ok(paths) = env::var("JSONSEARCH_DOCUMENTS") {
            merge_unique(
                &mut self.documents.paths,
                split_list(&paths).into_iter().map(PathBuf::from),
            );
        }
        if let Ok(dir) = env::var("JSONSEARCH_DIRECTORY") {
            self.documents.directory = Some(PathBuf::from(dir));
        }
        if let Ok(max_size) = env::var("JSONSEARCH_MAX_FILE_SIZE_MB") {
            if let Ok(size) = max_size.parse() {
                self.documents.max_file_size_mb = size;
            }
        }

        // Index configuration
        if let Ok(keys) = env::var("JSONSEARCH_INDEX_KEYS") {
            merge_unique(&mut self.index.keys, split_list(&keys));
        }
        if let Ok(strict) = env::var("JSONSEARCH_INDEX_STRICT") {
            if let Ok(s) = strict.parse() {
                self.index.strict = s;
            }
        }

        // Search configuration
        if let Ok(relationships) = env::var("JSONSEARCH_RELATIONSHIPS") {
            merge_unique(&mut self.search.relationships, split_list(&relationships));
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.documents.max_file_size_mb == 0 {
            return Err(JsonSearchError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.documents.directory.is_some() && self.documents.include_patterns.is_empty() {
            return Err(JsonSearchError::ConfigError(
                "Include patterns cannot be empty when a directory is set".to_string(),
            ));
        }

        self.index_keys()?;
        self.relationships()?;

        Ok(())
    }

    /// Parsed `[index] keys`
    pub fn index_keys(&self) -> Result<Vec<KeyRef>> {
        self.index.keys.iter().map(|k| k.parse()).collect()
    }

    /// Parsed `[search] relationships`
    pub fn relationships(&self) -> Result<Vec<Relationship>> {
        self.search.relationships.iter().map(|r| r.parse()).collect()
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Document paths: {:?}", self.documents.paths);
        tracing::info!("  Document directory: {:?}", self.documents.directory);
        tracing::info!(
            "  Include patterns: {:?}",
            self.documents.include_patterns
        );
        tracing::info!("  Max file size: {} MB", self.documents.max_file_size_mb);
        tracing::info!("  Index keys: {:?}", self.index.keys);
        tracing::info!("  Strict indexing: {}", self.index.strict);
        tracing::info!("  Relationships: {:?}", self.search.relationships);
    }
}
