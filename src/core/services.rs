//! Unified service container for jsonsearch
//!
//! Loads the configured documents, builds the configured indexes and
//! registers relationships once; adapters share the result.

use crate::core::config::{merge_unique, Config};
use crate::core::db::JsonDb;
use crate::core::error::Result;
use crate::core::loader::{self, DocumentLoader};
use crate::core::relationship::Relationship;
use crate::core::value::JsonValue;
use std::path::PathBuf;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Loaded documents and their indexes
    pub db: Arc<JsonDb>,

    /// Relationships joined into every search
    pub relationships: Arc<Vec<Relationship>>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Index build failures are logged and the key is left unindexed
    /// (searches on it scan instead), unless `index.strict` is set.
    pub fn new(config: Config) -> Result<Self> {
        let relationships = config.relationships()?;
        let index_keys = config.index_keys()?;

        let mut db = JsonDb::new();
        let files = Self::document_files(&config)?;
        let names = loader::load_files(&mut db, &files)?;
        tracing::info!("Loaded {} document(s)", names.len());

        for key_ref in &index_keys {
            match db.build_index(&key_ref.document, &key_ref.key) {
                Ok(()) => tracing::info!("Built index on {}", key_ref),
                Err(e) if config.index.strict => return Err(e),
                Err(e) => tracing::warn!(
                    "Index on {} failed: {}. Searches on it fall back to scanning",
                    key_ref,
                    e
                ),
            }
        }

        Ok(Self::from_db(db, relationships, config))
    }

    /// Wrap an already loaded database
    pub fn from_db(db: JsonDb, relationships: Vec<Relationship>, config: Config) -> Self {
        Self {
            db: Arc::new(db),
            relationships: Arc::new(relationships),
            config: Arc::new(config),
        }
    }

    /// Explicit paths first, then the walked directory
    fn document_files(config: &Config) -> Result<Vec<PathBuf>> {
        let mut files = config.documents.paths.clone();

        if let Some(dir) = &config.documents.directory {
            let walker = DocumentLoader::new(
                config.documents.include_patterns.clone(),
                config.documents.max_file_size_mb,
            )?;
            merge_unique(&mut files, walker.collect_files(dir)?);
        }

        Ok(files)
    }

    /// Search with the registered relationships joined in.
    ///
    /// Without relationships this is a plain single-document search.
    pub fn search(&self, document: &str, key: &str, value: &str) -> Result<Vec<&JsonValue>> {
        if self.relationships.is_empty() {
            self.db.search(document, key, value)
        } else {
            self.db
                .search_related(document, key, value, &self.relationships)
        }
    }
}
