//! In-memory JSON database: named documents plus their value indexes.
//!
//! Loading takes `&mut self` and happens before the database is shared.
//! Everything else takes `&self`, so an `Arc<JsonDb>` can serve any
//! number of concurrent searches while indexes are (re)built.

use crate::core::error::{JsonSearchError, Result};
use crate::core::index::{IndexEntry, IndexRegistry};
use crate::core::relationship::{KeyRef, Relationship};
use crate::core::search;
use crate::core::store::DocumentStore;
use crate::core::value::JsonValue;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct JsonDb {
    store: DocumentStore,
    indexes: IndexRegistry,
}

impl JsonDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed document under `name`.
    ///
    /// Replacing a document drops the indexes built on the old one.
    pub fn load(&mut self, name: impl Into<String>, root: JsonValue) -> Result<()> {
        let name = name.into();
        self.store.load(name.clone(), root)?;
        self.indexes.invalidate(&name);
        Ok(())
    }

    /// Build (or rebuild) the value index for `key` on `document`.
    pub fn build_index(&self, document: &str, key: &str) -> Result<()> {
        let root = self
            .store
            .get(document)
            .ok_or_else(|| JsonSearchError::UnknownDocument(document.to_string()))?;
        self.indexes.build(document, root, key)
    }

    /// Single-document search, see [`search::search`].
    pub fn search(&self, document: &str, key: &str, value: &str) -> Result<Vec<&JsonValue>> {
        search::search(&self.store, &self.indexes, document, key, value)
    }

    /// Search joined across relationships, see [`search::search_related`].
    pub fn search_related(
        &self,
        document: &str,
        key: &str,
        value: &str,
        relationships: &[Relationship],
    ) -> Result<Vec<&JsonValue>> {
        search::search_related(
            &self.store,
            &self.indexes,
            document,
            key,
            value,
            relationships,
        )
    }

    pub fn document(&self, name: &str) -> Option<&JsonValue> {
        self.store.get(name)
    }

    pub fn document_names(&self) -> Vec<&str> {
        self.store.names()
    }

    pub fn index(&self, document: &str, key: &str) -> Option<Arc<IndexEntry>> {
        self.indexes.get(document, key)
    }

    pub fn indexed_keys(&self) -> Vec<KeyRef> {
        self.indexes.keys()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
