//! Named document storage.
//!
//! Documents are registered once during the load phase and read-only
//! afterwards. Only object- and array-rooted trees are accepted.

use crate::core::error::{JsonSearchError, Result};
use crate::core::value::JsonValue;
use std::collections::HashMap;

/// A loaded, named JSON tree
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub root: JsonValue,
}

/// Mapping from document name to document
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<String, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a parsed root under `name`.
    ///
    /// Loading a name twice replaces the earlier document.
    pub fn load(&mut self, name: impl Into<String>, root: JsonValue) -> Result<()> {
        let name = name.into();
        if !root.is_container() {
            return Err(JsonSearchError::InvalidDocument(name));
        }

        if self
            .documents
            .insert(name.clone(), Document { name: name.clone(), root })
            .is_some()
        {
            tracing::debug!("Replaced document '{}'", name);
        }
        Ok(())
    }

    /// Root of the named document
    pub fn get(&self, name: &str) -> Option<&JsonValue> {
        self.documents.get(name).map(|doc| &doc.root)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Document names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
