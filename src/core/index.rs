//! Flat value indexes over a single `(document, key)` pair.
//!
//! An index maps the stringified scalar found under `key` to the
//! enclosing object it was found in. Entries store a locator into the
//! document rather than a copy of the object; documents are immutable
//! after load so locators never go stale.
//!
//! # Concurrency
//!
//! [`IndexRegistry`] is single-writer/multiple-reader. Builds run against
//! the immutable document without holding the registry lock and are
//! serialized among themselves; the finished entry is swapped in under a
//! short write lock, so readers only ever observe complete indexes.

use crate::core::error::{JsonSearchError, Result};
use crate::core::matcher::find_key;
use crate::core::relationship::KeyRef;
use crate::core::value::JsonValue;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Where the enclosing object of an indexed value lives in its document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enclosing {
    /// The document root itself
    Root,
    /// Element of an array root
    Element(usize),
    /// Member of an object root
    Member(String),
}

impl Enclosing {
    /// Resolve this locator against a document root
    pub fn resolve<'a>(&self, root: &'a JsonValue) -> Option<&'a JsonValue> {
        match (self, root) {
            (Enclosing::Root, _) => Some(root),
            (Enclosing::Element(i), JsonValue::Array(items)) => items.get(*i),
            (Enclosing::Member(name), JsonValue::Object(members)) => members.get(name),
            _ => None,
        }
    }
}

/// Stringified value -> enclosing object, for one `(document, key)` pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexEntry {
    entries: HashMap<String, Enclosing>,
}

impl IndexEntry {
    pub fn get(&self, value: &str) -> Option<&Enclosing> {
        self.entries.get(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indexed values, sorted
    pub fn values(&self) -> Vec<&str> {
        let mut values: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        values.sort_unstable();
        values
    }
}

/// Build the index for `key` over one document root.
///
/// Fails with `UnsupportedIndexType` as soon as a matched value is not an
/// indexable scalar, and with `KeyNotFound` when nothing was indexed.
/// Duplicate values keep the last enclosing object seen.
pub fn build_index(document: &str, root: &JsonValue, key: &str) -> Result<IndexEntry> {
    let mut index = IndexEntry::default();
    let mut insert = |found: &JsonValue, enclosing: Enclosing| -> Result<()> {
        let value = found
            .index_key()
            .ok_or_else(|| JsonSearchError::UnsupportedIndexType {
                document: document.to_string(),
                key: key.to_string(),
                found: found.kind(),
            })?;
        index.entries.insert(value.into_owned(), enclosing);
        Ok(())
    };

    match root {
        JsonValue::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                if let Some(found) = find_key(key, item) {
                    insert(found, Enclosing::Element(i))?;
                }
            }
        }
        JsonValue::Object(members) => {
            if let Some(found) = members.get(key) {
                insert(found, Enclosing::Root)?;
            } else {
                for (name, member) in members.iter().filter(|(_, m)| m.is_container()) {
                    if let Some(found) = find_key(key, member) {
                        insert(found, Enclosing::Member(name.clone()))?;
                    }
                }
            }
        }
        _ => return Err(JsonSearchError::InvalidDocument(document.to_string())),
    }

    if index.is_empty() {
        return Err(JsonSearchError::KeyNotFound {
            document: document.to_string(),
            key: key.to_string(),
        });
    }

    tracing::debug!(
        "Indexed {} value(s) for {}.{}",
        index.len(),
        document,
        key
    );
    Ok(index)
}

/// Outcome of an index lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLookup {
    Hit(Enclosing),
    Miss,
    NotIndexed,
}

/// All built indexes, keyed by `(document, key)`
#[derive(Debug, Default)]
pub struct IndexRegistry {
    indexes: RwLock<HashMap<KeyRef, Arc<IndexEntry>>>,
    build_lock: Mutex<()>,
}

impl IndexRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and install the index for `key` on `document`.
    ///
    /// On failure any previous index for the pair is left untouched.
    pub fn build(&self, document: &str, root: &JsonValue, key: &str) -> Result<()> {
        let _build = self.build_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let entry = Arc::new(build_index(document, root, key)?);
        self.indexes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(KeyRef::new(document, key), entry);
        Ok(())
    }

    /// Snapshot of the index for a pair, if built
    pub fn get(&self, document: &str, key: &str) -> Option<Arc<IndexEntry>> {
        self.indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&KeyRef::new(document, key))
            .cloned()
    }

    pub fn lookup(&self, document: &str, key: &str, value: &str) -> IndexLookup {
        match self.get(document, key) {
            Some(entry) => match entry.get(value) {
                Some(enclosing) => IndexLookup::Hit(enclosing.clone()),
                None => IndexLookup::Miss,
            },
            None => IndexLookup::NotIndexed,
        }
    }

    pub fn is_indexed(&self, document: &str, key: &str) -> bool {
        self.get(document, key).is_some()
    }

    /// Drop every index built on `document`
    pub fn invalidate(&self, document: &str) {
        let mut indexes = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
        let before = indexes.len();
        indexes.retain(|key_ref, _| key_ref.document != document);
        if indexes.len() != before {
            tracing::debug!(
                "Dropped {} index(es) on replaced document '{}'",
                before - indexes.len(),
                document
            );
        }
    }

    /// Indexed pairs, sorted
    pub fn keys(&self) -> Vec<KeyRef> {
        let mut keys: Vec<KeyRef> = self
            .indexes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}
