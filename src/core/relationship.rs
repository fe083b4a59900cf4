//! Qualified key references and cross-document relationships.
//!
//! Relationships are written `"docA.keyA:docB.keyB"` and validated when
//! they are registered, never per query. A relationship is stored in the
//! order it was written but resolves from either side.

use crate::core::error::{JsonSearchError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// Greedy document part so the split happens on the last '.'
static KEY_REF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]+)\.([^.:]+)$").expect("valid key reference pattern"));

/// A `(document, key)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct KeyRef {
    pub document: String,
    pub key: String,
}

impl KeyRef {
    pub fn new(document: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            key: key.into(),
        }
    }

    pub fn is(&self, document: &str, key: &str) -> bool {
        self.document == document && self.key == key
    }

    /// Parse `"doc.key"`, splitting on the last `.`.
    ///
    /// Returns `None` when either part is empty or the text holds a `:`.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = KEY_REF_PATTERN.captures(text.trim())?;
        Some(Self::new(&caps[1], &caps[2]))
    }
}

impl FromStr for KeyRef {
    type Err = JsonSearchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            JsonSearchError::ConfigError(format!(
                "Invalid key reference '{s}', expected <document>.<key>"
            ))
        })
    }
}

impl fmt::Display for KeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.document, self.key)
    }
}

/// Declared correspondence between two keys in (usually) different documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub left: KeyRef,
    pub right: KeyRef,
}

impl Relationship {
    pub fn new(left: KeyRef, right: KeyRef) -> Self {
        Self { left, right }
    }

    /// The other side of this relationship when `from` is one of its sides
    pub fn counterpart(&self, from: &KeyRef) -> Option<&KeyRef> {
        if self.left == *from {
            Some(&self.right)
        } else if self.right == *from {
            Some(&self.left)
        } else {
            None
        }
    }
}

impl FromStr for Relationship {
    type Err = JsonSearchError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || {
            JsonSearchError::MalformedRelationship(format!(
                "'{s}', expected <document>.<key>:<document>.<key>"
            ))
        };

        let (left, right) = s.trim().split_once(':').ok_or_else(malformed)?;
        let left = KeyRef::parse(left).ok_or_else(malformed)?;
        let right = KeyRef::parse(right).ok_or_else(malformed)?;
        Ok(Self::new(left, right))
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.left, self.right)
    }
}

/// Parse a list of relationship strings, failing on the first malformed one
pub fn parse_relationships<S: AsRef<str>>(items: &[S]) -> Result<Vec<Relationship>> {
    items.iter().map(|s| s.as_ref().parse()).collect()
}
