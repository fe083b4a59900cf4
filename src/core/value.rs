//! Tagged JSON tree used by every search component.
//!
//! Objects keep their members in a `BTreeMap` so traversal order is
//! sorted by member name and identical on every run. Values are
//! immutable once a document is loaded.

use crate::core::error::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A parsed JSON node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum JsonValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(BTreeMap<String, JsonValue>),
}

impl JsonValue {
    /// Parse JSON text into a tree.
    pub fn parse(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(value.into())
    }

    /// Arrays and objects.
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    /// Number of elements or members; scalars have none.
    pub fn entry_count(&self) -> usize {
        match self {
            JsonValue::Array(items) => items.len(),
            JsonValue::Object(members) => members.len(),
            _ => 0,
        }
    }

    /// Get a direct member of an object.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(members) => members.get(key),
            _ => None,
        }
    }

    /// The string form used for equality checks and as an index key.
    ///
    /// Integers render as decimal, floats are truncated toward zero before
    /// rendering (so `12.9` and `12` both become `"12"`), strings pass
    /// through. Booleans, null and containers have no index key.
    pub fn index_key(&self) -> Option<Cow<'_, str>> {
        match self {
            JsonValue::String(s) => Some(Cow::Borrowed(s.as_str())),
            JsonValue::Integer(i) => Some(Cow::Owned(i.to_string())),
            JsonValue::Float(f) => Some(Cow::Owned((f.trunc() as i64).to_string())),
            _ => None,
        }
    }

    /// True when this is a scalar whose index key equals `value`.
    pub fn matches_scalar(&self, value: &str) -> bool {
        self.index_key().is_some_and(|k| k == value)
    }

    /// Human name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Boolean(_) => "a boolean",
            JsonValue::Integer(_) => "an integer",
            JsonValue::Float(_) => "a float",
            JsonValue::String(_) => "a string",
            JsonValue::Array(_) => "an array",
            JsonValue::Object(_) => "an object",
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Integer(i),
                // u64 beyond i64::MAX and all fractional numbers
                None => JsonValue::Float(n.as_f64().unwrap_or_default()),
            },
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(members) => JsonValue::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}
