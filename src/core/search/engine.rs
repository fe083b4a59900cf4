//! Single-document search: indexed lookup or full scan.

use crate::core::error::{JsonSearchError, Result};
use crate::core::index::{IndexLookup, IndexRegistry};
use crate::core::matcher::find_key_value;
use crate::core::store::DocumentStore;
use crate::core::value::JsonValue;

/// Find the objects in `document` where `key` has `value`.
///
/// An existing index is authoritative: a miss is reported as
/// `KeyValueNotFound` without scanning. Unindexed keys are answered by
/// [`scan`], which returns every match rather than the first.
pub fn search<'a>(
    store: &'a DocumentStore,
    indexes: &IndexRegistry,
    document: &str,
    key: &str,
    value: &str,
) -> Result<Vec<&'a JsonValue>> {
    let root = store
        .get(document)
        .ok_or_else(|| JsonSearchError::UnknownDocument(document.to_string()))?;

    let results = match indexes.lookup(document, key, value) {
        IndexLookup::Hit(enclosing) => enclosing.resolve(root).into_iter().collect(),
        IndexLookup::Miss => Vec::new(),
        IndexLookup::NotIndexed => {
            tracing::debug!("No index on {}.{}, scanning", document, key);
            scan(root, key, value)
        }
    };

    if results.is_empty() {
        return Err(JsonSearchError::key_value_not_found(document, key, value));
    }
    Ok(results)
}

/// Full recursive scan of a document root.
///
/// Array roots yield every matching element. Object roots holding `key`
/// directly yield the root itself on a match; otherwise every member
/// holding a match at any depth is yielded.
pub fn scan<'a>(root: &'a JsonValue, key: &str, value: &str) -> Vec<&'a JsonValue> {
    match root {
        JsonValue::Array(items) => items
            .iter()
            .filter(|item| find_key_value(key, value, item).is_some())
            .collect(),
        JsonValue::Object(members) if members.contains_key(key) => {
            find_key_value(key, value, root).into_iter().collect()
        }
        JsonValue::Object(members) => members
            .values()
            .filter(|member| find_key_value(key, value, member).is_some())
            .collect(),
        _ => Vec::new(),
    }
}
