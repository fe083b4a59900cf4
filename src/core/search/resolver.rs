//! Relationship joins across documents.
//!
//! A query on `(document, key)` is fanned out to every `(document, key)`
//! related to it. Indexes answer what they can; the remaining pairs are
//! scanned. Failures on related pairs are logged and skipped so a join
//! still returns what the other documents matched.

use crate::core::error::{JsonSearchError, Result};
use crate::core::index::{IndexLookup, IndexRegistry};
use crate::core::relationship::{KeyRef, Relationship};
use crate::core::search::engine::scan;
use crate::core::store::DocumentStore;
use crate::core::value::JsonValue;
use std::collections::HashSet;

/// Search `document` for `key == value` and join in matches from every
/// related document.
///
/// 1. Indexed lookup of the primary pair. An unknown primary document is
///    fatal.
/// 2. On a hit, each related pair is tried against its index; hits are
///    kept, misses (and unindexed pairs) are queued.
/// 3. On a primary miss, the primary and all related pairs are queued.
/// 4. Queued pairs are scanned; per-pair failures contribute nothing.
///
/// Each pair is queried at most once. An empty combined result is
/// `KeyValueNotFound`.
pub fn search_related<'a>(
    store: &'a DocumentStore,
    indexes: &IndexRegistry,
    document: &str,
    key: &str,
    value: &str,
    relationships: &[Relationship],
) -> Result<Vec<&'a JsonValue>> {
    if !store.contains(document) {
        return Err(JsonSearchError::UnknownDocument(document.to_string()));
    }

    let primary = KeyRef::new(document, key);
    let related: Vec<&KeyRef> = relationships
        .iter()
        .filter_map(|rel| rel.counterpart(&primary))
        .collect();

    let mut results = Vec::new();
    let mut satisfied: HashSet<&KeyRef> = HashSet::new();
    let mut unsatisfied: Vec<&KeyRef> = Vec::new();

    match indexed_lookup(store, indexes, &primary, value) {
        Some(hit) => {
            results.push(hit);
            satisfied.insert(&primary);

            for &target in &related {
                if satisfied.contains(target) {
                    continue;
                }
                match indexed_lookup(store, indexes, target, value) {
                    Some(hit) => {
                        push_unique(&mut results, hit);
                        satisfied.insert(target);
                    }
                    None => unsatisfied.push(target),
                }
            }
        }
        None => {
            unsatisfied.push(&primary);
            unsatisfied.extend(related.iter().copied());
        }
    }

    for target in unsatisfied {
        if !satisfied.insert(target) {
            continue;
        }
        match store.get(&target.document) {
            Some(root) => {
                let found = scan(root, &target.key, value);
                tracing::debug!("Scanned {} for '{}': {} match(es)", target, value, found.len());
                for item in found {
                    push_unique(&mut results, item);
                }
            }
            None => {
                tracing::debug!("Skipping related pair {}: unknown document", target);
            }
        }
    }

    if results.is_empty() {
        return Err(JsonSearchError::key_value_not_found(document, key, value));
    }
    Ok(results)
}

/// Results are a union: the same object reached through two pairs is kept once
fn push_unique<'a>(results: &mut Vec<&'a JsonValue>, item: &'a JsonValue) {
    if !results.iter().any(|existing| std::ptr::eq(*existing, item)) {
        results.push(item);
    }
}

fn indexed_lookup<'a>(
    store: &'a DocumentStore,
    indexes: &IndexRegistry,
    target: &KeyRef,
    value: &str,
) -> Option<&'a JsonValue> {
    match indexes.lookup(&target.document, &target.key, value) {
        IndexLookup::Hit(enclosing) => enclosing.resolve(store.get(&target.document)?),
        IndexLookup::Miss | IndexLookup::NotIndexed => None,
    }
}
