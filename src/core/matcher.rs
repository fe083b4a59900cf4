//! Recursive key and key/value matching over JSON trees.
//!
//! Both walks are depth-first, left to right. Object members are visited
//! in `BTreeMap` order. A direct member of an object always takes
//! precedence over anything nested below its siblings.
//!
//! Neither function guarantees the shallowest match when several exist,
//! only that a match reachable by this traversal is found.

use crate::core::value::JsonValue;

/// Find the value of the first occurrence of `key` in `node`.
///
/// Arrays are searched element by element, recursing into nested
/// containers. Objects return their direct member `key` if present,
/// otherwise recurse into each container member. Scalars are never
/// searched, so a scalar `node` yields `None`.
pub fn find_key<'a>(key: &str, node: &'a JsonValue) -> Option<&'a JsonValue> {
    if key.is_empty() {
        return None;
    }

    match node {
        JsonValue::Array(items) => items
            .iter()
            .filter(|item| item.is_container())
            .find_map(|item| find_key(key, item)),
        JsonValue::Object(members) => members.get(key).or_else(|| {
            members
                .values()
                .filter(|member| member.is_container())
                .find_map(|member| find_key(key, member))
        }),
        _ => None,
    }
}

/// Find `key` whose stringified value equals `value`, returning the
/// enclosing node of the match.
///
/// A match always requires `key` to be present.
///
/// - Array: container elements are searched; the element holding a match
///   is returned. Scalar elements are never compared here.
/// - Object with a direct member `key`: the member decides (see
///   [`value_matches`]) and siblings are not consulted. The object itself
///   is returned.
/// - Object without `key`: container members are searched in order and the
///   nested enclosing node is returned.
pub fn find_key_value<'a>(key: &str, value: &str, node: &'a JsonValue) -> Option<&'a JsonValue> {
    if key.is_empty() {
        return None;
    }

    match node {
        JsonValue::Array(items) => items
            .iter()
            .filter(|item| item.is_container())
            .find(|item| find_key_value(key, value, item).is_some()),
        JsonValue::Object(members) => match members.get(key) {
            Some(member) => value_matches(key, value, member).then_some(node),
            None => members
                .values()
                .filter(|member| member.is_container())
                .find_map(|member| find_key_value(key, value, member)),
        },
        _ => None,
    }
}

/// Compare the value found directly under `key`.
///
/// Scalars must equal `value`. A list matches when one of its scalar
/// elements equals `value` or one of its containers holds a match; an
/// object is searched on its own.
fn value_matches(key: &str, value: &str, found: &JsonValue) -> bool {
    match found {
        JsonValue::Array(items) => items.iter().any(|item| {
            if item.is_container() {
                find_key_value(key, value, item).is_some()
            } else {
                item.matches_scalar(value)
            }
        }),
        JsonValue::Object(_) => find_key_value(key, value, found).is_some(),
        _ => found.matches_scalar(value),
    }
}
