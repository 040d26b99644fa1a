//! The canonical ordering transform.
//!
//! Every object's members are sorted by key in Unicode code-point order,
//! which for Rust strings is plain `str` ordering. Arrays keep their element
//! order and scalars pass through untouched.

use crate::types::JsonValue;

/// Returns the canonical form of a value.
///
/// Total over the value domain. If an object carries the same key more than
/// once, the last occurrence wins, so sorted keys are always strictly
/// increasing.
pub fn canonicalize(value: JsonValue) -> JsonValue {
    match value {
        JsonValue::Array(items) => JsonValue::Array(items.into_iter().map(canonicalize).collect()),
        JsonValue::Object(members) => JsonValue::Object(sort_members(members)),
        scalar => scalar,
    }
}

fn sort_members(mut members: Vec<(String, JsonValue)>) -> Vec<(String, JsonValue)> {
    // Stable, so equal keys stay in source order and the last one is kept below.
    members.sort_by(|a, b| a.0.cmp(&b.0));

    let mut sorted: Vec<(String, JsonValue)> = Vec::with_capacity(members.len());
    for (key, value) in members {
        let value = canonicalize(value);
        match sorted.last_mut() {
            Some(last) if last.0 == key => last.1 = value,
            _ => sorted.push((key, value)),
        }
    }
    sorted
}
