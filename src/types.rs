//! The JSON value model.

use crate::number::Number;

/// A parsed JSON value.
///
/// Objects are association lists rather than maps: their member order is
/// whatever the producer left behind (source order after parsing, sorted
/// order after canonicalization), never an accident of hashing.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(Vec<(String, JsonValue)>),
}

impl JsonValue {
    /// Returns the nesting depth: 0 for scalars, plus one per container.
    pub fn depth(&self) -> usize {
        match self {
            JsonValue::Array(items) => 1 + items.iter().map(JsonValue::depth).max().unwrap_or(0),
            JsonValue::Object(members) => {
                1 + members.iter().map(|(_, v)| v.depth()).max().unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// Returns true if every object in the tree has its keys in strictly
    /// increasing code-point order.
    pub fn is_canonical(&self) -> bool {
        match self {
            JsonValue::Array(items) => items.iter().all(JsonValue::is_canonical),
            JsonValue::Object(members) => {
                members.windows(2).all(|pair| pair[0].0 < pair[1].0)
                    && members.iter().all(|(_, v)| v.is_canonical())
            }
            _ => true,
        }
    }

    /// Looks up an object member by key.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        match self {
            JsonValue::Object(members) => members.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the keys of an object in stored order.
    pub fn keys(&self) -> Vec<&str> {
        match self {
            JsonValue::Object(members) => members.iter().map(|(k, _)| k.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(value.into())
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}
