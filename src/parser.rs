//! Input parsing.
//!
//! Syntax is handled by `serde_json`, built with `arbitrary_precision` so
//! number literals arrive as their source text and `preserve_order` so the
//! parsed tree keeps source member order. This module converts its output
//! into [`JsonValue`] while enforcing the configured limits.

use crate::config::CanonicalizerConfig;
use crate::error::{CanonicalError, Result};
use crate::number::Number;
use crate::types::JsonValue;
use serde_json::Value;

/// Parses JSON text into a value tree.
///
/// Duplicate object keys resolve to the value of their last occurrence.
pub fn parse(input: &str, config: &CanonicalizerConfig) -> Result<JsonValue> {
    if let Some(limit) = config.max_input_bytes {
        if input.len() > limit {
            return Err(CanonicalError::InputTooLarge {
                size: input.len(),
                limit,
            });
        }
    }

    let value: Value =
        serde_json::from_str(input).map_err(|e| map_syntax_error(e, config.max_depth))?;
    from_serde_value(&value, config.max_depth)
}

/// Converts a value parsed by `serde_json` into a value tree, rejecting
/// nesting deeper than `max_depth`.
pub fn from_serde_value(value: &Value, max_depth: usize) -> Result<JsonValue> {
    convert(value, 0, max_depth)
}

fn convert(value: &Value, depth: usize, max_depth: usize) -> Result<JsonValue> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => Number::from_literal(&n.to_string()).map(JsonValue::Number),
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Array(items) => {
            let depth = descend(depth, max_depth)?;
            items
                .iter()
                .map(|item| convert(item, depth, max_depth))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Array)
        }
        Value::Object(map) => {
            let depth = descend(depth, max_depth)?;
            map.iter()
                .map(|(key, item)| Ok((key.clone(), convert(item, depth, max_depth)?)))
                .collect::<Result<Vec<_>>>()
                .map(JsonValue::Object)
        }
    }
}

fn descend(depth: usize, max_depth: usize) -> Result<usize> {
    let depth = depth + 1;
    if depth > max_depth {
        return Err(CanonicalError::DepthExceeded { limit: max_depth });
    }
    Ok(depth)
}

/// serde_json guards its own recursion; report that as a depth failure.
fn map_syntax_error(err: serde_json::Error, max_depth: usize) -> CanonicalError {
    if err.to_string().starts_with("recursion limit exceeded") {
        CanonicalError::DepthExceeded { limit: max_depth }
    } else {
        err.into()
    }
}
