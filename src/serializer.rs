//! Minimal-whitespace serialization.
//!
//! Writes values exactly in their stored order: `,` between members and
//! elements, `:` between key and value, nothing else. Strings escape only
//! what JSON requires; everything at or above U+0020 other than `"` and `\`
//! is written as-is, non-ASCII included.

use crate::error::{CanonicalError, Result};
use crate::types::JsonValue;
use std::io::Write;

/// Serializes a value to a string.
pub fn to_canonical_string(value: &JsonValue) -> Result<String> {
    let mut output = Vec::new();
    write_canonical(&mut output, value)?;
    String::from_utf8(output).map_err(|e| CanonicalError::Serialization(e.to_string()))
}

/// Writes a value to a writer.
pub fn write_canonical<W: Write>(writer: &mut W, value: &JsonValue) -> Result<()> {
    match value {
        JsonValue::Null => writer.write_all(b"null")?,
        JsonValue::Bool(true) => writer.write_all(b"true")?,
        JsonValue::Bool(false) => writer.write_all(b"false")?,
        JsonValue::Number(n) => write!(writer, "{}", n)?,
        JsonValue::String(s) => write_escaped_string(writer, s)?,
        JsonValue::Array(items) => {
            writer.write_all(b"[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b",")?;
                }
                write_canonical(writer, item)?;
            }
            writer.write_all(b"]")?;
        }
        JsonValue::Object(members) => {
            writer.write_all(b"{")?;
            for (i, (key, item)) in members.iter().enumerate() {
                if i > 0 {
                    writer.write_all(b",")?;
                }
                write_escaped_string(writer, key)?;
                writer.write_all(b":")?;
                write_canonical(writer, item)?;
            }
            writer.write_all(b"}")?;
        }
    }
    Ok(())
}

/// Writes a JSON-escaped string.
fn write_escaped_string<W: Write>(writer: &mut W, s: &str) -> Result<()> {
    writer.write_all(b"\"")?;

    // Copy unescaped runs in one go.
    let mut start = 0;
    for (i, c) in s.char_indices() {
        let escape: &[u8] = match c {
            '"' => b"\\\"",
            '\\' => b"\\\\",
            '\u{08}' => b"\\b",
            '\u{0C}' => b"\\f",
            '\n' => b"\\n",
            '\r' => b"\\r",
            '\t' => b"\\t",
            c if c < '\u{20}' => {
                writer.write_all(s[start..i].as_bytes())?;
                write!(writer, "\\u{:04x}", c as u32)?;
                start = i + 1;
                continue;
            }
            _ => continue,
        };
        writer.write_all(s[start..i].as_bytes())?;
        writer.write_all(escape)?;
        start = i + 1;
    }
    writer.write_all(s[start..].as_bytes())?;

    writer.write_all(b"\"")?;
    Ok(())
}
