//! Canonical JSON
//!
//! Turns any JSON document into a single deterministic text: object members
//! sorted by key, array order kept, values preserved, and no insignificant
//! whitespace. Documents that differ only in member order or formatting
//! produce byte-identical output, ready for hashing, signing or diffing.
//!
//! Compiles to both native and WASM (with the `wasm` feature).
//!
//! # Effect on `serde_json`
//!
//! Number literals and member order are read through `serde_json` with its
//! `arbitrary_precision` and `preserve_order` features enabled. Cargo unifies
//! features across a build, so every crate linking `serde_json` alongside
//! this one gets them too: `serde_json::Number` keeps literal text (so `1.0`
//! and `1.00` compare unequal, and `as_f64` parses on demand) and
//! `serde_json::Map` iterates in insertion order instead of sorted order.
//!
//! ```
//! let canonical = canonical_json::canonical_json(r#"{"b": 2, "a": 1}"#).unwrap();
//! assert_eq!(canonical, r#"{"a":1,"b":2}"#);
//! ```

pub mod canonicalization;
pub mod config;
pub mod engine;
pub mod error;
pub mod number;
pub mod parser;
pub mod serializer;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use canonicalization::canonicalize;
pub use config::CanonicalizerConfig;
pub use engine::Canonicalizer;
pub use error::{CanonicalError, Result};
pub use number::Number;
pub use types::JsonValue;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the canonical text of a JSON document using default limits.
pub fn canonical_json(input: &str) -> Result<String> {
    Canonicalizer::new().canonical_json(input)
}

/// Returns the canonical text of a value already parsed by `serde_json`.
pub fn canonicalize_value(value: &serde_json::Value) -> Result<String> {
    Canonicalizer::new().canonicalize_value(value)
}

/// Returns the canonical text of any serializable value.
pub fn to_canonical_string<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    Canonicalizer::new().to_canonical_string(value)
}

/// Returns true if `input` is already in canonical form.
pub fn is_canonical(input: &str) -> Result<bool> {
    Canonicalizer::new().is_canonical(input)
}

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::canonicalization::canonicalize;
    pub use crate::config::CanonicalizerConfig;
    pub use crate::engine::Canonicalizer;
    pub use crate::error::{CanonicalError, Result};
    pub use crate::number::Number;
    pub use crate::types::JsonValue;
}
