//! The canonicalization pipeline: parse, order, serialize.

use crate::canonicalization::canonicalize;
use crate::config::CanonicalizerConfig;
use crate::error::{CanonicalError, Result};
use crate::parser;
use crate::serializer::to_canonical_string;
use crate::types::JsonValue;
use serde::Serialize;
use tracing::{debug, warn};

/// Canonicalizes JSON documents under a fixed configuration.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer {
    config: CanonicalizerConfig,
}

impl Canonicalizer {
    /// Creates a canonicalizer with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a canonicalizer from a configuration, validating it first.
    pub fn with_config(config: CanonicalizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Creates a canonicalizer from a YAML configuration document.
    pub fn from_config_yaml(yaml: &str) -> Result<Self> {
        Self::with_config(CanonicalizerConfig::from_yaml(yaml)?)
    }

    /// Creates a canonicalizer from a JSON configuration document.
    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::with_config(CanonicalizerConfig::from_json(json)?)
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &CanonicalizerConfig {
        &self.config
    }

    /// Parses `input` and returns its canonical text.
    pub fn canonical_json(&self, input: &str) -> Result<String> {
        let value = parser::parse(input, &self.config).map_err(|err| {
            warn!(error = %err, input_len = input.len(), "rejected JSON input");
            err
        })?;
        let output = self.finish(value)?;
        debug!(input_len = input.len(), output_len = output.len(), "canonicalized JSON");
        Ok(output)
    }

    /// Returns the canonical text of a value already parsed by `serde_json`.
    pub fn canonicalize_value(&self, value: &serde_json::Value) -> Result<String> {
        let value = parser::from_serde_value(value, self.config.max_depth)?;
        let output = self.finish(value)?;
        debug!(output_len = output.len(), "canonicalized JSON value");
        Ok(output)
    }

    /// Returns the canonical text of any serializable value.
    pub fn to_canonical_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let value = serde_json::to_value(value)
            .map_err(|e| CanonicalError::Serialization(e.to_string()))?;
        self.canonicalize_value(&value)
    }

    /// Returns true if `input` is already byte-identical to its canonical form.
    pub fn is_canonical(&self, input: &str) -> Result<bool> {
        Ok(self.canonical_json(input)? == input)
    }

    fn finish(&self, value: JsonValue) -> Result<String> {
        to_canonical_string(&canonicalize(value))
    }
}
