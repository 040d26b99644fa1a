//! Canonicalizer configuration.

use crate::error::{CanonicalError, Result};
use serde::{Deserialize, Serialize};

/// Default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Deepest nesting the underlying parser accepts.
pub const MAX_DEPTH_CEILING: usize = 127;

/// Supported configuration document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detects format from content.
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('{') {
            ConfigFormat::Json
        } else {
            ConfigFormat::Yaml
        }
    }
}

/// Limits applied while reading input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanonicalizerConfig {
    /// Maximum nesting depth of arrays and objects.
    pub max_depth: usize,

    /// Maximum input size in bytes. Unbounded when unset.
    pub max_input_bytes: Option<usize>,
}

impl Default for CanonicalizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_input_bytes: None,
        }
    }
}

impl CanonicalizerConfig {
    /// Creates a configuration with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum input size.
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = Some(max_input_bytes);
        self
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: CanonicalizerConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CanonicalizerConfig = serde_json::from_str(json)
            .map_err(|e| CanonicalError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration, auto-detecting its format.
    pub fn from_str_detect(content: &str) -> Result<Self> {
        match ConfigFormat::detect(content) {
            ConfigFormat::Yaml => Self::from_yaml(content),
            ConfigFormat::Json => Self::from_json(content),
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(CanonicalError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }

        if self.max_depth > MAX_DEPTH_CEILING {
            return Err(CanonicalError::InvalidConfig(format!(
                "max_depth must not exceed {}",
                MAX_DEPTH_CEILING
            )));
        }

        if self.max_input_bytes == Some(0) {
            return Err(CanonicalError::InvalidConfig(
                "max_input_bytes must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CanonicalizerConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_input_bytes, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
max_depth: 16
max_input_bytes: 4096
"#;
        let config = CanonicalizerConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_depth, 16);
        assert_eq!(config.max_input_bytes, Some(4096));
    }

    #[test]
    fn test_from_json_partial() {
        let config = CanonicalizerConfig::from_json(r#"{"max_depth": 8}"#).unwrap();
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.max_input_bytes, None);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::detect(r#"{"max_depth": 8}"#), ConfigFormat::Json);
        assert_eq!(ConfigFormat::detect("max_depth: 8"), ConfigFormat::Yaml);

        let config = CanonicalizerConfig::from_str_detect("max_depth: 12").unwrap();
        assert_eq!(config.max_depth, 12);
    }

    #[test]
    fn test_validation() {
        assert!(CanonicalizerConfig::new().with_max_depth(0).validate().is_err());
        assert!(CanonicalizerConfig::new()
            .with_max_depth(MAX_DEPTH_CEILING + 1)
            .validate()
            .is_err());
        assert!(CanonicalizerConfig::new()
            .with_max_depth(MAX_DEPTH_CEILING)
            .validate()
            .is_ok());
        assert!(CanonicalizerConfig::new().with_max_input_bytes(0).validate().is_err());
        assert!(matches!(
            CanonicalizerConfig::from_yaml("max_depth: 500"),
            Err(CanonicalError::InvalidConfig(_))
        ));
    }
}
