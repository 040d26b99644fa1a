//! WASM bindings for canonicalization.

#![cfg(feature = "wasm")]

use crate::engine::Canonicalizer;
use wasm_bindgen::prelude::*;

/// WASM-compatible canonicalizer wrapper.
#[wasm_bindgen]
pub struct WasmCanonicalizer {
    engine: Canonicalizer,
}

#[wasm_bindgen]
impl WasmCanonicalizer {
    /// Creates a canonicalizer with default limits.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: Canonicalizer::new(),
        }
    }

    /// Creates a canonicalizer from a YAML or JSON configuration string.
    #[wasm_bindgen]
    pub fn with_config(config: &str) -> Result<WasmCanonicalizer, JsValue> {
        let config = crate::config::CanonicalizerConfig::from_str_detect(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let engine = Canonicalizer::with_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { engine })
    }

    /// Canonicalizes a JSON string.
    #[wasm_bindgen]
    pub fn canonicalize(&self, json: &str) -> Result<String, JsValue> {
        self.engine
            .canonical_json(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns true if the JSON string is already canonical.
    #[wasm_bindgen]
    pub fn is_canonical(&self, json: &str) -> Result<bool, JsValue> {
        self.engine
            .is_canonical(json)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Returns the configured maximum nesting depth.
    #[wasm_bindgen]
    pub fn max_depth(&self) -> usize {
        self.engine.config().max_depth
    }
}

impl Default for WasmCanonicalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonicalizes a JSON string with default limits.
#[wasm_bindgen]
pub fn canonicalize_json(json: &str) -> Result<String, JsValue> {
    crate::canonical_json(json).map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))
}

/// Returns true if the JSON string is already canonical.
#[wasm_bindgen]
pub fn is_canonical_json(json: &str) -> Result<bool, JsValue> {
    crate::is_canonical(json).map_err(|e| JsValue::from_str(&format!("Invalid JSON: {}", e)))
}

/// Logs a message to the console (for debugging).
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Returns the version of the crate.
#[wasm_bindgen]
pub fn version() -> String {
    crate::VERSION.to_string()
}
