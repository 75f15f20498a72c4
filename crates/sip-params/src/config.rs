//! Parser configuration
//!
//! Options that change how parameter lists are read. Every field has a
//! default, so a partial JSON document (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for parsing parameter lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Lowercase extension parameter names when they are parsed.
    /// Registered names are always matched case-insensitively.
    pub normalize_extension_names: bool,

    /// When true, a registered numeric parameter with a malformed value
    /// (`ttl=abc`) keeps its default value. When false it is stored as an
    /// extension parameter so the original text is re-encoded unchanged.
    pub lenient_numeric: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            normalize_extension_names: false,
            lenient_numeric: true,
        }
    }
}

impl ParseConfig {
    /// Load configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ParseError(format!("invalid parser config: {}", e)))
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::ParseError(e.to_string()))
    }
}
