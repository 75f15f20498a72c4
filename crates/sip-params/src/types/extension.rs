use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ParseConfig;
use crate::parser::parse_buffer::ParseBuffer;
use crate::parser::params::{read_value, skip_equals};
use crate::parser::quoted::escape_quoted;

/// Bytes that force an extension value to be written as a quoted string.
const NEEDS_QUOTING: &[u8] = b" \t\r\n;?>\"";

/// A parameter whose name is not registered.
///
/// The name keeps the case it had on the wire unless
/// [`ParseConfig::normalize_extension_names`] is set. The value is opaque
/// text held without quoted-pair escapes; they are added back when the value
/// is written between quotes. An empty value is written as the bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExtensionParameter {
    name: String,
    value: String,
    quoted: bool,
}

impl ExtensionParameter {
    /// Creates an extension parameter with an unquoted value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        ExtensionParameter {
            name: name.into(),
            value: value.into(),
            quoted: false,
        }
    }

    /// Creates a flag-style extension parameter (`;msgr`).
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// Decodes the value following `key`.
    ///
    /// The cursor sits right after the key. When no `=` follows, the cursor is
    /// restored and the value is empty.
    pub fn decode(key: &[u8], pb: &mut ParseBuffer<'_>, terminators: &[u8], config: &ParseConfig) -> Self {
        let mut name = String::from_utf8_lossy(key).into_owned();
        if config.normalize_extension_names {
            name.make_ascii_lowercase();
        }

        if !skip_equals(pb) {
            return ExtensionParameter::flag(name);
        }
        let raw = read_value(pb, terminators);
        ExtensionParameter {
            name,
            value: raw.to_value(),
            quoted: raw.quoted,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut String {
        &mut self.value
    }

    /// Whether the value was quoted on the wire.
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// Replaces the value, forgetting any wire quoting.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.quoted = false;
    }

    /// Case-insensitive name comparison.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for ExtensionParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quoted {
            return write!(f, "{}=\"{}\"", self.name, escape_quoted(&self.value));
        }
        if self.value.is_empty() {
            return f.write_str(&self.name);
        }
        if self.value.bytes().any(|b| NEEDS_QUOTING.contains(&b)) {
            write!(f, "{}=\"{}\"", self.name, escape_quoted(&self.value))
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}
