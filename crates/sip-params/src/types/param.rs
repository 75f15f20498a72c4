//! # Typed Parameters
//!
//! A [`Parameter`] is a registered parameter whose value has been decoded
//! according to its [`Grammar`]. The tag is fixed at construction; only the
//! value can change afterwards.
//!
//! Values are held in [`ParamValue`], a closed sum type over the grammars this
//! crate understands:
//!
//! - flags that are either present or absent (`lr`)
//! - token or quoted text (`tag=1928301774`, `realm="atlanta.com"`)
//! - unsigned integers (`expires=3600`)
//! - quality values (`q=0.7`)
//! - the `rport` flag, optionally carrying a port
//! - comma-separated option lists (`qop="auth,auth-int"`)
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_params::types::param::{Parameter, ParamValue, QValue};
//! use rvoip_sip_params::types::param_type::ParamType;
//!
//! let tag = Parameter::new(ParamType::Tag, ParamValue::data("1928301774")).unwrap();
//! assert_eq!(tag.to_string(), "tag=1928301774");
//!
//! let q = Parameter::new(ParamType::Q, ParamValue::QValue(QValue::new(500).unwrap())).unwrap();
//! assert_eq!(q.to_string(), "q=0.5");
//!
//! let lr = Parameter::new(ParamType::Lr, ParamValue::Exists).unwrap();
//! assert_eq!(lr.to_string(), "lr");
//!
//! // Quoted text is held unescaped and escaped again on output
//! let reason = Parameter::new(ParamType::Reason, ParamValue::quoted("say \"hi\"")).unwrap();
//! assert_eq!(reason.to_string(), r#"reason="say \"hi\"""#);
//!
//! // A value that does not fit the grammar is rejected
//! assert!(Parameter::new(ParamType::Ttl, ParamValue::data("abc")).is_err());
//! ```

use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::parser::parse_buffer::ParseBuffer;
use crate::parser::params::{read_value, skip_equals};
use crate::parser::quoted::escape_quoted;
use crate::parser::values::{delta_seconds, port, qvalue};
use crate::types::param_type::{Grammar, ParamType};

/// A quality value in thousandths, `0..=1000`.
///
/// Kept as an integer so that `0.5` and `0.500` are the same value and
/// encoding is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QValue(u16);

impl QValue {
    /// `q=1`, the default preference
    pub const ONE: QValue = QValue(1000);

    /// Builds a qvalue from thousandths. `None` above 1000.
    pub fn new(thousandths: u16) -> Option<Self> {
        (thousandths <= 1000).then_some(QValue(thousandths))
    }

    /// The value in thousandths.
    pub fn thousandths(&self) -> u16 {
        self.0
    }

    /// The value as a float in `0.0..=1.0`.
    pub fn as_f32(&self) -> f32 {
        f32::from(self.0) / 1000.0
    }
}

impl Default for QValue {
    fn default() -> Self {
        QValue::ONE
    }
}

impl fmt::Display for QValue {
    /// Shortest decimal form: `1`, `0`, `0.5`, `0.75`, `0.125`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1000 => f.write_str("1"),
            0 => f.write_str("0"),
            n => {
                let digits = format!("{:03}", n);
                write!(f, "0.{}", digits.trim_end_matches('0'))
            }
        }
    }
}

/// Decoded value of a typed parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamValue {
    /// Presence flag
    Exists,
    /// Token or quoted text. Quoted text is held without its escapes.
    Data {
        value: String,
        quoted: bool,
    },
    /// Unsigned integer
    UInt(u32),
    /// Quality value
    QValue(QValue),
    /// `rport` with an optional port
    Rport(Option<u16>),
    /// Comma-separated options
    List {
        items: Vec<String>,
        quoted: bool,
    },
}

impl ParamValue {
    /// Unquoted text value.
    pub fn data(value: impl Into<String>) -> Self {
        ParamValue::Data { value: value.into(), quoted: false }
    }

    /// Quoted text value. `value` is unescaped text; `"` and `\` are escaped
    /// when it is written.
    pub fn quoted(value: impl Into<String>) -> Self {
        ParamValue::Data { value: value.into(), quoted: true }
    }

    /// Option list, written quoted.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ParamValue::List {
            items: items.into_iter().map(Into::into).collect(),
            quoted: true,
        }
    }

    /// The text of a `Data` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Data { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Mutable text of a `Data` value.
    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            ParamValue::Data { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            ParamValue::UInt(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_qvalue(&self) -> Option<QValue> {
        match self {
            ParamValue::QValue(q) => Some(*q),
            _ => None,
        }
    }

    /// Port carried by `rport`, if any.
    pub fn as_port(&self) -> Option<u16> {
        match self {
            ParamValue::Rport(port) => *port,
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            ParamValue::List { items, .. } => Some(items),
            _ => None,
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, ParamValue::Exists | ParamValue::Rport(None))
    }

    /// Whether this value is a legal shape for `grammar`.
    pub fn fits(&self, grammar: Grammar) -> bool {
        matches!(
            (grammar, self),
            (Grammar::Exists, ParamValue::Exists)
                | (Grammar::Data, ParamValue::Data { .. })
                | (Grammar::QuotedData, ParamValue::Data { .. })
                | (Grammar::UInt, ParamValue::UInt(_))
                | (Grammar::QValue, ParamValue::QValue(_))
                | (Grammar::Rport, ParamValue::Rport(_))
                | (Grammar::List, ParamValue::List { .. })
        )
    }

    /// Default value for a freshly created parameter of `kind`.
    fn default_for(kind: ParamType) -> Self {
        match kind.grammar() {
            Grammar::Exists => ParamValue::Exists,
            Grammar::Data => ParamValue::data(""),
            Grammar::QuotedData => ParamValue::quoted(""),
            Grammar::UInt => ParamValue::UInt(0),
            Grammar::QValue => ParamValue::QValue(QValue::ONE),
            Grammar::Rport => ParamValue::Rport(None),
            Grammar::List => ParamValue::List { items: Vec::new(), quoted: true },
        }
    }
}

/// A registered parameter with its decoded value.
///
/// The tag is never [`ParamType::Unknown`]; deserialization goes through
/// [`Parameter::new`] and rejects it like any other ill-typed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ParameterRepr")]
pub struct Parameter {
    kind: ParamType,
    value: ParamValue,
}

#[derive(Deserialize)]
struct ParameterRepr {
    kind: ParamType,
    value: ParamValue,
}

impl TryFrom<ParameterRepr> for Parameter {
    type Error = Error;

    fn try_from(repr: ParameterRepr) -> Result<Self> {
        Parameter::new(repr.kind, repr.value)
    }
}

impl Parameter {
    /// Builds a parameter, checking that `value` fits the grammar of `kind`.
    ///
    /// # Errors
    ///
    /// [`Error::ParameterTypeMismatch`] when the value has the wrong shape or
    /// `kind` is [`ParamType::Unknown`].
    pub fn new(kind: ParamType, value: ParamValue) -> Result<Self> {
        let grammar = kind.grammar();
        if !kind.is_known() || !value.fits(grammar) {
            return Err(Error::mismatch(kind.name(), grammar.label()));
        }
        Ok(Parameter { kind, value })
    }

    /// A parameter of `kind` holding its grammar's default value.
    ///
    /// `QopOptions` and other lists default to a quoted empty list. Callers
    /// never pass [`ParamType::Unknown`].
    pub(crate) fn default_for(kind: ParamType) -> Self {
        Parameter {
            kind,
            value: ParamValue::default_for(kind),
        }
    }

    /// Tag of this parameter.
    pub fn kind(&self) -> ParamType {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut ParamValue {
        &mut self.value
    }

    pub fn into_value(self) -> ParamValue {
        self.value
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match &self.value {
            ParamValue::Exists | ParamValue::Rport(None) => f.write_str(name),
            ParamValue::Rport(Some(port)) => write!(f, "{}={}", name, port),
            ParamValue::Data { value, quoted } => {
                // An unterminated quote from the wire is written back verbatim
                let forced = self.kind.grammar() == Grammar::QuotedData && !value.starts_with('"');
                if *quoted || forced {
                    write!(f, "{}=\"{}\"", name, escape_quoted(value))
                } else {
                    write!(f, "{}={}", name, value)
                }
            }
            ParamValue::UInt(n) => write!(f, "{}={}", name, n),
            ParamValue::QValue(q) => write!(f, "{}={}", name, q),
            ParamValue::List { items, quoted } => {
                let joined = items.join(",");
                if *quoted {
                    write!(f, "{}=\"{}\"", name, escape_quoted(&joined))
                } else {
                    write!(f, "{}={}", name, joined)
                }
            }
        }
    }
}

// Decoders. Each is entered with the cursor right after the key.

fn malformed(kind: ParamType, text: &[u8]) -> Error {
    Error::ParseError(format!(
        "invalid {} value '{}'",
        kind.name(),
        String::from_utf8_lossy(text)
    ))
}

/// Flag parameters. A stray `=value` is consumed and dropped.
pub fn decode_exists(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if skip_equals(pb) {
        read_value(pb, terminators);
    }
    Ok(Parameter { kind, value: ParamValue::Exists })
}

/// Token or quoted text. Always-quoted grammars mark the value quoted even
/// when the wire text was a bare token, unless that text opens a quote it
/// never closes; such a value stays unquoted and is written back as it came.
pub fn decode_data(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(kind));
    }
    let raw = read_value(pb, terminators);
    let unterminated = !raw.quoted && raw.text.first() == Some(&b'"');
    let quoted = raw.quoted || (kind.grammar() == Grammar::QuotedData && !unterminated);
    Ok(Parameter {
        kind,
        value: ParamValue::Data { value: raw.to_value(), quoted },
    })
}

pub fn decode_uint(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(kind));
    }
    let raw = read_value(pb, terminators);
    let (_, n) = all_consuming(delta_seconds)(raw.text).map_err(|_| malformed(kind, raw.text))?;
    Ok(Parameter { kind, value: ParamValue::UInt(n) })
}

pub fn decode_qvalue(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(kind));
    }
    let raw = read_value(pb, terminators);
    let (_, q) = all_consuming(qvalue)(raw.text).map_err(|_| malformed(kind, raw.text))?;
    Ok(Parameter {
        kind,
        value: ParamValue::QValue(QValue(q)),
    })
}

/// `rport` or `rport=5060`.
pub fn decode_rport(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(kind));
    }
    let raw = read_value(pb, terminators);
    if raw.text.is_empty() {
        return Ok(Parameter::default_for(kind));
    }
    let (_, p) = all_consuming(port)(raw.text).map_err(|_| malformed(kind, raw.text))?;
    Ok(Parameter {
        kind,
        value: ParamValue::Rport(Some(p)),
    })
}

/// Comma-separated options. Items are trimmed; empty items are dropped.
pub fn decode_list(kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(kind));
    }
    let raw = read_value(pb, terminators);
    Ok(Parameter {
        kind,
        value: split_list(&raw.to_value(), raw.quoted),
    })
}

/// `qop`: a quoted value is the option set offered in a challenge, a bare
/// token is the option chosen in a credential.
pub fn decode_qop(_kind: ParamType, pb: &mut ParseBuffer<'_>, terminators: &[u8]) -> Result<Parameter> {
    if !skip_equals(pb) {
        return Ok(Parameter::default_for(ParamType::Qop));
    }
    let raw = read_value(pb, terminators);
    if raw.quoted {
        Ok(Parameter {
            kind: ParamType::QopOptions,
            value: split_list(&raw.to_value(), true),
        })
    } else {
        Ok(Parameter {
            kind: ParamType::Qop,
            value: ParamValue::data(raw.to_value()),
        })
    }
}

fn split_list(text: &str, quoted: bool) -> ParamValue {
    let items = text
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();
    ParamValue::List { items, quoted }
}
