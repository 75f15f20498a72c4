//! # Parser Categories
//!
//! A [`ParserCategory`] wraps one occurrence of a structured header field: the
//! raw bytes as they arrived, the primary value parsed from them, and the
//! parameters that follow it.
//!
//! Parsing is deferred. A category is created around its raw bytes and stays
//! unparsed until something asks for its value or its parameters; the first
//! such access parses the bytes exactly once. Categories that are only ever
//! forwarded are therefore never parsed at all.
//!
//! ## Accessors
//!
//! Typed parameters come in two flavours:
//!
//! - [`param`](ParserCategory::param) is a strict read. A missing parameter is
//!   an [`Error::MissingParameter`].
//! - [`param_mut`](ParserCategory::param_mut) creates the parameter with its
//!   grammar's default when it is missing, and never fails.
//!
//! Extension parameters have the same pair,
//! [`extension`](ParserCategory::extension) and
//! [`extension_mut`](ParserCategory::extension_mut).
//!
//! ## Examples
//!
//! ```rust
//! use rvoip_sip_params::prelude::*;
//!
//! let mut via: ParserCategory = ParserCategory::new(
//!     ";branch=z9hG4bK776asdhds;rport;received=192.0.2.1",
//!     HeaderName::Via,
//! );
//! assert!(!via.is_parsed());
//!
//! assert_eq!(via.param_str(ParamType::Branch).unwrap(), "z9hG4bK776asdhds");
//! assert!(via.is_parsed());
//!
//! *via.param_mut(ParamType::Rport) = ParamValue::Rport(Some(5060));
//! assert_eq!(via.to_string(), ";branch=z9hG4bK776asdhds;rport=5060;received=192.0.2.1");
//!
//! let err = via.param(ParamType::Maddr).unwrap_err();
//! assert_eq!(err.to_string(), "Missing parameter maddr (Via)");
//! ```

use bytes::Bytes;
use std::cell::OnceCell;
use std::fmt;
use tracing::{debug, info, trace};

use crate::config::ParseConfig;
use crate::error::{Error, Result};
use crate::parser::parse_buffer::ParseBuffer;
use crate::parser::params::parse_parameters;
use crate::types::category_value::CategoryValue;
use crate::types::commutative_hash::CommutativeHash;
use crate::types::headers::HeaderName;
use crate::types::param::{ParamValue, Parameter, QValue};
use crate::types::param_store::ParameterStore;
use crate::types::param_type::{ParamType, ParamTypeSet};

/// Error context used when a category has no header, i.e. it came from the
/// first line of a message.
pub const START_LINE_CONTEXT: &str = "Request/Status line";

#[derive(Debug, Clone, Default)]
struct Parsed<V> {
    value: V,
    params: ParameterStore,
}

/// Observable state of a category's parse gate.
#[derive(Debug)]
pub enum ParseState<'a, V> {
    /// Nothing has been parsed yet. `raw` is `None` after [`ParserCategory::clear`].
    Unparsed { raw: Option<&'a Bytes> },
    /// The raw bytes have been parsed.
    Parsed {
        value: &'a V,
        params: &'a ParameterStore,
    },
}

/// One structured header occurrence with lazily parsed parameters.
///
/// `V` is the primary value in front of the parameter list. The default `()`
/// is for categories that carry parameters only.
///
/// The type is `Send` but not `Sync`: the parse gate may initialise itself
/// through a shared reference, so an instance must not be shared between
/// threads.
///
/// Cloning an unparsed category shares its raw bytes and leaves the clone
/// unparsed. Cloning a parsed category copies every parameter.
#[derive(Debug, Clone)]
pub struct ParserCategory<V = ()> {
    raw: Option<Bytes>,
    parsed: OnceCell<Parsed<V>>,
    header: Option<HeaderName>,
    config: ParseConfig,
}

impl<V: CategoryValue> ParserCategory<V> {
    /// Wraps the raw value of `header`. Nothing is parsed yet.
    pub fn new(raw: impl Into<Bytes>, header: HeaderName) -> Self {
        ParserCategory {
            raw: Some(raw.into()),
            parsed: OnceCell::new(),
            header: Some(header),
            config: ParseConfig::default(),
        }
    }

    /// Wraps parameters that trail a request or status line.
    pub fn start_line(raw: impl Into<Bytes>) -> Self {
        ParserCategory {
            raw: Some(raw.into()),
            parsed: OnceCell::new(),
            header: None,
            config: ParseConfig::default(),
        }
    }

    /// A category built from scratch: already parsed, default value, no
    /// parameters.
    pub fn empty(header: Option<HeaderName>) -> Self {
        ParserCategory {
            raw: None,
            parsed: OnceCell::from(Parsed::default()),
            header,
            config: ParseConfig::default(),
        }
    }

    /// Uses `config` for the deferred parse. Has no effect once parsed.
    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn header(&self) -> Option<&HeaderName> {
        self.header.as_ref()
    }

    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Raw bytes this category was created from, if it still holds them.
    pub fn raw(&self) -> Option<&Bytes> {
        self.raw.as_ref()
    }

    /// Where this category lives, for error messages: the header name or
    /// `"Request/Status line"`.
    pub fn error_context(&self) -> &str {
        match &self.header {
            Some(header) => header.as_str(),
            None => START_LINE_CONTEXT,
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    pub fn state(&self) -> ParseState<'_, V> {
        match self.parsed.get() {
            Some(parsed) => ParseState::Parsed {
                value: &parsed.value,
                params: &parsed.params,
            },
            None => ParseState::Unparsed { raw: self.raw.as_ref() },
        }
    }

    /// Parses the raw bytes unless that already happened.
    pub fn ensure_parsed(&self) {
        self.parsed();
    }

    /// Drops the raw bytes and every parsed parameter. The category is left
    /// unparsed with nothing to parse; the next access yields a default value
    /// and no parameters.
    pub fn clear(&mut self) {
        self.raw = None;
        self.parsed = OnceCell::new();
    }

    fn parsed(&self) -> &Parsed<V> {
        self.parsed.get_or_init(|| self.parse_raw())
    }

    fn parsed_mut(&mut self) -> &mut Parsed<V> {
        self.ensure_parsed();
        match self.parsed.get_mut() {
            Some(parsed) => parsed,
            None => unreachable!("parse gate is initialised by ensure_parsed"),
        }
    }

    fn parse_raw(&self) -> Parsed<V> {
        let mut parsed = Parsed::<V>::default();
        if let Some(raw) = &self.raw {
            let mut pb = ParseBuffer::new(raw);
            parsed.value = V::parse(&mut pb);
            parse_parameters(&mut pb, &mut parsed.params, &self.config);
            trace!(
                context = self.error_context(),
                typed = parsed.params.typed().len(),
                extensions = parsed.params.extensions().len(),
                "parsed category"
            );
        }
        parsed
    }

    fn missing(&self, name: &str) -> Error {
        let context = self.error_context();
        info!(parameter = name, context, "missing parameter");
        debug!(category = %self, "category without {}", name);
        Error::missing(name, context)
    }

    pub fn value(&self) -> &V {
        &self.parsed().value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.parsed_mut().value
    }

    /// All parameters, in insertion order.
    pub fn parameters(&self) -> &ParameterStore {
        &self.parsed().params
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterStore {
        &mut self.parsed_mut().params
    }

    pub fn exists(&self, kind: ParamType) -> bool {
        self.parameters().get(kind).is_some()
    }

    /// Value of the first `kind` parameter.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] when there is none.
    pub fn param(&self, kind: ParamType) -> Result<&ParamValue> {
        match self.parameters().get(kind) {
            Some(param) => Ok(param.value()),
            None => Err(self.missing(kind.name())),
        }
    }

    /// Value of the first `kind` parameter, created with the grammar's default
    /// when missing.
    ///
    /// [`ParamType::Unknown`] is never stored: writes through the returned
    /// value are discarded.
    pub fn param_mut(&mut self, kind: ParamType) -> &mut ParamValue {
        self.parameters_mut().get_or_insert(kind)
    }

    /// Text of a token or quoted-string parameter.
    pub fn param_str(&self, kind: ParamType) -> Result<&str> {
        self.param(kind)?
            .as_str()
            .ok_or_else(|| Error::mismatch(kind.name(), "data"))
    }

    pub fn param_u32(&self, kind: ParamType) -> Result<u32> {
        self.param(kind)?
            .as_u32()
            .ok_or_else(|| Error::mismatch(kind.name(), "integer"))
    }

    pub fn param_qvalue(&self, kind: ParamType) -> Result<QValue> {
        self.param(kind)?
            .as_qvalue()
            .ok_or_else(|| Error::mismatch(kind.name(), "qvalue"))
    }

    /// Whether an extension parameter named `name` exists, ignoring case.
    pub fn exists_extension(&self, name: &str) -> bool {
        self.parameters().get_extension(name).is_some()
    }

    /// Value of the extension parameter named `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`] when there is none.
    pub fn extension(&self, name: &str) -> Result<&str> {
        match self.parameters().get_extension(name) {
            Some(param) => Ok(param.value()),
            None => Err(self.missing(name)),
        }
    }

    /// Value of the extension parameter named `name`, created empty (with
    /// `name` as given) when missing.
    pub fn extension_mut(&mut self, name: &str) -> &mut String {
        self.parameters_mut().extension_or_insert(name)
    }

    /// Removes every `kind` parameter.
    pub fn remove(&mut self, kind: ParamType) {
        self.parameters_mut().remove(kind);
    }

    /// Removes every extension parameter named exactly `name`. Case-sensitive,
    /// unlike the extension lookups.
    pub fn remove_extension(&mut self, name: &str) {
        self.parameters_mut().remove_extension(name);
    }

    /// Replaces the first parameter with the same tag as `param`, or appends.
    /// A [`ParamType::Unknown`] parameter is ignored.
    pub fn set_param(&mut self, param: Parameter) {
        self.parameters_mut().set(param);
    }

    /// Removes every typed parameter whose tag is not in `keep`. Extension
    /// parameters are kept.
    pub fn remove_params_except(&mut self, keep: &ParamTypeSet) {
        self.parameters_mut().retain_kinds(keep);
    }

    /// Writes the parameters only, each prefixed with `;`.
    pub fn encode_params<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.parameters().encode(out)
    }

    /// Writes the primary value followed by the parameters.
    pub fn encode<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let parsed = self.parsed();
        parsed.value.encode(out)?;
        parsed.params.encode(out)
    }

    /// Order-independent fingerprint of the parameters. See
    /// [`ParameterStore::commutative_hash`].
    pub fn commutative_param_hash(&self) -> CommutativeHash {
        self.parameters().commutative_hash()
    }
}

impl<V: CategoryValue> fmt::Display for ParserCategory<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode(f)
    }
}
