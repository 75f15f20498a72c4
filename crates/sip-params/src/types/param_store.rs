//! # Parameter Store
//!
//! Owns the parameters of one header occurrence in two ordered sequences:
//! typed parameters, whose names have a registered grammar, and extension
//! parameters, which are kept as opaque text.
//!
//! Insertion order is preserved in both sequences and is the order used when
//! encoding. The parser appends duplicates when the wire repeats a key;
//! [`ParameterStore::set`] and [`ParameterStore::remove`] are the operations
//! that collapse them.
//!
//! ```rust
//! use rvoip_sip_params::types::param::{Parameter, ParamValue};
//! use rvoip_sip_params::types::param_store::ParameterStore;
//! use rvoip_sip_params::types::param_type::ParamType;
//! use rvoip_sip_params::types::extension::ExtensionParameter;
//!
//! let mut store = ParameterStore::new();
//! store.push_typed(Parameter::new(ParamType::Tag, ParamValue::data("abc")).unwrap());
//! store.push_extension(ExtensionParameter::new("x-foo", "bar"));
//!
//! let mut wire = String::new();
//! store.encode(&mut wire).unwrap();
//! assert_eq!(wire, ";tag=abc;x-foo=bar");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::types::commutative_hash::CommutativeHash;
use crate::types::extension::ExtensionParameter;
use crate::types::param::{ParamValue, Parameter};
use crate::types::param_type::{ParamType, ParamTypeSet};

/// Extension name that triggers a space after the first `;`. Some
/// messaging clients reject the parameters without it.
const MSGR: &str = "msgr";

/// Typed and extension parameters of a single header occurrence.
///
/// [`ParamType::Unknown`] is never stored. Inserting it is a no-op, and
/// [`get_or_insert`](Self::get_or_insert) hands out a detached value that no
/// encoding or lookup ever sees.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterStore {
    typed: Vec<Parameter>,
    extensions: Vec<ExtensionParameter>,
    #[serde(skip)]
    detached: Option<ParamValue>,
}

impl PartialEq for ParameterStore {
    fn eq(&self, other: &Self) -> bool {
        self.typed == other.typed && self.extensions == other.extensions
    }
}

impl Eq for ParameterStore {}

impl ParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed parameters in insertion order.
    pub fn typed(&self) -> &[Parameter] {
        &self.typed
    }

    /// Extension parameters in insertion order.
    pub fn extensions(&self) -> &[ExtensionParameter] {
        &self.extensions
    }

    pub fn is_empty(&self) -> bool {
        self.typed.is_empty() && self.extensions.is_empty()
    }

    /// Total number of parameters, typed and extension.
    pub fn len(&self) -> usize {
        self.typed.len() + self.extensions.len()
    }

    /// Number of typed parameters with tag `kind`.
    pub fn count(&self, kind: ParamType) -> usize {
        self.typed.iter().filter(|p| p.kind() == kind).count()
    }

    /// First typed parameter with tag `kind`.
    pub fn get(&self, kind: ParamType) -> Option<&Parameter> {
        self.typed.iter().find(|p| p.kind() == kind)
    }

    pub fn get_mut(&mut self, kind: ParamType) -> Option<&mut Parameter> {
        self.typed.iter_mut().find(|p| p.kind() == kind)
    }

    /// Value of the first parameter with tag `kind`, appending the grammar
    /// default when there is none.
    ///
    /// For [`ParamType::Unknown`] nothing is appended and the returned value
    /// is detached from the store.
    pub fn get_or_insert(&mut self, kind: ParamType) -> &mut ParamValue {
        if !kind.is_known() {
            debug!("ignoring write to ParamType::Unknown");
            return self.detached.insert(ParamValue::Exists);
        }
        let index = match self.typed.iter().position(|p| p.kind() == kind) {
            Some(index) => index,
            None => {
                self.typed.push(Parameter::default_for(kind));
                self.typed.len() - 1
            }
        };
        self.typed[index].value_mut()
    }

    /// Appends `param`. A parameter tagged [`ParamType::Unknown`] is dropped.
    pub fn push_typed(&mut self, param: Parameter) {
        if !param.kind().is_known() {
            debug!("ignoring ParamType::Unknown parameter");
            return;
        }
        self.typed.push(param);
    }

    pub fn push_extension(&mut self, param: ExtensionParameter) {
        self.extensions.push(param);
    }

    /// First extension parameter whose name matches, ignoring ASCII case.
    pub fn get_extension(&self, name: &str) -> Option<&ExtensionParameter> {
        self.extensions.iter().find(|p| p.matches(name))
    }

    pub fn get_extension_mut(&mut self, name: &str) -> Option<&mut ExtensionParameter> {
        self.extensions.iter_mut().find(|p| p.matches(name))
    }

    /// Value of the first matching extension parameter, appending an empty
    /// one named `name` when there is none.
    pub fn extension_or_insert(&mut self, name: &str) -> &mut String {
        let index = match self.extensions.iter().position(|p| p.matches(name)) {
            Some(index) => index,
            None => {
                self.extensions.push(ExtensionParameter::flag(name));
                self.extensions.len() - 1
            }
        };
        self.extensions[index].value_mut()
    }

    /// Removes every typed parameter with tag `kind`.
    pub fn remove(&mut self, kind: ParamType) {
        self.typed.retain(|p| p.kind() != kind);
    }

    /// Removes every extension parameter named exactly `name`.
    ///
    /// Unlike [`get_extension`](Self::get_extension) the comparison is
    /// case-sensitive: `remove_extension("x-foo")` leaves `X-Foo` in place.
    pub fn remove_extension(&mut self, name: &str) {
        self.extensions.retain(|p| p.name() != name);
    }

    /// Drops the first typed parameter sharing `param`'s tag, if any, and
    /// appends `param`. A parameter tagged [`ParamType::Unknown`] is dropped.
    pub fn set(&mut self, param: Parameter) {
        if !param.kind().is_known() {
            debug!("ignoring ParamType::Unknown parameter");
            return;
        }
        if let Some(index) = self.typed.iter().position(|p| p.kind() == param.kind()) {
            self.typed.remove(index);
        }
        self.typed.push(param);
    }

    /// Keeps only typed parameters whose tag is in `keep`. Extension
    /// parameters are untouched.
    pub fn retain_kinds(&mut self, keep: &ParamTypeSet) {
        self.typed.retain(|p| keep.contains(&p.kind()));
    }

    pub fn clear(&mut self) {
        self.typed.clear();
        self.extensions.clear();
    }

    /// Writes every parameter as `;name[=value]`, typed parameters first.
    ///
    /// When an extension parameter named `msgr` is present, a single space
    /// follows the `;` of the first typed parameter.
    pub fn encode<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        let msgr = self.get_extension(MSGR).is_some();
        for (i, param) in self.typed.iter().enumerate() {
            out.write_char(';')?;
            if i == 0 && msgr {
                out.write_char(' ')?;
            }
            write!(out, "{}", param)?;
        }
        for param in &self.extensions {
            write!(out, ";{}", param)?;
        }
        Ok(())
    }

    /// Order-independent fingerprint of the parameter set.
    ///
    /// `lr` is left out. Typed parameters contribute their standalone
    /// encoding, extension parameters their name followed by their value.
    pub fn commutative_hash(&self) -> CommutativeHash {
        let mut hash = CommutativeHash::new();
        let mut scratch = String::new();
        for param in self.typed.iter().filter(|p| p.kind() != ParamType::Lr) {
            scratch.clear();
            // Writing into a String cannot fail
            let _ = fmt::write(&mut scratch, format_args!("{}", param));
            hash.accumulate(scratch.as_bytes());
        }
        for param in &self.extensions {
            scratch.clear();
            scratch.push_str(param.name());
            scratch.push_str(param.value());
            hash.accumulate(scratch.as_bytes());
        }
        hash
    }
}

impl fmt::Display for ParameterStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode(f)
    }
}
