//! SIP header parameter engine for rvoip
//!
//! Every structured SIP header value ends in a list of `;key=value` or bare
//! `;flag` parameters. This crate parses those lists on demand, stores
//! registered parameters with typed values and everything else as opaque
//! extension parameters, and writes them back in wire form.
//!
//! The main entry point is [`ParserCategory`], which wraps the raw bytes of a
//! single header occurrence and parses them the first time they are needed.
//!
//! ```rust
//! use rvoip_sip_params::prelude::*;
//!
//! let contact: ParserCategory = ParserCategory::new(
//!     ";expires=3600;q=0.7;+sip.instance=\"<urn:uuid:00000000-0000-1000-8000-000A95A0E128>\"",
//!     HeaderName::Contact,
//! );
//! assert_eq!(contact.param_u32(ParamType::Expires).unwrap(), 3600);
//! assert_eq!(contact.param_qvalue(ParamType::Q).unwrap().to_string(), "0.7");
//! ```

pub mod config;
pub mod error;
pub mod parser;
pub mod types;

pub use config::ParseConfig;
pub use error::{Error, Result};
pub use types::{
    CategoryValue,
    CommutativeHash,
    ExtensionParameter,
    HeaderName,
    MediaType,
    ParamType,
    ParamTypeSet,
    ParamValue,
    Parameter,
    ParameterStore,
    ParseState,
    ParserCategory,
    QValue,
    Token,
};

/// Re-export of common types and functions
pub mod prelude {
    pub use crate::config::ParseConfig;
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        CategoryValue, CommutativeHash, ExtensionParameter, Grammar, HeaderName, MediaType,
        ParamType, ParamTypeSet, ParamValue, Parameter, ParameterStore, ParseState,
        ParserCategory, QValue, Token,
    };
}
