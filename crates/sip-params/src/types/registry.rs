// Name -> (tag, decoder) dispatch for registered parameters.

use crate::error::Result;
use crate::parser::parse_buffer::ParseBuffer;
use crate::types::param::{self, Parameter};
use crate::types::param_type::{Grammar, ParamType};

/// Decodes the value of a registered parameter.
///
/// Called with the cursor right after the key. Must leave the cursor after the
/// consumed value, in front of the next terminator. An `Err` means the value
/// was consumed but did not match the grammar.
pub type Decoder = fn(ParamType, &mut ParseBuffer<'_>, &[u8]) -> Result<Parameter>;

/// Resolves a wire name to its tag and decoder. `None` for extension names.
pub fn lookup(name: &[u8]) -> Option<(ParamType, Decoder)> {
    match ParamType::from_name(name) {
        ParamType::Unknown => None,
        kind => Some((kind, decoder(kind))),
    }
}

/// Decoder used for `kind`.
pub fn decoder(kind: ParamType) -> Decoder {
    if matches!(kind, ParamType::Qop | ParamType::QopOptions) {
        return param::decode_qop;
    }
    match kind.grammar() {
        Grammar::Exists => param::decode_exists,
        Grammar::Data | Grammar::QuotedData => param::decode_data,
        Grammar::UInt => param::decode_uint,
        Grammar::QValue => param::decode_qvalue,
        Grammar::Rport => param::decode_rport,
        Grammar::List => param::decode_list,
    }
}
