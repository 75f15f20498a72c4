// Parameter list parser
//
// parameter-list = *( ";" parameter )
// parameter      = key [ "=" value ]
// value          = token / quoted-string

use tracing::{debug, trace};

use super::parse_buffer::ParseBuffer;
use super::quoted::{quoted_string, unescape_quoted};
use crate::config::ParseConfig;
use crate::types::extension::ExtensionParameter;
use crate::types::param::Parameter;
use crate::types::param_store::ParameterStore;
use crate::types::registry;

/// Bytes that end a parameter key.
pub const KEY_TERMINATORS: &[u8] = b" \t\r\n;=?>";

/// Bytes that end an unquoted parameter value. `=` is absent so that values
/// such as `a=b` survive intact.
pub const VALUE_TERMINATORS: &[u8] = b" \t\r\n;?>";

/// Parameter separator.
pub const SEMI: u8 = b';';

/// Value text as it appeared on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawValue<'a> {
    /// Unquoted text, or the content between the quotes with escapes kept
    pub text: &'a [u8],
    pub quoted: bool,
}

impl RawValue<'_> {
    /// The value as stored: quoted text loses its quoted-pair escapes.
    ///
    /// The parse loop drops parameters that are not valid UTF-8, so the lossy
    /// conversion never alters a value that is kept.
    pub(crate) fn to_value(&self) -> String {
        let text = String::from_utf8_lossy(self.text);
        if self.quoted {
            unescape_quoted(&text)
        } else {
            text.into_owned()
        }
    }
}

/// Consumes `SWS "=" SWS` after a key. Leaves the cursor where it was and
/// returns false when no `=` follows.
pub(crate) fn skip_equals(pb: &mut ParseBuffer<'_>) -> bool {
    let start = pb.position();
    pb.skip_whitespace();
    if pb.peek() == Some(b'=') {
        pb.skip_char();
        pb.skip_whitespace();
        true
    } else {
        pb.reset(start);
        false
    }
}

/// Reads a value at the cursor: a quoted string when one starts here and is
/// terminated, otherwise everything up to one of `terminators`.
///
/// An unterminated quote is read as plain text so nothing is lost on
/// re-encoding.
pub(crate) fn read_value<'a>(pb: &mut ParseBuffer<'a>, terminators: &[u8]) -> RawValue<'a> {
    if pb.peek() == Some(b'"') {
        if let Ok((rest, text)) = quoted_string(pb.remaining()) {
            pb.sync_to(rest);
            return RawValue { text, quoted: true };
        }
        trace!(position = pb.position(), "unterminated quoted value, reading as token");
    }
    let start = pb.position();
    pb.skip_to_one_of(terminators);
    RawValue {
        text: pb.data_from(start),
        quoted: false,
    }
}

/// Parses a parameter list into `store`.
///
/// The cursor must sit on the first byte after the primary value. Each
/// iteration saves the position, skips whitespace and expects `;`. When the
/// separator is missing the saved position is restored, so trailing
/// whitespace and line terminators stay unconsumed for the caller.
///
/// Nothing here fails. An empty key (`;;`, `;=x`) yields no parameter. A
/// malformed numeric value is either defaulted or kept as an extension
/// parameter, depending on [`ParseConfig::lenient_numeric`]. A parameter whose
/// key or value is not valid UTF-8 is consumed and dropped.
pub fn parse_parameters(pb: &mut ParseBuffer<'_>, store: &mut ParameterStore, config: &ParseConfig) {
    while !pb.eof() {
        let start = pb.position();
        pb.skip_whitespace();

        if pb.peek() != Some(SEMI) {
            pb.reset(start);
            return;
        }

        pb.skip_char();
        let key_start = pb.skip_whitespace();
        let key_end = pb.skip_to_one_of(KEY_TERMINATORS);
        if key_end == key_start {
            continue;
        }
        let key = pb.slice(key_start, key_end);

        let entry = match registry::lookup(key) {
            Some((kind, decode)) => {
                let value_start = pb.position();
                match decode(kind, pb, VALUE_TERMINATORS) {
                    Ok(param) => Entry::Typed(param),
                    Err(e) if config.lenient_numeric => {
                        debug!(parameter = kind.name(), error = %e, "malformed value, using default");
                        Entry::Typed(Parameter::default_for(kind))
                    }
                    Err(e) => {
                        debug!(parameter = kind.name(), error = %e, "malformed value, keeping as extension");
                        pb.reset(value_start);
                        Entry::Extension(ExtensionParameter::decode(key, pb, VALUE_TERMINATORS, config))
                    }
                }
            }
            None => Entry::Extension(ExtensionParameter::decode(key, pb, VALUE_TERMINATORS, config)),
        };

        if std::str::from_utf8(pb.data_from(key_start)).is_err() {
            debug!(position = key_start, "parameter is not valid UTF-8, dropping it");
            continue;
        }
        match entry {
            Entry::Typed(param) => store.push_typed(param),
            Entry::Extension(ext) => store.push_extension(ext),
        }
    }
}

enum Entry {
    Typed(Parameter),
    Extension(ExtensionParameter),
}
