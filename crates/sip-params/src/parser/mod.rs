//! Parameter parsing
//!
//! Lexical helpers are nom combinators over `&[u8]`. The parameter loop
//! itself runs on a [`ParseBuffer`](parse_buffer::ParseBuffer) cursor, since
//! it needs to back off to a saved position when a list ends.

use nom::IResult;

pub mod params;
pub mod parse_buffer;
pub mod quoted;
pub(crate) mod token;
pub(crate) mod values;
pub(crate) mod whitespace;

pub(crate) type ParseResult<'a, O> = IResult<&'a [u8], O>;

pub use parse_buffer::ParseBuffer;
pub use params::{parse_parameters, KEY_TERMINATORS, VALUE_TERMINATORS};
pub use quoted::escape_quoted;
