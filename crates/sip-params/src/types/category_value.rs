//! The primary value that precedes a header's parameter list.
//!
//! A [`ParserCategory`](crate::types::category::ParserCategory) parses its
//! primary value first and hands the cursor to the parameter parser right
//! after it. Each header family plugs in its own value type through
//! [`CategoryValue`].

use nom::{bytes::complete::tag, sequence::tuple};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser::parse_buffer::ParseBuffer;
use crate::parser::token::token;
use crate::parser::whitespace::sws;

/// Value parsed ahead of the parameter list.
pub trait CategoryValue: Clone + fmt::Debug + Default {
    /// Parses the value at the cursor and leaves the cursor after it.
    ///
    /// Never fails. Input that does not fit yields the default value and the
    /// cursor is left where the value was expected.
    fn parse(pb: &mut ParseBuffer<'_>) -> Self;

    /// Writes the value in wire form.
    fn encode<W: fmt::Write>(&self, out: &mut W) -> fmt::Result;
}

/// Categories that carry parameters only, e.g. the tail of a start line.
impl CategoryValue for () {
    fn parse(_pb: &mut ParseBuffer<'_>) -> Self {}

    fn encode<W: fmt::Write>(&self, _out: &mut W) -> fmt::Result {
        Ok(())
    }
}

/// A single token value, as in `Event: presence;id=1` or
/// `Subscription-State: active;expires=60`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token(pub String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CategoryValue for Token {
    fn parse(pb: &mut ParseBuffer<'_>) -> Self {
        pb.skip_whitespace();
        match token(pb.remaining()) {
            Ok((rest, value)) => {
                pb.sync_to(rest);
                Token(String::from_utf8_lossy(value).into_owned())
            }
            Err(_) => Token::default(),
        }
    }

    fn encode<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str(&self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `type "/" subtype`, as in `Content-Type: text/plain;charset=utf-8`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MediaType {
    pub typ: String,
    pub subtype: String,
}

impl MediaType {
    pub fn new(typ: impl Into<String>, subtype: impl Into<String>) -> Self {
        MediaType {
            typ: typ.into(),
            subtype: subtype.into(),
        }
    }
}

impl CategoryValue for MediaType {
    fn parse(pb: &mut ParseBuffer<'_>) -> Self {
        pb.skip_whitespace();
        match tuple((token, sws, tag(b"/"), sws, token))(pb.remaining()) {
            Ok((rest, (typ, _, _, _, subtype))) => {
                pb.sync_to(rest);
                MediaType {
                    typ: String::from_utf8_lossy(typ).into_owned(),
                    subtype: String::from_utf8_lossy(subtype).into_owned(),
                }
            }
            Err(_) => MediaType::default(),
        }
    }

    fn encode<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write!(out, "{}/{}", self.typ, self.subtype)
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.encode(f)
    }
}
