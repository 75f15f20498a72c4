use nom::{
    branch::alt,
    bytes::complete::tag,
    combinator::recognize,
    multi::{many0, many1},
};

use super::ParseResult;

pub(crate) fn wsp(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(alt((tag(b" "), tag(b"\t"))))(input)
}

// LWS simplified to 1*WSP; folding is undone before values reach this crate
pub(crate) fn lws(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many1(wsp))(input)
}

// SWS = [LWS]
pub(crate) fn sws(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(many0(wsp))(input)
}
