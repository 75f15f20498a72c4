use nom::{
    branch::alt,
    bytes::complete::{tag, take},
    combinator::{recognize, verify},
    multi::many0,
    sequence::{delimited, pair},
};

use super::whitespace::lws;
use super::ParseResult;

// quoted-pair = "\" (%x00-09 / %x0B-0C / %x0E-7F)
pub(crate) fn quoted_pair(input: &[u8]) -> ParseResult<&[u8]> {
    recognize(pair(
        tag(b"\\"),
        verify(take(1usize), |c: &[u8]| c[0] != b'\r' && c[0] != b'\n' && c[0] <= 0x7F),
    ))(input)
}

// qdtext = LWS / %x21 / %x23-5B / %x5D-7E / UTF8-NONASCII
// UTF8-NONASCII is accepted byte by byte; the raw text is kept as-is.
pub(crate) fn qdtext(input: &[u8]) -> ParseResult<&[u8]> {
    alt((
        lws,
        verify(take(1usize), |c: &[u8]| {
            let b = c[0];
            b == 0x21 || (0x23..=0x5B).contains(&b) || (0x5D..=0x7E).contains(&b) || b >= 0x80
        }),
    ))(input)
}

// quoted-string = DQUOTE *(qdtext / quoted-pair ) DQUOTE
// Returns the raw content between the quotes, escapes included.
pub(crate) fn quoted_string(input: &[u8]) -> ParseResult<&[u8]> {
    delimited(
        tag(b"\""),
        recognize(many0(alt((qdtext, quoted_pair)))),
        tag(b"\""),
    )(input)
}

/// Removes quoted-pair escapes from the raw content of a quoted string.
pub(crate) fn unescape_quoted(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Escapes `"` and `\` so `text` can be written between double quotes.
pub fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
