use nom::bytes::complete::take_while1;

use super::ParseResult;

pub(crate) fn is_token_char(c: u8) -> bool {
    c.is_ascii_alphanumeric()
        || c == b'-' || c == b'.' || c == b'!' || c == b'%' || c == b'*'
        || c == b'_' || c == b'+' || c == b'`' || c == b'\'' || c == b'~'
}

// token = 1*(alphanum / "-" / "." / "!" / "%" / "*" / "_" / "+" / "`" / "'" / "~")
pub(crate) fn token(input: &[u8]) -> ParseResult<&[u8]> {
    take_while1(is_token_char)(input)
}
