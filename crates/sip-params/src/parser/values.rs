use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::digit1,
    combinator::{map_res, opt, recognize},
    sequence::{pair, tuple},
};
use std::str;

use super::ParseResult;

// delta-seconds = 1*DIGIT
pub(crate) fn delta_seconds(input: &[u8]) -> ParseResult<u32> {
    map_res(digit1, |s: &[u8]| {
        str::from_utf8(s)
            .map_err(|_| "non-ascii digits")
            .and_then(|s_str| s_str.parse::<u32>().map_err(|_| "delta-seconds overflow"))
    })(input)
}

// port = 1*DIGIT, bounded to u16
pub(crate) fn port(input: &[u8]) -> ParseResult<u16> {
    map_res(digit1, |s: &[u8]| {
        str::from_utf8(s)
            .map_err(|_| "non-ascii digits")
            .and_then(|s_str| s_str.parse::<u16>().map_err(|_| "port out of range"))
    })(input)
}

// qvalue = ( "0" [ "." 0*3DIGIT ] ) / ( "1" [ "." 0*3("0") ] )
// Yields thousandths so that 0.5 and 0.500 compare equal without floats.
pub(crate) fn qvalue(input: &[u8]) -> ParseResult<u16> {
    map_res(
        recognize(alt((
            recognize(tuple((
                tag(b"1"),
                opt(pair(tag(b"."), take_while_m_n(0, 3, |c: u8| c == b'0'))),
            ))),
            recognize(tuple((
                tag(b"0"),
                opt(pair(
                    tag(b"."),
                    take_while_m_n(0, 3, |c: u8| c.is_ascii_digit()),
                )),
            ))),
        ))),
        |q_bytes: &[u8]| -> Result<u16, &'static str> {
            let whole = u16::from(q_bytes[0] - b'0') * 1000;
            let mut frac = 0u16;
            let mut scale = 100u16;
            for &d in q_bytes.iter().skip(2) {
                frac += u16::from(d - b'0') * scale;
                scale /= 10;
            }
            Ok(whole + frac)
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_seconds() {
        assert_eq!(delta_seconds(b"3600;x"), Ok((&b";x"[..], 3600)));
        assert!(delta_seconds(b"abc").is_err());
        assert!(delta_seconds(b"99999999999").is_err());
    }

    #[test]
    fn test_port() {
        assert_eq!(port(b"5060"), Ok((&b""[..], 5060)));
        assert!(port(b"70000").is_err());
    }

    #[test]
    fn test_qvalue() {
        assert_eq!(qvalue(b"1"), Ok((&b""[..], 1000)));
        assert_eq!(qvalue(b"1.000"), Ok((&b""[..], 1000)));
        assert_eq!(qvalue(b"0"), Ok((&b""[..], 0)));
        assert_eq!(qvalue(b"0.5"), Ok((&b""[..], 500)));
        assert_eq!(qvalue(b"0.75;x"), Ok((&b";x"[..], 750)));
        assert_eq!(qvalue(b"0.123"), Ok((&b""[..], 123)));
        // Extra digits stay in the remainder; callers reject them
        assert_eq!(qvalue(b"0.1234"), Ok((&b"4"[..], 123)));
        assert!(qvalue(b"2").is_err());
    }
}
