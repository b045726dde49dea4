// SPDX-License-Identifier: Apache-2.0

//! Dense lookup tables indexed by byte value.
//!
//! Every hot loop of the scanner classifies one byte per iteration, so the
//! classification is a single table load instead of a chain of comparisons.

use crate::Token;

const WHITESPACE: u8 = 1 << 0;
const NUMBER: u8 = 1 << 1;

static CLASS: [u8; 256] = build_class_table();

const fn build_class_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    table[b'\t' as usize] = WHITESPACE;
    table[b'\n' as usize] = WHITESPACE;
    table[b'\r' as usize] = WHITESPACE;
    table[b' ' as usize] = WHITESPACE;

    table[b'+' as usize] = NUMBER;
    table[b'-' as usize] = NUMBER;
    table[b'.' as usize] = NUMBER;
    table[b'E' as usize] = NUMBER;
    table[b'e' as usize] = NUMBER;
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = NUMBER;
        digit += 1;
    }
    table
}

#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    CLASS[byte as usize] & WHITESPACE != 0
}

/// Member of the number character set `+ - . 0-9 E e`
#[inline]
pub(crate) fn is_number_char(byte: u8) -> bool {
    CLASS[byte as usize] & NUMBER != 0
}

/// What the scanner does after classifying a lead byte
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Lead {
    /// Single byte punctuation, consumed right away
    Punct(Token),
    /// Payload token, left in the buffer for the extractor
    Payload(Token),
    /// Keyword token, consumed by matching the full literal
    Literal(Token, &'static str),
}

pub(crate) const NULL: &str = "null";
pub(crate) const TRUE: &str = "true";
pub(crate) const FALSE: &str = "false";

static LEAD: [Option<Lead>; 256] = build_lead_table();

const fn build_lead_table() -> [Option<Lead>; 256] {
    let mut table: [Option<Lead>; 256] = [None; 256];
    table[b'{' as usize] = Some(Lead::Punct(Token::ObjectOpen));
    table[b'}' as usize] = Some(Lead::Punct(Token::ObjectClose));
    table[b'[' as usize] = Some(Lead::Punct(Token::ArrayOpen));
    table[b']' as usize] = Some(Lead::Punct(Token::ArrayClose));
    table[b':' as usize] = Some(Lead::Punct(Token::ObjectColon));
    table[b',' as usize] = Some(Lead::Punct(Token::Comma));

    table[b'"' as usize] = Some(Lead::Payload(Token::String));
    table[b'-' as usize] = Some(Lead::Payload(Token::Number));
    let mut digit = b'0';
    while digit <= b'9' {
        table[digit as usize] = Some(Lead::Payload(Token::Number));
        digit += 1;
    }

    table[b't' as usize] = Some(Lead::Literal(Token::True, TRUE));
    table[b'f' as usize] = Some(Lead::Literal(Token::False, FALSE));
    table[b'n' as usize] = Some(Lead::Literal(Token::Null, NULL));
    table
}

#[inline]
pub(crate) fn lead(byte: u8) -> Option<Lead> {
    LEAD[byte as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_set_is_exact() {
        let expected = [b'\t', b'\n', b'\r', b' '];
        for b in 0..=255u8 {
            assert_eq!(is_whitespace(b), expected.contains(&b), "byte {b:#04x}");
        }
    }

    #[test]
    fn test_number_set_is_exact() {
        let expected = b"+-.0123456789Ee";
        for b in 0..=255u8 {
            assert_eq!(is_number_char(b), expected.contains(&b), "byte {b:#04x}");
        }
    }

    #[test]
    fn test_lead_table() {
        assert_eq!(lead(b'{'), Some(Lead::Punct(Token::ObjectOpen)));
        assert_eq!(lead(b','), Some(Lead::Punct(Token::Comma)));
        assert_eq!(lead(b'"'), Some(Lead::Payload(Token::String)));
        assert_eq!(lead(b'7'), Some(Lead::Payload(Token::Number)));
        assert_eq!(lead(b'-'), Some(Lead::Payload(Token::Number)));
        assert_eq!(lead(b'n'), Some(Lead::Literal(Token::Null, "null")));
        // '+' and '.' continue a number but cannot start one
        assert_eq!(lead(b'+'), None);
        assert_eq!(lead(b'.'), None);
        assert_eq!(lead(b' '), None);
        assert_eq!(lead(b'h'), None);
    }
}
