//! Escape sequences in single-line strings and runes.
//!
//! | Escape | Value |
//! |--------|-------|
//! | `\0` `\'` `\"` `\\` `\{` | the character itself (`\0` is U+0000) |
//! | `\b` `\f` `\n` `\r` `\t` `\v` | the usual control characters |
//! | `\xH` .. `\xHHHH` | one UTF-16 code unit |
//! | `\uHHHH` | exactly four hex digits |
//! | `\UHHHHHHHH` | exactly eight hex digits |
//!
//! A malformed numeric escape yields U+FFFD. An unknown escape letter is
//! reported and kept as itself.

use tarn_diagnostic::LexMessage;
use tarn_ir::Location;

use super::Content;
use crate::number::hex_digit;
use crate::scanner::Scanner;

/// Longest `\x` escape.
const MAX_HEX_DIGITS: u8 = 4;

fn simple_escape(b: u8) -> Option<char> {
    Some(match b {
        b'0' => '\0',
        b'\'' => '\'',
        b'"' => '"',
        b'\\' => '\\',
        b'{' => '{',
        b'b' => '\u{8}',
        b'f' => '\u{c}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'v' => '\u{b}',
        _ => return None,
    })
}

/// Decode one escape, cursor on the backslash, and append its value.
///
/// A backslash right before a line break or the end of input appends
/// nothing; the caller reports the unterminated literal.
pub(super) fn scan_escape(s: &mut Scanner<'_>, content: &mut Content) {
    let start = s.location();
    s.bump();
    let b = s.current();
    if let Some(ch) = simple_escape(b) {
        s.bump();
        content.push(s.scratch, ch);
        return;
    }
    let ch = match b {
        b'x' => scan_hex(s, start),
        b'u' => scan_fixed(s, start, 'u', 4),
        b'U' => scan_fixed(s, start, 'U', 8),
        b'\n' | b'\r' => return,
        0 if s.is_eof() => return,
        _ => {
            let escape = if b.is_ascii() {
                s.bump();
                char::from(b)
            } else {
                s.bump_rune()
            };
            s.report_span(start, LexMessage::InvalidEscape { escape });
            escape
        }
    };
    content.push(s.scratch, ch);
}

/// `\x` followed by one to four hex digits.
fn scan_hex(s: &mut Scanner<'_>, start: Location) -> char {
    s.bump();
    let mut value = 0u32;
    let mut digits = 0u8;
    while digits < MAX_HEX_DIGITS {
        let Some(d) = hex_digit(s.current()) else {
            break;
        };
        value = (value << 4) | u32::from(d);
        digits += 1;
        s.bump();
    }
    if digits == 0 {
        s.report_span(start, LexMessage::InvalidHexEscape);
        return char::REPLACEMENT_CHARACTER;
    }
    scalar(s, start, value)
}

/// `\u` or `\U` followed by exactly `expected` hex digits.
fn scan_fixed(s: &mut Scanner<'_>, start: Location, letter: char, expected: u8) -> char {
    s.bump();
    let mut value = 0u32;
    let mut found = 0u8;
    while found < expected {
        let Some(d) = hex_digit(s.current()) else {
            break;
        };
        value = (value << 4) | u32::from(d);
        found += 1;
        s.bump();
    }
    if found < expected {
        s.report_span(
            start,
            LexMessage::InvalidUnicodeEscape {
                letter,
                expected,
                found,
            },
        );
        return char::REPLACEMENT_CHARACTER;
    }
    scalar(s, start, value)
}

fn scalar(s: &mut Scanner<'_>, start: Location, value: u32) -> char {
    char::from_u32(value).unwrap_or_else(|| {
        s.report_span(start, LexMessage::InvalidScalarValue { value });
        char::REPLACEMENT_CHARACTER
    })
}
