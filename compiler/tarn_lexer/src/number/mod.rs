//! Integer and float literals.
//!
//! - `0x`/`0X`, `0o`/`0O`, `0b`/`0B` prefixes select a power-of-two radix.
//! - `_` may only sit between digits; a run of them counts as one separator.
//! - A value that does not fit in 64 bits is reported once and stored
//!   wrapped.
//! - A decimal literal becomes a float on `.` followed by a digit, or on an
//!   exponent marker.

use tarn_diagnostic::LexMessage;
use tarn_ir::{Location, TokenKind, TokenValue};

use crate::dispatch::Flow;
use crate::scanner::Scanner;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Radix {
    Binary,
    Octal,
    Hex,
}

impl Radix {
    /// Bits contributed by one digit.
    fn shift(self) -> u32 {
        match self {
            Radix::Binary => 1,
            Radix::Octal => 3,
            Radix::Hex => 4,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Radix::Binary => "0b",
            Radix::Octal => "0o",
            Radix::Hex => "0x",
        }
    }

    fn digit_fn(self) -> fn(u8) -> Option<u8> {
        match self {
            Radix::Binary => binary_digit,
            Radix::Octal => octal_digit,
            Radix::Hex => hex_digit,
        }
    }
}

fn binary_digit(b: u8) -> Option<u8> {
    matches!(b, b'0' | b'1').then(|| b - b'0')
}

fn octal_digit(b: u8) -> Option<u8> {
    matches!(b, b'0'..=b'7').then(|| b - b'0')
}

fn decimal_digit(b: u8) -> Option<u8> {
    b.is_ascii_digit().then(|| b - b'0')
}

pub(crate) fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn scan_number(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let radix = if s.current() == b'0' {
        match s.cursor.peek() {
            b'x' | b'X' => Some(Radix::Hex),
            b'o' | b'O' => Some(Radix::Octal),
            b'b' | b'B' => Some(Radix::Binary),
            _ => None,
        }
    } else {
        None
    };
    match radix {
        Some(radix) => scan_radix(s, start, radix),
        None => scan_decimal(s, start),
    }
    Flow::Continue
}

/// Step over digits and separators, handing each digit's value to
/// `on_digit`. Returns the number of digits seen.
fn eat_digits(
    s: &mut Scanner<'_>,
    digit: fn(u8) -> Option<u8>,
    mut on_digit: impl FnMut(u8),
) -> u32 {
    let mut count = 0;
    let mut after_underscore = false;
    loop {
        let b = s.current();
        if let Some(d) = digit(b) {
            on_digit(d);
            count += 1;
            after_underscore = false;
            s.bump();
        } else if b == b'_' {
            let next = s.cursor.peek();
            let leading = count == 0 && !after_underscore;
            let trailing = digit(next).is_none() && next != b'_';
            if leading || trailing {
                let at = s.location();
                s.report(at, LexMessage::UnexpectedUnderscoreAfterDigit);
            }
            after_underscore = true;
            s.bump();
        } else {
            return count;
        }
    }
}

fn scan_radix(s: &mut Scanner<'_>, start: Location, radix: Radix) {
    s.bump_n(2);
    let shift = radix.shift();
    let mut value = 0u64;
    let mut overflow = false;
    let digits = eat_digits(s, radix.digit_fn(), |d| {
        if value >> (u64::BITS - shift) != 0 {
            overflow = true;
        }
        value = (value << shift) | u64::from(d);
    });

    if digits == 0 {
        s.report_span(
            start,
            LexMessage::ExpectingDigitAfterPrefix {
                prefix: radix.prefix(),
            },
        );
    } else if overflow {
        s.report_span(start, LexMessage::IntegerOverflow);
    }
    s.push_token(TokenKind::Integer, start, TokenValue::Integer(value));
}

fn scan_decimal(s: &mut Scanner<'_>, start: Location) {
    let mut value = 0u64;
    let mut overflow = false;
    eat_digits(s, decimal_digit, |d| {
        let (scaled, o1) = value.overflowing_mul(10);
        let (sum, o2) = scaled.overflowing_add(u64::from(d));
        overflow |= o1 | o2;
        value = sum;
    });

    let fraction = s.current() == b'.' && s.cursor.peek().is_ascii_digit();
    if fraction || matches!(s.current(), b'e' | b'E') {
        scan_float(s, start);
        return;
    }
    if overflow {
        s.report_span(start, LexMessage::IntegerOverflow);
    }
    s.push_token(TokenKind::Integer, start, TokenValue::Integer(value));
}

/// Fraction and exponent of a decimal literal whose integer part has been
/// consumed.
fn scan_float(s: &mut Scanner<'_>, start: Location) {
    if s.current() == b'.' {
        s.bump();
        eat_digits(s, decimal_digit, |_| {});
    }
    let mut missing_exponent = false;
    if matches!(s.current(), b'e' | b'E') {
        s.bump();
        if matches!(s.current(), b'+' | b'-') {
            s.bump();
        }
        if eat_digits(s, decimal_digit, |_| {}) == 0 {
            let at = s.location();
            s.report(at, LexMessage::ExpectingDigitAfterExponent);
            missing_exponent = true;
        }
    }

    let text = s.cursor.slice_from(start.offset);
    s.scratch.clear();
    s.scratch.extend(text.iter().copied().filter(|&b| b != b'_'));
    if missing_exponent {
        s.scratch.push(b'0');
    }
    let value = std::str::from_utf8(s.scratch.as_slice())
        .ok()
        .and_then(|text| text.parse::<f64>().ok())
        .unwrap_or(0.0);
    s.push_token(TokenKind::Float, start, TokenValue::float(value));
}
