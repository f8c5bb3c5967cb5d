//! String and rune literals.
//!
//! Four shapes share this module:
//!
//! - `"..."` single-line strings and `'.'` runes, with escapes.
//! - `"""` raw multi-line strings (see [`raw`]).
//! - `$"..."`: either of the string shapes with interpolation regions,
//!   opened by as many `{` as there are `$` (see [`interpolation`]).
//! - A `$` that does not lead a string is a `Dollar` token.
//!
//! Decoded content is copied into the run's scratch buffer while its hash is
//! folded, then interned once.

mod escape;
mod interpolation;
mod raw;

use tarn_diagnostic::LexMessage;
use tarn_ir::{ContentHash, Location, TokenKind, TokenValue, Utf8StringHandle};

use crate::dispatch::Flow;
use crate::scanner::Scanner;

use self::interpolation::RegionEnd;

/// Decoded content of the literal segment being scanned.
pub(crate) struct Content {
    hash: ContentHash,
    chars: u32,
    first: Option<char>,
}

impl Content {
    /// Start a segment, discarding whatever the scratch buffer held.
    pub(crate) fn begin(scratch: &mut Vec<u8>) -> Self {
        scratch.clear();
        Content {
            hash: ContentHash::EMPTY,
            chars: 0,
            first: None,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, scratch: &mut Vec<u8>, ch: char) {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf).as_bytes();
        self.hash = self.hash.push_bytes(encoded);
        scratch.extend_from_slice(encoded);
        if self.first.is_none() {
            self.first = Some(ch);
        }
        self.chars += 1;
    }

    /// Intern the segment held in the scratch buffer.
    pub(crate) fn intern(&self, s: &mut Scanner<'_>) -> Utf8StringHandle {
        s.out.strings.intern_hashed(s.scratch.as_slice(), self.hash)
    }
}

/// Which single-line literal is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Quote {
    String,
    Rune,
}

impl Quote {
    fn byte(self) -> u8 {
        match self {
            Quote::String => b'"',
            Quote::Rune => b'\'',
        }
    }
}

pub(crate) fn scan_double_quote(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let quotes = s.cursor.run_length(b'"');
    if quotes >= raw::MIN_FENCE {
        raw::scan_raw(s, start, quotes, 0);
    } else {
        scan_quoted(s, start, Quote::String, 0);
    }
    Flow::Continue
}

pub(crate) fn scan_rune(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    scan_quoted(s, start, Quote::Rune, 0);
    Flow::Continue
}

/// `$`-prefixed string, or a lone `Dollar`.
pub(crate) fn scan_dollar(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let dollars = s.cursor.run_length(b'$');
    if s.cursor.peek_at(dollars) != b'"' {
        s.bump();
        s.push_token(TokenKind::Dollar, start, TokenValue::None);
        return Flow::Continue;
    }
    s.bump_n(dollars);
    let quotes = s.cursor.run_length(b'"');
    if quotes >= raw::MIN_FENCE {
        raw::scan_raw(s, start, quotes, dollars);
    } else {
        scan_quoted(s, start, Quote::String, dollars);
    }
    Flow::Continue
}

/// Single-line string or rune, cursor on the opening quote.
///
/// `dollars` is the interpolation prefix length, 0 for a plain literal.
fn scan_quoted(s: &mut Scanner<'_>, start: Location, quote: Quote, dollars: u32) {
    let delimiter = quote.byte();
    s.bump();

    let mut kind = match (quote, dollars) {
        (Quote::Rune, _) => TokenKind::Rune,
        (Quote::String, 0) => TokenKind::String,
        (Quote::String, _) => TokenKind::StringInterpolatedMacro,
    };
    let mut segment_start = start;
    let mut content = Content::begin(s.scratch);

    let closed = loop {
        let b = s.current();
        if b == delimiter {
            s.bump();
            break true;
        }
        match b {
            b'\\' => escape::scan_escape(s, &mut content),
            b'\n' | b'\r' => break false,
            0 if s.is_eof() => break false,
            b'{' if dollars > 0 => {
                let braces = s.cursor.run_length(b'{');
                if braces < dollars {
                    push_braces(s, &mut content, braces);
                    continue;
                }
                push_braces(s, &mut content, braces - dollars);
                let handle = content.intern(s);
                s.push_token(kind, segment_start, TokenValue::String(handle));
                if interpolation::scan_region(s, dollars) == RegionEnd::Eof {
                    return;
                }
                kind = TokenKind::StringInterpolatedPart;
                segment_start = s.location();
                content = Content::begin(s.scratch);
            }
            _ if b.is_ascii() => {
                s.bump();
                content.push(s.scratch, char::from(b));
            }
            _ => {
                let ch = s.bump_rune();
                content.push(s.scratch, ch);
            }
        }
    };

    if !closed {
        let message = match quote {
            Quote::String => LexMessage::UnterminatedString,
            Quote::Rune => LexMessage::UnterminatedRune,
        };
        s.report_span(start, message);
    }

    let value = match quote {
        Quote::Rune => {
            if closed && content.chars != 1 {
                s.report_span(
                    start,
                    LexMessage::InvalidRuneLength {
                        count: content.chars,
                    },
                );
            }
            TokenValue::Rune(content.first.unwrap_or('\0'))
        }
        Quote::String => TokenValue::String(content.intern(s)),
    };
    s.push_token(kind, segment_start, value);
}

/// Copy `n` literal `{` into the segment.
fn push_braces(s: &mut Scanner<'_>, content: &mut Content, n: u32) {
    for _ in 0..n {
        content.push(s.scratch, '{');
    }
    s.bump_n(n);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
