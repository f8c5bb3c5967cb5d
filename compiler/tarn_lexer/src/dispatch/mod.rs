//! The driving loop and its byte-indexed table of scanning functions.
//!
//! The table is built at compile time from [`ByteClass::of`]: every byte value
//! has exactly one scanning function, and every scanning function moves the
//! cursor forward. Interpolation regions re-enter [`step`] recursively.

use tarn_diagnostic::LexMessage;
use tarn_ir::{TokenKind, TokenValue};
use tarn_lexer_core::ByteClass;

use crate::scanner::Scanner;
use crate::{comment, ident, number, string, trivia};

/// What the driving loop does after a scanning function returns.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    /// The `Eof` token has been pushed.
    Eof,
}

pub(crate) type ScanFn = fn(&mut Scanner<'_>) -> Flow;

static DISPATCH: [ScanFn; 256] = build_table();

#[allow(
    clippy::cast_possible_truncation,
    reason = "i ranges over 0..256, every value fits in u8"
)]
const fn build_table() -> [ScanFn; 256] {
    let mut table = [scan_invalid as ScanFn; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = handler(ByteClass::of(i as u8));
        i += 1;
    }
    table
}

const fn handler(class: ByteClass) -> ScanFn {
    match class {
        ByteClass::Eof => scan_eof,
        ByteClass::Invalid => scan_invalid,
        ByteClass::Space => trivia::scan_spaces,
        ByteClass::NewLine => trivia::scan_newline,
        ByteClass::Letter | ByteClass::Underscore => ident::scan_identifier,
        ByteClass::Digit => number::scan_number,
        ByteClass::DoubleQuote => string::scan_double_quote,
        ByteClass::SingleQuote => string::scan_rune,
        ByteClass::Dollar => string::scan_dollar,
        ByteClass::Slash => comment::scan_slash,
        ByteClass::Utf8Lead2 | ByteClass::Utf8Lead3 | ByteClass::Utf8Lead4 => {
            ident::scan_unicode
        }
        _ => scan_punctuation,
    }
}

/// Run one scanning function.
#[inline]
pub(crate) fn step(s: &mut Scanner<'_>) -> Flow {
    let before = s.pos();
    let byte = s.current();
    let flow = DISPATCH[byte as usize](s);
    debug_assert!(
        s.pos() > before || flow == Flow::Eof,
        "scanning function for byte 0x{byte:02X} at {before} made no progress"
    );
    flow
}

/// Tokenize to the end of input. The last token pushed is `Eof`.
pub(crate) fn run(s: &mut Scanner<'_>) {
    while step(s) == Flow::Continue {}
}

fn scan_eof(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    if s.is_eof() {
        s.push_token(TokenKind::Eof, start, TokenValue::None);
        return Flow::Eof;
    }
    // A NUL inside the source, not the sentinel.
    s.bump();
    s.report(start, LexMessage::UnexpectedCharacter { ch: '\0' });
    s.push_token(TokenKind::Invalid, start, TokenValue::None);
    Flow::Continue
}

fn scan_invalid(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let byte = s.current();
    let message = if byte.is_ascii() {
        LexMessage::UnexpectedCharacter { ch: char::from(byte) }
    } else {
        LexMessage::MalformedUtf8 { byte }
    };
    s.bump_n(1);
    s.report(start, message);
    s.push_token(TokenKind::Invalid, start, TokenValue::None);
    Flow::Continue
}

fn scan_punctuation(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let kind = punctuation_kind(s.current());
    s.bump();
    s.push_token(kind, start, TokenValue::None);
    Flow::Continue
}

fn punctuation_kind(byte: u8) -> TokenKind {
    match byte {
        b'!' => TokenKind::Exclamation,
        b'#' => TokenKind::Hash,
        b'%' => TokenKind::Percent,
        b'&' => TokenKind::Ampersand,
        b'(' => TokenKind::OpenParen,
        b')' => TokenKind::CloseParen,
        b'*' => TokenKind::Asterisk,
        b'+' => TokenKind::Plus,
        b',' => TokenKind::Comma,
        b'-' => TokenKind::Minus,
        b'.' => TokenKind::Dot,
        b':' => TokenKind::Colon,
        b';' => TokenKind::Semicolon,
        b'<' => TokenKind::LessThan,
        b'=' => TokenKind::Equal,
        b'>' => TokenKind::GreaterThan,
        b'?' => TokenKind::Question,
        b'@' => TokenKind::At,
        b'[' => TokenKind::OpenBracket,
        b'\\' => TokenKind::Backslash,
        b']' => TokenKind::CloseBracket,
        b'^' => TokenKind::Caret,
        b'`' => TokenKind::Backtick,
        b'{' => TokenKind::OpenBrace,
        b'|' => TokenKind::Pipe,
        b'}' => TokenKind::CloseBrace,
        b'~' => TokenKind::Tilde,
        _ => TokenKind::Invalid,
    }
}
