//! Message descriptors.

use std::fmt;

use crate::Severity;

/// Lexer error code, rendered as `L####`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const fn number(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{:04}", self.0)
    }
}

/// What went wrong.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum LexMessage {
    #[error("malformed UTF-8 byte 0x{byte:02X}")]
    MalformedUtf8 { byte: u8 },
    #[error("unexpected character `{}` (U+{:04X})", .ch.escape_debug(), scalar_value(.ch))]
    UnexpectedCharacter { ch: char },

    // ─── Unterminated constructs ───
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated rune literal")]
    UnterminatedRune,
    #[error("unterminated block comment ({depth} level{} still open)", plural_s(.depth))]
    UnterminatedComment { depth: u32 },
    #[error("unterminated multi-line string literal")]
    UnterminatedRawString,
    #[error("unterminated interpolation")]
    UnterminatedInterpolation,

    // ─── Escapes and runes ───
    #[error("unknown escape sequence `\\{}`", .escape.escape_debug())]
    InvalidEscape { escape: char },
    #[error("`\\x` escape needs 1 to 4 hex digits")]
    InvalidHexEscape,
    #[error("`\\{letter}` escape needs exactly {expected} hex digits, found {found}")]
    InvalidUnicodeEscape { letter: char, expected: u8, found: u8 },
    #[error("0x{value:X} is not a Unicode scalar value")]
    InvalidScalarValue { value: u32 },
    #[error("rune literal must contain exactly one character, found {count}")]
    InvalidRuneLength { count: u32 },

    // ─── Numbers ───
    #[error("integer literal does not fit in 64 bits")]
    IntegerOverflow,
    #[error("`_` must sit between two digits")]
    UnexpectedUnderscoreAfterDigit,
    #[error("expected a digit after `{prefix}`")]
    ExpectingDigitAfterPrefix { prefix: &'static str },
    #[error("expected a digit in the exponent")]
    ExpectingDigitAfterExponent,

    // ─── Multi-line strings ───
    #[error("the opening line of a multi-line string must end after its quotes")]
    RawStringFirstLineNotEmpty,
    #[error("the closing quotes of a multi-line string must be on their own line")]
    RawStringLastLineNotEmpty,
    #[error("expected {expected} closing quotes, found {found}")]
    RawStringTooManyClosingQuotes { expected: u32, found: u32 },
    #[error("line is indented less than the closing quotes")]
    RawStringInconsistentIndentation,
    #[error("indentation mixes tabs and spaces")]
    RawStringMixedIndentation,
    #[error("multi-line string has no content lines")]
    RawStringEmpty,

    #[error("string interpolation nested deeper than {limit} levels")]
    InterpolationTooDeep { limit: u32 },
}

fn scalar_value(ch: &char) -> u32 {
    u32::from(*ch)
}

fn plural_s(count: &u32) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl LexMessage {
    /// Stable code for this kind of message.
    pub const fn code(&self) -> ErrorCode {
        ErrorCode(match self {
            LexMessage::MalformedUtf8 { .. } => 1,
            LexMessage::UnexpectedCharacter { .. } => 2,
            LexMessage::UnterminatedString => 3,
            LexMessage::UnterminatedRune => 4,
            LexMessage::UnterminatedComment { .. } => 5,
            LexMessage::UnterminatedRawString => 6,
            LexMessage::UnterminatedInterpolation => 7,
            LexMessage::InvalidEscape { .. } => 8,
            LexMessage::InvalidHexEscape => 9,
            LexMessage::InvalidUnicodeEscape { .. } => 10,
            LexMessage::InvalidScalarValue { .. } => 11,
            LexMessage::InvalidRuneLength { .. } => 12,
            LexMessage::IntegerOverflow => 13,
            LexMessage::UnexpectedUnderscoreAfterDigit => 14,
            LexMessage::ExpectingDigitAfterPrefix { .. } => 15,
            LexMessage::ExpectingDigitAfterExponent => 16,
            LexMessage::RawStringFirstLineNotEmpty => 17,
            LexMessage::RawStringLastLineNotEmpty => 18,
            LexMessage::RawStringTooManyClosingQuotes { .. } => 19,
            LexMessage::RawStringInconsistentIndentation => 20,
            LexMessage::RawStringMixedIndentation => 21,
            LexMessage::RawStringEmpty => 22,
            LexMessage::InterpolationTooDeep { .. } => 23,
        })
    }

    #[allow(clippy::unused_self, reason = "every lexer message is currently an error")]
    pub const fn severity(&self) -> Severity {
        Severity::Error
    }

    /// Optional hint on how to fix the source.
    pub const fn help(&self) -> Option<&'static str> {
        match self {
            LexMessage::UnterminatedString => Some("add a closing `\"` before the end of the line"),
            LexMessage::UnterminatedRune => Some("add a closing `'` before the end of the line"),
            LexMessage::UnterminatedComment { .. } => Some("every `/*` needs a matching `*/`"),
            LexMessage::UnterminatedInterpolation => {
                Some("close the interpolation with as many `}` as the string has `$`")
            }
            LexMessage::InvalidEscape { .. } => {
                Some("valid escapes are \\0 \\' \\\" \\\\ \\b \\f \\n \\r \\t \\v \\{ \\x \\u \\U")
            }
            LexMessage::InvalidRuneLength { .. } => Some("use a string literal for text"),
            LexMessage::RawStringMixedIndentation => {
                Some("indent every line of the literal with the same character")
            }
            LexMessage::RawStringFirstLineNotEmpty | LexMessage::RawStringLastLineNotEmpty => {
                Some("put the literal's content between the lines holding the quotes")
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests;
