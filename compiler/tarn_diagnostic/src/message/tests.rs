use super::*;
use pretty_assertions::assert_eq;

#[test]
fn messages_render() {
    assert_eq!(
        LexMessage::MalformedUtf8 { byte: 0xFF }.to_string(),
        "malformed UTF-8 byte 0xFF"
    );
    assert_eq!(
        LexMessage::UnexpectedCharacter { ch: '§' }.to_string(),
        "unexpected character `§` (U+00A7)"
    );
    assert_eq!(
        LexMessage::UnterminatedComment { depth: 1 }.to_string(),
        "unterminated block comment (1 level still open)"
    );
    assert_eq!(
        LexMessage::UnterminatedComment { depth: 3 }.to_string(),
        "unterminated block comment (3 levels still open)"
    );
    assert_eq!(
        LexMessage::InvalidEscape { escape: 'q' }.to_string(),
        "unknown escape sequence `\\q`"
    );
    assert_eq!(
        LexMessage::InvalidUnicodeEscape {
            letter: 'u',
            expected: 4,
            found: 2
        }
        .to_string(),
        "`\\u` escape needs exactly 4 hex digits, found 2"
    );
    assert_eq!(
        LexMessage::ExpectingDigitAfterPrefix { prefix: "0x" }.to_string(),
        "expected a digit after `0x`"
    );
}

#[test]
fn control_characters_are_escaped() {
    assert_eq!(
        LexMessage::UnexpectedCharacter { ch: '\u{7}' }.to_string(),
        "unexpected character `\\u{7}` (U+0007)"
    );
}

#[test]
fn codes_are_distinct() {
    let all = [
        LexMessage::MalformedUtf8 { byte: 0 },
        LexMessage::UnexpectedCharacter { ch: 'x' },
        LexMessage::UnterminatedString,
        LexMessage::UnterminatedRune,
        LexMessage::UnterminatedComment { depth: 1 },
        LexMessage::UnterminatedRawString,
        LexMessage::UnterminatedInterpolation,
        LexMessage::InvalidEscape { escape: 'q' },
        LexMessage::InvalidHexEscape,
        LexMessage::InvalidUnicodeEscape {
            letter: 'u',
            expected: 4,
            found: 0,
        },
        LexMessage::InvalidScalarValue { value: 0xD800 },
        LexMessage::InvalidRuneLength { count: 2 },
        LexMessage::IntegerOverflow,
        LexMessage::UnexpectedUnderscoreAfterDigit,
        LexMessage::ExpectingDigitAfterPrefix { prefix: "0b" },
        LexMessage::ExpectingDigitAfterExponent,
        LexMessage::RawStringFirstLineNotEmpty,
        LexMessage::RawStringLastLineNotEmpty,
        LexMessage::RawStringTooManyClosingQuotes {
            expected: 3,
            found: 4,
        },
        LexMessage::RawStringInconsistentIndentation,
        LexMessage::RawStringMixedIndentation,
        LexMessage::RawStringEmpty,
        LexMessage::InterpolationTooDeep { limit: 8 },
    ];
    let mut codes: Vec<_> = all.iter().map(LexMessage::code).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), all.len());
}

#[test]
fn code_display() {
    assert_eq!(LexMessage::UnterminatedString.code().to_string(), "L0003");
    assert_eq!(LexMessage::UnterminatedString.code().number(), 3);
}

#[test]
fn severity_and_help() {
    assert_eq!(LexMessage::IntegerOverflow.severity(), Severity::Error);
    assert_eq!(
        LexMessage::RawStringMixedIndentation.severity(),
        Severity::Error
    );
    assert!(LexMessage::UnterminatedString.help().is_some());
    assert!(LexMessage::IntegerOverflow.help().is_none());
}
