use pretty_assertions::assert_eq;
use tarn_diagnostic::LexMessage;
use tarn_ir::{TokenKind, TokenValue, Utf8StringHandle};

use crate::lex;
use crate::test_support::{all_kinds, diagnostics, first, kinds, lex_bytes, messages, range, text};

#[test]
fn plain_string() {
    let (out, token) = first("\"abc\" x");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(range(token.span), 0..5);
    assert_eq!(text(&out, token), "abc");
    assert!(out.diagnostics().is_empty());
}

#[test]
fn empty_string_is_the_empty_handle() {
    let (_, token) = first("\"\"");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(token.value, TokenValue::String(Utf8StringHandle::EMPTY));
}

#[test]
fn escapes_are_decoded() {
    let (out, token) = first(r#""a\nb""#);
    assert_eq!(text(&out, token), "a\nb");
    assert_eq!(range(token.span), 0..6);
}

#[test]
fn non_ascii_content() {
    let (out, token) = first("\"日本\"");
    assert_eq!(text(&out, token), "日本");
}

#[test]
fn malformed_byte_in_string_is_replaced() {
    let out = lex_bytes(b"\"a\xFFb\"");
    let token = out.tokens().get(0).unwrap();
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(text(&out, token), "a\u{FFFD}b");
    assert_eq!(messages(&out), vec![LexMessage::MalformedUtf8 { byte: 0xFF }]);
}

#[test]
fn unterminated_string_stops_before_the_newline() {
    let out = lex("\"abc\nx");
    assert_eq!(
        all_kinds(&out),
        vec![
            TokenKind::String,
            TokenKind::NewLine,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    let token = out.tokens().get(0).unwrap();
    assert_eq!(range(token.span), 0..4);
    assert_eq!(text(&out, token), "abc");

    let diags = diagnostics(&out);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, LexMessage::UnterminatedString);
    assert_eq!(diags[0].start.offset, 0);
    assert_eq!(diags[0].end.unwrap().offset, 4);
}

#[test]
fn unterminated_string_at_end_of_input() {
    let (out, token) = first("\"ab");
    assert_eq!(range(token.span), 0..3);
    assert_eq!(messages(&out), vec![LexMessage::UnterminatedString]);
}

#[test]
fn runes() {
    let (_, token) = first("'a'");
    assert_eq!(token.kind, TokenKind::Rune);
    assert_eq!(token.value, TokenValue::Rune('a'));

    let (_, token) = first("'\\n'");
    assert_eq!(token.value, TokenValue::Rune('\n'));

    let (out, token) = first("'日'");
    assert_eq!(token.value, TokenValue::Rune('日'));
    assert!(out.diagnostics().is_empty());
}

#[test]
fn rune_must_hold_one_scalar() {
    let (out, token) = first("''");
    assert_eq!(token.value, TokenValue::Rune('\0'));
    assert_eq!(
        messages(&out),
        vec![LexMessage::InvalidRuneLength { count: 0 }]
    );

    let (out, token) = first("'ab'");
    assert_eq!(token.value, TokenValue::Rune('a'));
    assert_eq!(
        messages(&out),
        vec![LexMessage::InvalidRuneLength { count: 2 }]
    );
}

#[test]
fn unterminated_rune() {
    let (out, token) = first("'a");
    assert_eq!(token.kind, TokenKind::Rune);
    assert_eq!(token.value, TokenValue::Rune('a'));
    assert_eq!(messages(&out), vec![LexMessage::UnterminatedRune]);
}

#[test]
fn lone_dollar() {
    assert_eq!(
        kinds("$x $"),
        vec![TokenKind::Dollar, TokenKind::Identifier, TokenKind::Dollar]
    );
    assert_eq!(
        kinds("$$x"),
        vec![TokenKind::Dollar, TokenKind::Dollar, TokenKind::Identifier]
    );
}

#[test]
fn interpolated_literal_without_regions() {
    let (out, token) = first("$\"plain\"");
    assert_eq!(token.kind, TokenKind::StringInterpolatedMacro);
    assert_eq!(range(token.span), 0..8);
    assert_eq!(text(&out, token), "plain");
}

#[test]
fn escaped_brace_does_not_open_a_region() {
    let (out, token) = first(r#"$"\{x}""#);
    assert_eq!(token.kind, TokenKind::StringInterpolatedMacro);
    assert_eq!(text(&out, token), "{x}");
    assert_eq!(kinds(r#"$"\{x}""#).len(), 1);
}

#[test]
fn braces_in_plain_strings_are_text() {
    let (out, token) = first("\"{x}\"");
    assert_eq!(token.kind, TokenKind::String);
    assert_eq!(text(&out, token), "{x}");
}
