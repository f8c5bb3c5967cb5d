use pretty_assertions::assert_eq;
use tarn_diagnostic::{LexMessage, Severity};
use tarn_ir::TokenKind;

use crate::lex;
use crate::test_support::{diagnostics, first, kinds, messages, range, significant, text};

/// Value and diagnostics of a single raw literal.
fn raw(source: &str) -> (String, Vec<LexMessage>) {
    let (out, token) = first(source);
    assert_eq!(token.kind, TokenKind::String, "{source:?}");
    (text(&out, token), messages(&out))
}

#[test]
fn indentation_is_stripped() {
    let source = "\"\"\"\n    select *\n      from t\n    \"\"\"";
    assert_eq!(raw(source), ("select *\n  from t".to_owned(), vec![]));
}

#[test]
fn literal_spans_both_fences() {
    let source = "\"\"\"\n  a\n  \"\"\" x";
    let out = lex(source);
    let tokens = significant(&out);
    assert_eq!(range(tokens[0].span), 0..13);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 6);
}

#[test]
fn blank_lines_become_empty() {
    assert_eq!(
        raw("\"\"\"\n  a\n\n  b\n  \"\"\""),
        ("a\n\nb".to_owned(), vec![])
    );
    assert_eq!(
        raw("\"\"\"\n  a\n       \n  b\n  \"\"\""),
        ("a\n\nb".to_owned(), vec![])
    );
}

#[test]
fn line_breaks_are_normalized() {
    assert_eq!(
        raw("\"\"\"\r\n  a\r\n  b\r  c\r\n  \"\"\""),
        ("a\nb\nc".to_owned(), vec![])
    );
}

#[test]
fn no_escapes() {
    assert_eq!(
        raw("\"\"\"\n  a\\nb \"q\"\n  \"\"\""),
        ("a\\nb \"q\"".to_owned(), vec![])
    );
}

#[test]
fn longer_fence_allows_shorter_quote_runs() {
    assert_eq!(
        raw("\"\"\"\"\n  say \"\"\"hi\"\"\"\n  \"\"\"\""),
        ("say \"\"\"hi\"\"\"".to_owned(), vec![])
    );
}

#[test]
fn text_after_opening_fence() {
    assert_eq!(
        raw("\"\"\" x\n  a\n  \"\"\""),
        ("a".to_owned(), vec![LexMessage::RawStringFirstLineNotEmpty])
    );
}

#[test]
fn trailing_blanks_after_opening_fence_are_fine() {
    assert_eq!(raw("\"\"\"  \t\n  a\n  \"\"\""), ("a".to_owned(), vec![]));
}

#[test]
fn empty_literal() {
    assert_eq!(
        raw("\"\"\"\n\"\"\""),
        (String::new(), vec![LexMessage::RawStringEmpty])
    );
}

#[test]
fn text_before_closing_fence() {
    assert_eq!(
        raw("\"\"\"\n  a\n  b\"\"\""),
        ("a\nb".to_owned(), vec![LexMessage::RawStringLastLineNotEmpty])
    );
}

#[test]
fn too_many_closing_quotes() {
    assert_eq!(
        raw("\"\"\"\n  a\n  \"\"\"\""),
        (
            "a".to_owned(),
            vec![LexMessage::RawStringTooManyClosingQuotes {
                expected: 3,
                found: 4,
            }]
        )
    );
}

#[test]
fn line_shallower_than_closing_fence() {
    let (out, token) = first("\"\"\"\n  a\n    \"\"\"");
    assert_eq!(text(&out, token), "a");
    let diags = diagnostics(&out);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, LexMessage::RawStringInconsistentIndentation);
    assert_eq!(diags[0].start.line, 1);
}

#[test]
fn mixed_tabs_and_spaces_are_reported_once() {
    let (out, token) = first("\"\"\"\n\ta\n  b\n \tc\n \"\"\"");
    assert_eq!(text(&out, token), "a\n b\n\tc");
    let diags = diagnostics(&out);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, LexMessage::RawStringMixedIndentation);
    assert_eq!(diags[0].severity, Severity::Error);
    assert_eq!(diags[0].start.line, 2);
    assert!(out.diagnostics().has_errors());
}

#[test]
fn unterminated_literal_keeps_its_content() {
    let (out, token) = first("\"\"\"\n  a\n");
    assert_eq!(range(token.span), 0..8);
    assert_eq!(text(&out, token), "a\n");
    assert_eq!(messages(&out), vec![LexMessage::UnterminatedRawString]);
}

#[test]
fn unterminated_on_the_opening_line() {
    let (out, token) = first("\"\"\"");
    assert_eq!(range(token.span), 0..3);
    assert_eq!(text(&out, token), "");
    assert_eq!(messages(&out), vec![LexMessage::UnterminatedRawString]);
}

#[test]
fn interpolated_raw_literal() {
    let source = "$\"\"\"\n  a{x}\n  b\n  \"\"\"";
    let out = lex(source);
    let tokens = significant(&out);
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::StringInterpolatedMacro,
            TokenKind::StringInterpolatedBegin,
            TokenKind::Identifier,
            TokenKind::StringInterpolatedEnd,
            TokenKind::StringInterpolatedPart,
        ]
    );
    assert_eq!(text(&out, tokens[0]), "a");
    assert_eq!(range(tokens[0].span), 0..8);
    assert_eq!(text(&out, tokens[2]), "x");
    assert_eq!(text(&out, tokens[4]), "\nb");
    assert_eq!(range(tokens[4].span), 11..source.len() as u32);
    assert!(out.diagnostics().is_empty());
}

#[test]
fn braces_in_plain_raw_literal_are_text() {
    assert_eq!(
        raw("\"\"\"\n  {a}\n  \"\"\""),
        ("{a}".to_owned(), vec![])
    );
    assert_eq!(kinds("\"\"\"\n  {a}\n  \"\"\"").len(), 1);
}
