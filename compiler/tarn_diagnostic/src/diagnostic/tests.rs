use super::*;
use pretty_assertions::assert_eq;

#[test]
fn point_diagnostic() {
    let diag = Diagnostic::at(
        FileId::new(0),
        Location::new(4, 0, 4),
        LexMessage::ExpectingDigitAfterExponent,
    );
    assert!(diag.is_error());
    assert_eq!(diag.end, None);
}

#[test]
fn span_diagnostic_takes_message_severity() {
    let diag = Diagnostic::spanning(
        FileId::new(1),
        Location::new(0, 0, 0),
        Location::new(10, 1, 2),
        LexMessage::RawStringMixedIndentation,
    );
    assert_eq!(diag.severity, Severity::Error);
    assert!(diag.is_error());
    assert_eq!(diag.end.map(|l| l.offset), Some(10));
}

#[test]
fn render_is_one_based() {
    let diag = Diagnostic::at(
        FileId::new(0),
        Location::new(17, 2, 5),
        LexMessage::UnterminatedString,
    );
    assert_eq!(
        diag.render(Path::new("src/app.tarn")),
        "src/app.tarn:3:6: error[L0003]: unterminated string literal"
    );
}

#[test]
fn severity_display() {
    assert_eq!(Severity::Error.to_string(), "error");
    assert_eq!(Severity::Warning.to_string(), "warning");
}
