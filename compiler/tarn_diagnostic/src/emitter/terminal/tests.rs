use super::*;
use crate::LexMessage;
use pretty_assertions::assert_eq;
use tarn_ir::{FileId, Location};

fn render(diagnostic: &Diagnostic, mode: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit(diagnostic, Path::new("main.tarn"));
    emitter.flush();
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

#[test]
fn plain_output_with_help() {
    let diag = Diagnostic::at(
        FileId::new(0),
        Location::new(8, 1, 4),
        LexMessage::UnterminatedString,
    );
    assert_eq!(
        render(&diag, ColorMode::Never),
        "main.tarn:2:5: error[L0003]: unterminated string literal\n  \
         = help: add a closing `\"` before the end of the line\n"
    );
}

#[test]
fn plain_output_without_help() {
    let diag = Diagnostic::at(
        FileId::new(0),
        Location::new(0, 0, 0),
        LexMessage::IntegerOverflow,
    );
    assert_eq!(
        render(&diag, ColorMode::Auto),
        "main.tarn:1:1: error[L0013]: integer literal does not fit in 64 bits\n"
    );
}

#[test]
fn colored_output_wraps_severity() {
    let diag = Diagnostic {
        severity: Severity::Warning,
        ..Diagnostic::at(
            FileId::new(0),
            Location::new(0, 0, 0),
            LexMessage::RawStringEmpty,
        )
    };
    let out = render(&diag, ColorMode::Always);
    assert!(out.contains("\x1b[1;33mwarning\x1b[0m"));

    let diag = Diagnostic::at(
        FileId::new(0),
        Location::new(0, 0, 0),
        LexMessage::RawStringMixedIndentation,
    );
    let out = render(&diag, ColorMode::Always);
    assert!(out.contains("\x1b[1;31merror\x1b[0m"), "{out}");
}

#[test]
fn summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(1, 2);
    assert_eq!(
        String::from_utf8_lossy(&emitter.into_inner()),
        "1 error, 2 warnings emitted\n"
    );
}

#[test]
fn color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}
