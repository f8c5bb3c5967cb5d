//! Diagnostic emitters.
//!
//! The lexer only collects diagnostics; front ends decide how to show them.
//! [`TerminalEmitter`] writes the human-readable form.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use std::path::Path;

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    /// Emit one diagnostic reported against the file at `path`.
    fn emit(&mut self, diagnostic: &Diagnostic, path: &Path);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: u32, warning_count: u32);

    /// Flush any buffered output.
    fn flush(&mut self);
}
