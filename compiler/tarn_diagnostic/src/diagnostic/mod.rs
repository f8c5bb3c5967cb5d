//! Core diagnostic types.

use std::fmt;
use std::path::Path;

use tarn_ir::{FileId, Location};

use crate::LexMessage;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One reported defect.
///
/// `start` is the first offending byte. `end`, when present, is one past the
/// last one; point diagnostics (a bad byte, a missing digit) leave it `None`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub file: FileId,
    pub start: Location,
    pub end: Option<Location>,
    pub message: LexMessage,
}

impl Diagnostic {
    /// Diagnostic at a single point.
    #[cold]
    pub fn at(file: FileId, start: Location, message: LexMessage) -> Self {
        Diagnostic {
            severity: message.severity(),
            file,
            start,
            end: None,
            message,
        }
    }

    /// Diagnostic covering `start..end`.
    #[cold]
    pub fn spanning(file: FileId, start: Location, end: Location, message: LexMessage) -> Self {
        debug_assert!(end.offset >= start.offset, "diagnostic ends before it starts");
        Diagnostic {
            severity: message.severity(),
            file,
            start,
            end: Some(end),
            message,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// One-line rendering: `path:line:column: severity[code]: message`.
    ///
    /// Lines and columns are shown one-based.
    pub fn render(&self, path: &Path) -> String {
        format!(
            "{}:{}:{}: {}[{}]: {}",
            path.display(),
            self.start.line + 1,
            self.start.column + 1,
            self.severity,
            self.message.code(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests;
