//! Ordered diagnostic collection.

use tarn_ir::{FileId, ResetPolicy};

use crate::{Diagnostic, Severity};

/// Diagnostics of every file lexed into one context, in report order.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticBag {
    items: Vec<Diagnostic>,
    error_count: u32,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.error_count += 1;
        }
        self.items.push(diagnostic);
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics reported against `file`.
    pub fn for_file(&self, file: FileId) -> impl Iterator<Item = &Diagnostic> + '_ {
        self.items.iter().filter(move |d| d.file == file)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "bounded by the number of diagnostics, which is at most the source size"
    )]
    pub fn warning_count(&self) -> u32 {
        self.items.len() as u32 - self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Remove every diagnostic.
    pub fn reset(&mut self, policy: ResetPolicy) {
        match policy {
            ResetPolicy::ReleaseMemory => self.items = Vec::new(),
            ResetPolicy::KeepCommitted => self.items.clear(),
        }
        self.error_count = 0;
    }
}

impl<'a> IntoIterator for &'a DiagnosticBag {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
