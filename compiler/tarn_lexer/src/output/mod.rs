//! The per-compilation lexing context.

use tarn_diagnostic::DiagnosticBag;
use tarn_ir::{FileId, LexerFileEntry, ResetPolicy, StringTable, TokenIndex, TokenList};

use crate::LexerOptions;

/// Everything lexing produces, accumulated across runs.
///
/// Each run appends one file's tokens (ending in its `Eof`), its
/// diagnostics, and one [`LexerFileEntry`]. Interned strings are shared by
/// every file: equal content gets the same handle no matter which file it
/// came from.
#[derive(Debug)]
pub struct LexerOutput {
    pub(crate) tokens: TokenList,
    pub(crate) strings: StringTable,
    pub(crate) diagnostics: DiagnosticBag,
    pub(crate) files: Vec<LexerFileEntry>,
}

impl LexerOutput {
    pub fn new() -> Self {
        Self::with_options(&LexerOptions::default())
    }

    /// Empty context with room reserved as `options` asks.
    pub fn with_options(options: &LexerOptions) -> Self {
        LexerOutput {
            tokens: TokenList::with_capacity(options.initial_token_capacity),
            strings: StringTable::with_capacity(options.initial_string_capacity),
            diagnostics: DiagnosticBag::new(),
            files: Vec::new(),
        }
    }

    #[inline]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    #[inline]
    pub fn strings(&self) -> &StringTable {
        &self.strings
    }

    #[inline]
    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.diagnostics
    }

    /// One entry per run, in run order. A [`FileId`] indexes this slice.
    #[inline]
    pub fn files(&self) -> &[LexerFileEntry] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> Option<&LexerFileEntry> {
        self.files.get(id.index() as usize)
    }

    /// File whose token range holds `index`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "file ids are allocated as u32"
    )]
    pub fn file_of_token(&self, index: TokenIndex) -> Option<FileId> {
        let i = self.files.partition_point(|file| file.end_token <= index);
        let file = self.files.get(i)?;
        file.contains_token(index).then(|| FileId::new(i as u32))
    }

    /// Drop all tokens, strings, diagnostics, and file entries.
    ///
    /// Every previously issued index, handle, and [`FileId`] becomes
    /// meaningless.
    pub fn reset(&mut self, policy: ResetPolicy) {
        self.tokens.reset(policy);
        self.strings.reset(policy);
        self.diagnostics.reset(policy);
        match policy {
            ResetPolicy::ReleaseMemory => self.files = Vec::new(),
            ResetPolicy::KeepCommitted => self.files.clear(),
        }
    }
}

impl Default for LexerOutput {
    fn default() -> Self {
        Self::new()
    }
}
