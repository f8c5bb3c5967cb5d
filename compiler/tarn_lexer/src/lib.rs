//! Lexer for Tarn.
//!
//! A byte-dispatch state machine: the byte under the cursor selects a
//! scanning function from a 256-entry table, the function appends tokens
//! and moves the cursor, and the loop ends when the `Eof` token is pushed.
//! Every byte of every input is covered by some token, so the scan never
//! stalls and never fails; defects in the source become diagnostics.
//!
//! # Usage
//!
//! ```
//! use tarn_lexer::{Lexer, LexerOutput};
//! use tarn_ir::TokenKind;
//!
//! let mut lexer = Lexer::new();
//! let mut out = LexerOutput::new();
//! lexer.run_str(&mut out, "main.tarn", "let x = 42");
//!
//! assert_eq!(out.tokens().kind(0), Some(TokenKind::Let));
//! assert!(out.diagnostics().is_empty());
//! ```
//!
//! A [`LexerOutput`] collects the results of any number of runs. Tokens are
//! stored column-wise (kinds, spans, values); each run's slice of them is
//! described by a [`LexerFileEntry`](tarn_ir::LexerFileEntry).

mod comment;
mod dispatch;
mod error;
mod ident;
mod keywords;
mod number;
mod options;
mod output;
mod scanner;
mod stack;
mod string;
mod trivia;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tarn_ir::{FileId, LexerFileEntry};
use tarn_lexer_core::SourceBuffer;
use tracing::debug;

pub use error::SourceError;
pub use keywords::keyword;
pub use options::LexerOptions;
pub use output::LexerOutput;

use scanner::Scanner;

/// Drives runs over source files.
///
/// Holds the configuration and a scratch buffer reused by every run. Many
/// lexers may work in parallel, each with its own [`LexerOutput`].
#[derive(Debug, Default)]
pub struct Lexer {
    options: LexerOptions,
    scratch: Vec<u8>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LexerOptions) -> Self {
        Lexer {
            options,
            scratch: Vec::new(),
        }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Empty context sized by this lexer's options.
    pub fn output(&self) -> LexerOutput {
        LexerOutput::with_options(&self.options)
    }

    /// Tokenize `source` into `out`, recording it under `path`.
    pub fn run_str(
        &mut self,
        out: &mut LexerOutput,
        path: impl Into<PathBuf>,
        source: &str,
    ) -> FileId {
        self.run_buffer(out, path.into(), &SourceBuffer::new(source))
    }

    /// Tokenize bytes that may not be valid UTF-8.
    pub fn run_bytes(
        &mut self,
        out: &mut LexerOutput,
        path: impl Into<PathBuf>,
        source: &[u8],
    ) -> FileId {
        self.run_buffer(out, path.into(), &SourceBuffer::from_bytes(source))
    }

    /// Read `reader` to the end, then tokenize what was read.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Read`] if reading fails. Nothing is appended
    /// to `out` in that case.
    pub fn run_reader(
        &mut self,
        out: &mut LexerOutput,
        path: impl Into<PathBuf>,
        reader: impl Read,
    ) -> Result<FileId, SourceError> {
        let path = path.into();
        let buf = match SourceBuffer::from_reader(reader) {
            Ok(buf) => buf,
            Err(source) => return Err(SourceError::Read { path, source }),
        };
        Ok(self.run_buffer(out, path, &buf))
    }

    /// Open and tokenize the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Read`] if the file cannot be opened or read.
    pub fn run_file(
        &mut self,
        out: &mut LexerOutput,
        path: impl AsRef<Path>,
    ) -> Result<FileId, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.run_reader(out, path, BufReader::new(file))
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(path = %path.display(), bytes = buf.len())
    )]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "more than u32::MAX files cannot be addressed by FileId"
    )]
    fn run_buffer(&mut self, out: &mut LexerOutput, path: PathBuf, buf: &SourceBuffer) -> FileId {
        let file = FileId::new(out.files.len() as u32);
        let begin_token = out.tokens.len();
        let diagnostics_before = out.diagnostics.len();
        let strings_before = out.strings.byte_len();
        out.files.push(LexerFileEntry {
            path,
            byte_len: buf.len(),
            begin_token,
            end_token: begin_token,
        });

        let mut scanner = Scanner::new(buf.cursor(), file, out, &mut self.scratch, &self.options);
        dispatch::run(&mut scanner);

        let end_token = out.tokens.len();
        if let Some(entry) = out.files.last_mut() {
            entry.end_token = end_token;
        }
        debug!(
            %file,
            tokens = end_token - begin_token,
            diagnostics = out.diagnostics.len() - diagnostics_before,
            interned_bytes = out.strings.byte_len() - strings_before,
            "lexed"
        );
        file
    }
}

/// Tokenize one source string into a fresh context.
pub fn lex(source: &str) -> LexerOutput {
    let mut lexer = Lexer::new();
    let mut out = lexer.output();
    lexer.run_str(&mut out, "<input>", source);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod test_support;
