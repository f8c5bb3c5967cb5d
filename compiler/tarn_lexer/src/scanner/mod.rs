//! Per-run scanner state.
//!
//! One [`Scanner`] lives for exactly one `run`: it owns the cursor and the
//! line/column counters and borrows the output context it appends to. Every
//! scanning function takes it by `&mut`.

use tarn_diagnostic::{Diagnostic, LexMessage};
use tarn_ir::{FileId, Location, Span, TokenIndex, TokenKind, TokenValue};
use tarn_lexer_core::utf8::{self, Decoded};
use tarn_lexer_core::Cursor;

use crate::{LexerOptions, LexerOutput};

pub(crate) struct Scanner<'a> {
    pub(crate) cursor: Cursor<'a>,
    line: u32,
    column: u32,
    file: FileId,
    pub(crate) out: &'a mut LexerOutput,
    /// Decoded literal content, reused by every literal of the run.
    pub(crate) scratch: &'a mut Vec<u8>,
    pub(crate) options: &'a LexerOptions,
    pub(crate) interpolation_depth: u32,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(
        cursor: Cursor<'a>,
        file: FileId,
        out: &'a mut LexerOutput,
        scratch: &'a mut Vec<u8>,
        options: &'a LexerOptions,
    ) -> Self {
        Scanner {
            cursor,
            line: 0,
            column: 0,
            file,
            out,
            scratch,
            options,
            interpolation_depth: 0,
        }
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.cursor.current()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.cursor.is_eof()
    }

    /// Current offset, line, and column.
    #[inline]
    pub(crate) fn location(&self) -> Location {
        Location::new(self.cursor.pos(), self.line, self.column)
    }

    /// `true` on `\n`, `\r`, or the end of input.
    #[inline]
    pub(crate) fn at_line_end(&self) -> bool {
        matches!(self.current(), b'\n' | b'\r') || self.is_eof()
    }

    /// Step over one ASCII byte that is not a line break.
    #[inline]
    pub(crate) fn bump(&mut self) {
        debug_assert!(
            self.current().is_ascii() && !matches!(self.current(), b'\n' | b'\r'),
            "bump() over byte 0x{:02X}",
            self.current()
        );
        self.cursor.advance();
        self.column += 1;
    }

    /// Step over `n` ASCII bytes on the current line.
    #[inline]
    pub(crate) fn bump_n(&mut self, n: u32) {
        self.cursor.advance_n(n);
        self.column += n;
    }

    /// Step over one line break. `\r\n` counts as a single break.
    #[inline]
    pub(crate) fn bump_newline(&mut self) {
        if self.current() == b'\r' && self.cursor.peek() == b'\n' {
            self.cursor.advance_n(2);
        } else {
            self.cursor.advance();
        }
        self.line += 1;
        self.column = 0;
    }

    /// Decode and step over one scalar.
    ///
    /// A malformed byte is reported, skipped on its own, and read as U+FFFD.
    pub(crate) fn bump_rune(&mut self) -> char {
        match utf8::decode(self.cursor.rune_window()) {
            Decoded::Scalar { ch, len } => {
                self.advance_scalar(ch, len);
                ch
            }
            Decoded::Malformed => {
                let at = self.location();
                let byte = self.current();
                self.report(at, LexMessage::MalformedUtf8 { byte });
                self.cursor.advance();
                self.column += 1;
                char::REPLACEMENT_CHARACTER
            }
        }
    }

    /// Step over an already decoded scalar of `len` bytes.
    #[inline]
    pub(crate) fn advance_scalar(&mut self, ch: char, len: u32) {
        self.cursor.advance_n(len);
        self.column += utf8::rune_width(ch);
    }

    /// Number of spaces and tabs stepped over.
    pub(crate) fn eat_blanks(&mut self) -> u32 {
        let start = self.pos();
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        let n = self.pos() - start;
        self.column += n;
        n
    }

    /// Move to the next `\n`/`\r` or the end of input, without consuming the
    /// line break.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a line is a slice of the source, whose length fits in u32"
    )]
    pub(crate) fn skip_to_line_end(&mut self) {
        let end = self.cursor.find_line_end();
        let line = self.cursor.slice(self.pos(), end);
        if line.is_ascii() {
            self.bump_n(line.len() as u32);
            return;
        }
        while self.pos() < end {
            if self.current().is_ascii() {
                self.cursor.advance();
                self.column += 1;
            } else {
                self.bump_rune();
            }
        }
    }

    /// Append a token from `start` to the cursor.
    #[inline]
    pub(crate) fn push_token(
        &mut self,
        kind: TokenKind,
        start: Location,
        value: TokenValue,
    ) -> TokenIndex {
        let span = Span::between(start, self.cursor.pos());
        self.out.tokens.push(kind, span, value)
    }

    /// Report a defect at a single point.
    #[cold]
    pub(crate) fn report(&mut self, at: Location, message: LexMessage) {
        self.out
            .diagnostics
            .push(Diagnostic::at(self.file, at, message));
    }

    /// Report a defect spanning from `start` to the cursor.
    #[cold]
    pub(crate) fn report_span(&mut self, start: Location, message: LexMessage) {
        let end = self.location();
        self.out
            .diagnostics
            .push(Diagnostic::spanning(self.file, start, end, message));
    }
}
