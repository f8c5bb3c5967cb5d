//! Raw multi-line strings.
//!
//! ```text
//! let query = """
//!     select *
//!       from t
//!     """
//! ```
//!
//! A run of three or more `"` opens the literal and a run at least as long
//! closes it. The opening line must end right after the fence, and the
//! closing fence sits alone on its line. Between them every interior line is
//! recorded as a [`StringMultiLineState`]; when the literal closes, the
//! smallest indentation among non-blank lines is removed from every line,
//! blank lines become empty, and line breaks are normalized to `\n`. The
//! break before the closing line is not part of the value. Escapes are not
//! decoded.
//!
//! With a `$` prefix, interpolation regions may appear in interior lines.
//! Segment tokens are pushed as regions are met and their values patched in
//! once the indentation is known.

use smallvec::SmallVec;
use tarn_diagnostic::LexMessage;
use tarn_ir::{Location, TokenIndex, TokenKind, TokenValue, Utf8StringHandle};
use tarn_lexer_core::utf8::{self, Decoded};
use tracing::trace;

use super::interpolation::{self, RegionEnd};
use super::Content;
use crate::scanner::Scanner;

/// Shortest quote run that opens a raw literal.
pub(crate) const MIN_FENCE: u32 = 3;

/// One interior line of the literal being scanned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct StringMultiLineState {
    /// Offset of the first byte of the line.
    pub(crate) offset: u32,
    /// Spaces and tabs before the first other byte.
    pub(crate) leading_whitespace: u32,
    pub(crate) line: u32,
    /// Nothing but spaces and tabs.
    pub(crate) is_space_only: bool,
}

impl StringMultiLineState {
    fn location(&self) -> Location {
        Location::new(self.offset, self.line, 0)
    }
}

/// Source range of one segment's text.
#[derive(Copy, Clone, Debug)]
struct Segment {
    start: u32,
    end: u32,
    /// The range begins at the start of a line, so its indentation is
    /// subject to stripping.
    at_line_start: bool,
}

/// How an interior line ended.
enum LineEnd {
    NewLine,
    Eof,
    /// A closing fence of this many quotes after other text.
    Fence(u32),
    /// Input ran out inside an interpolation region.
    RegionEof,
}

struct RawLiteral {
    start: Location,
    fence: u32,
    dollars: u32,
    kind: TokenKind,
    segment_start: Location,
    text_start: u32,
    at_line_start: bool,
    /// Segments already pushed as tokens, waiting for their values.
    pending: SmallVec<[(TokenIndex, Segment); 2]>,
    lines: Vec<StringMultiLineState>,
    saw_space: bool,
    saw_tab: bool,
}

/// Raw literal with a `fence`-quote opening, cursor on the first quote.
///
/// `start` is where the literal began, `$` prefix included. `dollars` is
/// the prefix length, 0 for a plain raw string.
pub(crate) fn scan_raw(s: &mut Scanner<'_>, start: Location, fence: u32, dollars: u32) {
    s.bump_n(fence);
    let mut lit = RawLiteral {
        start,
        fence,
        dollars,
        kind: if dollars > 0 {
            TokenKind::StringInterpolatedMacro
        } else {
            TokenKind::String
        },
        segment_start: start,
        text_start: s.pos(),
        at_line_start: true,
        pending: SmallVec::new(),
        lines: Vec::new(),
        saw_space: false,
        saw_tab: false,
    };

    s.eat_blanks();
    if !s.at_line_end() {
        let at = s.location();
        s.report(at, LexMessage::RawStringFirstLineNotEmpty);
        s.skip_to_line_end();
    }
    if s.is_eof() {
        s.report_span(start, LexMessage::UnterminatedRawString);
        let end = s.pos();
        lit.text_start = end;
        lit.finish(s, end);
        return;
    }
    s.bump_newline();
    lit.text_start = s.pos();
    let mut content_end = s.pos();

    loop {
        let line_start = s.location();
        let leading = lit.eat_indentation(s);
        if s.current() == b'"' {
            let run = s.cursor.run_length(b'"');
            if run >= fence {
                lit.close(s, content_end, Some(leading), run);
                return;
            }
        }
        lit.lines.push(StringMultiLineState {
            offset: line_start.offset,
            leading_whitespace: leading,
            line: line_start.line,
            is_space_only: s.at_line_end(),
        });

        match lit.scan_line(s) {
            LineEnd::NewLine => {
                content_end = s.pos();
                s.bump_newline();
            }
            LineEnd::Eof => {
                s.report_span(start, LexMessage::UnterminatedRawString);
                let end = s.pos();
                lit.finish(s, end);
                return;
            }
            LineEnd::Fence(run) => {
                let at = s.location();
                s.report(at, LexMessage::RawStringLastLineNotEmpty);
                let end = s.pos();
                lit.close(s, end, None, run);
                return;
            }
            LineEnd::RegionEof => {
                let strip = lit.strip();
                lit.patch_pending(s, strip);
                return;
            }
        }
    }
}

impl RawLiteral {
    /// Step over a line's indentation and return its width in bytes.
    fn eat_indentation(&mut self, s: &mut Scanner<'_>) -> u32 {
        let at = s.location();
        let mixed_before = self.saw_space && self.saw_tab;
        let mut n = 0;
        loop {
            match s.current() {
                b' ' => self.saw_space = true,
                b'\t' => self.saw_tab = true,
                _ => break,
            }
            s.bump();
            n += 1;
        }
        if !mixed_before && self.saw_space && self.saw_tab {
            s.report(at, LexMessage::RawStringMixedIndentation);
        }
        n
    }

    /// Scan the rest of an interior line, up to but not including its line
    /// break.
    fn scan_line(&mut self, s: &mut Scanner<'_>) -> LineEnd {
        loop {
            let b = s.current();
            match b {
                b'\n' | b'\r' => return LineEnd::NewLine,
                0 if s.is_eof() => return LineEnd::Eof,
                b'"' => {
                    let run = s.cursor.run_length(b'"');
                    if run >= self.fence {
                        return LineEnd::Fence(run);
                    }
                    s.bump_n(run);
                }
                b'{' if self.dollars > 0 => {
                    let braces = s.cursor.run_length(b'{');
                    if braces < self.dollars {
                        s.bump_n(braces);
                        continue;
                    }
                    s.bump_n(braces - self.dollars);
                    self.end_segment(s);
                    if interpolation::scan_region(s, self.dollars) == RegionEnd::Eof {
                        return LineEnd::RegionEof;
                    }
                    self.kind = TokenKind::StringInterpolatedPart;
                    self.segment_start = s.location();
                    self.text_start = s.pos();
                    self.at_line_start = false;
                }
                _ if b.is_ascii() => s.bump(),
                _ => {
                    s.bump_rune();
                }
            }
        }
    }

    /// Push the segment ending at the cursor, value to be patched.
    fn end_segment(&mut self, s: &mut Scanner<'_>) {
        let token = s.push_token(self.kind, self.segment_start, TokenValue::None);
        let segment = Segment {
            start: self.text_start,
            end: s.pos(),
            at_line_start: self.at_line_start,
        };
        self.pending.push((token, segment));
    }

    /// Consume a closing fence of `run` quotes and check the literal's shape.
    ///
    /// `closing_indent` is the closing line's indentation, or `None` when the
    /// fence followed other text.
    fn close(self, s: &mut Scanner<'_>, content_end: u32, closing_indent: Option<u32>, run: u32) {
        let fence_at = s.location();
        s.bump_n(run);
        if run > self.fence {
            s.report_span(
                fence_at,
                LexMessage::RawStringTooManyClosingQuotes {
                    expected: self.fence,
                    found: run,
                },
            );
        }
        if let Some(indent) = closing_indent {
            if self.lines.is_empty() {
                s.report_span(self.start, LexMessage::RawStringEmpty);
            }
            let shallow = self
                .lines
                .iter()
                .find(|line| !line.is_space_only && line.leading_whitespace < indent);
            if let Some(line) = shallow {
                s.report(line.location(), LexMessage::RawStringInconsistentIndentation);
            }
        }
        trace!(
            lines = self.lines.len(),
            fence = self.fence,
            segments = self.pending.len() + 1,
            "raw string closed"
        );
        self.finish(s, content_end);
    }

    /// Indentation removed from every line.
    fn strip(&self) -> u32 {
        self.lines
            .iter()
            .filter(|line| !line.is_space_only)
            .map(|line| line.leading_whitespace)
            .min()
            .unwrap_or(0)
    }

    fn patch_pending(&self, s: &mut Scanner<'_>, strip: u32) {
        for &(token, segment) in &self.pending {
            let handle = render(s, segment, false, strip);
            s.out.tokens.set_value(token, TokenValue::String(handle));
        }
    }

    /// Patch pending segments and push the final one, whose text ends at
    /// `content_end`.
    fn finish(self, s: &mut Scanner<'_>, content_end: u32) {
        let strip = self.strip();
        self.patch_pending(s, strip);
        let last = Segment {
            start: self.text_start,
            end: content_end.max(self.text_start),
            at_line_start: self.at_line_start,
        };
        let handle = render(s, last, true, strip);
        s.push_token(self.kind, self.segment_start, TokenValue::String(handle));
    }
}

/// Build a segment's value from its source text.
///
/// `is_last` marks the final segment, whose trailing indentation-only text
/// is a blank line rather than the indent before a region.
fn render(s: &mut Scanner<'_>, segment: Segment, is_last: bool, strip: u32) -> Utf8StringHandle {
    let bytes = s.cursor.slice(segment.start, segment.end);
    let mut content = Content::begin(s.scratch);
    let mut at_line_start = segment.at_line_start;
    let mut i = 0;
    while i < bytes.len() {
        if at_line_start {
            at_line_start = false;
            let blanks = bytes[i..]
                .iter()
                .take_while(|&&b| b == b' ' || b == b'\t')
                .count();
            let blank_line = match bytes.get(i + blanks) {
                Some(b'\n' | b'\r') => true,
                Some(_) => false,
                None => is_last,
            };
            i += if blank_line {
                blanks
            } else {
                blanks.min(strip as usize)
            };
            continue;
        }
        match bytes[i] {
            b'\r' => {
                content.push(s.scratch, '\n');
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                at_line_start = true;
            }
            b'\n' => {
                content.push(s.scratch, '\n');
                i += 1;
                at_line_start = true;
            }
            b if b.is_ascii() => {
                content.push(s.scratch, char::from(b));
                i += 1;
            }
            _ => match utf8::decode(&bytes[i..bytes.len().min(i + 4)]) {
                Decoded::Scalar { ch, len } => {
                    content.push(s.scratch, ch);
                    i += len as usize;
                }
                Decoded::Malformed => {
                    content.push(s.scratch, char::REPLACEMENT_CHARACTER);
                    i += 1;
                }
            },
        }
    }
    content.intern(s)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
