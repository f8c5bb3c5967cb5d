//! Interpolation regions.
//!
//! A literal with `n` leading `$` opens a region on a run of at least `n`
//! `{` and closes it on a run of at least `n` `}` outside any brace pair
//! opened inside the region. Exactly `n` braces form each delimiter token;
//! the rest of a longer run is literal text.
//!
//! The region's tokens come from the ordinary dispatch loop, so regions
//! nest: a region may hold another interpolated literal.

use tarn_diagnostic::LexMessage;
use tarn_ir::{Location, TokenKind, TokenValue};
use tracing::{trace, warn};

use crate::dispatch;
use crate::scanner::Scanner;
use crate::stack::ensure_sufficient_stack;

/// How a region ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RegionEnd {
    /// The closing braces were consumed and the `End` token pushed.
    Closed,
    /// Input ran out inside the region. The enclosing literal ends too.
    Eof,
}

/// Tokenize one region, cursor on its opening braces.
///
/// Pushes `StringInterpolatedBegin`, the region's tokens, and (unless input
/// runs out) `StringInterpolatedEnd`.
pub(crate) fn scan_region(s: &mut Scanner<'_>, dollars: u32) -> RegionEnd {
    let begin = s.location();
    s.bump_n(dollars);
    s.push_token(TokenKind::StringInterpolatedBegin, begin, TokenValue::None);

    let limit = s.options.max_interpolation_depth;
    if s.interpolation_depth >= limit {
        warn!(
            limit,
            offset = begin.offset,
            "interpolation nesting limit reached, skipping region"
        );
        s.report(begin, LexMessage::InterpolationTooDeep { limit });
        return skip_region(s, dollars, begin);
    }

    s.interpolation_depth += 1;
    trace!(
        depth = s.interpolation_depth,
        offset = begin.offset,
        "enter interpolation"
    );
    let end = ensure_sufficient_stack(|| tokenize_region(s, dollars, begin));
    trace!(depth = s.interpolation_depth, ?end, "leave interpolation");
    s.interpolation_depth -= 1;
    end
}

fn tokenize_region(s: &mut Scanner<'_>, dollars: u32, begin: Location) -> RegionEnd {
    let mut depth = 0u32;
    loop {
        if s.is_eof() {
            s.report_span(begin, LexMessage::UnterminatedInterpolation);
            return RegionEnd::Eof;
        }
        match s.current() {
            b'}' if depth == 0 && s.cursor.run_length(b'}') >= dollars => {
                close_region(s, dollars);
                return RegionEnd::Closed;
            }
            b'{' => depth += 1,
            b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        dispatch::step(s);
    }
}

/// Step over a region nested too deep as plain text, keeping it as one
/// `Invalid` token.
fn skip_region(s: &mut Scanner<'_>, dollars: u32, begin: Location) -> RegionEnd {
    let start = s.location();
    let mut depth = 0u32;
    let end = loop {
        match s.current() {
            b'}' if depth == 0 && s.cursor.run_length(b'}') >= dollars => {
                break RegionEnd::Closed;
            }
            b'{' => {
                depth += 1;
                s.bump();
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                s.bump();
            }
            b'\n' | b'\r' => s.bump_newline(),
            0 if s.is_eof() => break RegionEnd::Eof,
            b if b.is_ascii() => s.bump(),
            _ => {
                s.bump_rune();
            }
        }
    };
    if s.pos() > start.offset {
        s.push_token(TokenKind::Invalid, start, TokenValue::None);
    }
    match end {
        RegionEnd::Closed => close_region(s, dollars),
        RegionEnd::Eof => s.report_span(begin, LexMessage::UnterminatedInterpolation),
    }
    end
}

fn close_region(s: &mut Scanner<'_>, dollars: u32) {
    let at = s.location();
    s.bump_n(dollars);
    s.push_token(TokenKind::StringInterpolatedEnd, at, TokenValue::None);
}
