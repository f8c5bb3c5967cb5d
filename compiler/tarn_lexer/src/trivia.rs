//! Whitespace and line breaks.

use tarn_ir::{TokenKind, TokenValue};

use crate::dispatch::Flow;
use crate::scanner::Scanner;

/// A run of spaces and tabs.
pub(crate) fn scan_spaces(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    s.eat_blanks();
    s.push_token(TokenKind::Spaces, start, TokenValue::None);
    Flow::Continue
}

/// One line break: `\n`, `\r\n`, or a lone `\r`.
pub(crate) fn scan_newline(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    s.bump_newline();
    s.push_token(TokenKind::NewLine, start, TokenValue::None);
    Flow::Continue
}
