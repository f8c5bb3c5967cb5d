//! Comments and `/`.
//!
//! - `// ...` runs to the end of the line, line break excluded.
//! - `/// ...` (three or more slashes) is a documentation comment.
//! - `/* ... */` nests.

use tarn_diagnostic::LexMessage;
use tarn_ir::{Location, TokenKind, TokenValue};

use crate::dispatch::Flow;
use crate::scanner::Scanner;

pub(crate) fn scan_slash(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    match s.cursor.peek() {
        b'/' => {
            let doc = s.cursor.peek2() == b'/';
            s.skip_to_line_end();
            let kind = if doc {
                TokenKind::CommentDocumentation
            } else {
                TokenKind::CommentSingleLine
            };
            s.push_token(kind, start, TokenValue::None);
        }
        b'*' => scan_block(s, start),
        _ => {
            s.bump();
            s.push_token(TokenKind::Slash, start, TokenValue::None);
        }
    }
    Flow::Continue
}

fn scan_block(s: &mut Scanner<'_>, start: Location) {
    s.bump_n(2);
    let mut depth = 1u32;
    while depth > 0 {
        match s.current() {
            b'*' if s.cursor.peek() == b'/' => {
                s.bump_n(2);
                depth -= 1;
            }
            b'/' if s.cursor.peek() == b'*' => {
                s.bump_n(2);
                depth += 1;
            }
            b'\n' | b'\r' => s.bump_newline(),
            0 if s.is_eof() => {
                s.report_span(start, LexMessage::UnterminatedComment { depth });
                break;
            }
            b if b.is_ascii() => s.bump(),
            _ => {
                s.bump_rune();
            }
        }
    }
    s.push_token(TokenKind::CommentMultiLine, start, TokenValue::None);
}
