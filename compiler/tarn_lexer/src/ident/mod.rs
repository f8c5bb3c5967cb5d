//! Identifiers, keywords, and discards.

use tarn_diagnostic::LexMessage;
use tarn_ir::{ContentHash, TokenKind, TokenValue};
use tarn_lexer_core::is_ident_continue;
use tarn_lexer_core::utf8::{self, Decoded};

use crate::dispatch::Flow;
use crate::keywords;
use crate::scanner::Scanner;

/// Identifier starting with an ASCII letter, `_`, or (via [`scan_unicode`])
/// an alphabetic scalar.
///
/// A run made only of underscores is a discard, `Underscores`, no matter
/// how long. Keywords carry no value; other identifiers are interned.
pub(crate) fn scan_identifier(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    let mut hash = ContentHash::EMPTY;
    let mut only_underscores = true;
    loop {
        let b = s.current();
        if is_ident_continue(b) {
            hash = hash.push(b);
            only_underscores &= b == b'_';
            s.bump();
        } else if b.is_ascii() {
            break;
        } else {
            match utf8::decode(s.cursor.rune_window()) {
                Decoded::Scalar { ch, len } if ch.is_alphanumeric() => {
                    let pos = s.pos();
                    hash = hash.push_bytes(s.cursor.slice(pos, pos + len));
                    only_underscores = false;
                    s.advance_scalar(ch, len);
                }
                _ => break,
            }
        }
    }

    if only_underscores {
        s.push_token(TokenKind::Underscores, start, TokenValue::None);
        return Flow::Continue;
    }
    let text = s.cursor.slice_from(start.offset);
    match keywords::lookup(text, hash) {
        Some(kind) => {
            s.push_token(kind, start, TokenValue::None);
        }
        None => {
            let handle = s.out.strings.intern_hashed(text, hash);
            s.push_token(TokenKind::Identifier, start, TokenValue::String(handle));
        }
    }
    Flow::Continue
}

/// A byte at or above `0x80` in code position.
pub(crate) fn scan_unicode(s: &mut Scanner<'_>) -> Flow {
    let start = s.location();
    match utf8::decode(s.cursor.rune_window()) {
        Decoded::Scalar { ch, .. } if ch.is_alphabetic() => return scan_identifier(s),
        Decoded::Scalar { ch, len } => {
            s.advance_scalar(ch, len);
            s.report(start, LexMessage::UnexpectedCharacter { ch });
        }
        Decoded::Malformed => {
            let byte = s.current();
            s.bump_n(1);
            s.report(start, LexMessage::MalformedUtf8 { byte });
        }
    }
    s.push_token(TokenKind::Invalid, start, TokenValue::None);
    Flow::Continue
}
