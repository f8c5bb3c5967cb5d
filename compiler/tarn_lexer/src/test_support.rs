//! Helpers shared by the unit tests.

use tarn_diagnostic::{Diagnostic, LexMessage};
use tarn_ir::{Span, Token, TokenKind};

use crate::{lex, Lexer, LexerOutput};

pub(crate) fn lex_bytes(source: &[u8]) -> LexerOutput {
    let mut lexer = Lexer::new();
    let mut out = lexer.output();
    lexer.run_bytes(&mut out, "<input>", source);
    out
}

/// Tokens other than trivia and the final `Eof`.
pub(crate) fn significant(out: &LexerOutput) -> Vec<Token> {
    out.tokens()
        .iter()
        .filter(|token| !token.kind.is_trivia() && token.kind != TokenKind::Eof)
        .collect()
}

pub(crate) fn kinds(source: &str) -> Vec<TokenKind> {
    significant(&lex(source))
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

pub(crate) fn all_kinds(out: &LexerOutput) -> Vec<TokenKind> {
    out.tokens().kinds().to_vec()
}

pub(crate) fn messages(out: &LexerOutput) -> Vec<LexMessage> {
    out.diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.message.clone())
        .collect()
}

pub(crate) fn diagnostics(out: &LexerOutput) -> Vec<Diagnostic> {
    out.diagnostics().iter().cloned().collect()
}

/// Text of a token that carries an interned string.
pub(crate) fn text(out: &LexerOutput, token: Token) -> String {
    let handle = token.value.as_string().unwrap();
    out.strings().resolve_str(handle).to_owned()
}

/// The first significant token of `source`.
pub(crate) fn first(source: &str) -> (LexerOutput, Token) {
    let out = lex(source);
    let token = significant(&out)[0];
    (out, token)
}

/// Byte range of a span, for compact assertions.
pub(crate) fn range(span: Span) -> std::ops::Range<u32> {
    span.offset..span.end()
}
