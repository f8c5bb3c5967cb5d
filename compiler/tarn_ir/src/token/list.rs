//! Column-wise token storage.

use super::{Token, TokenIndex, TokenKind, TokenValue};
use crate::{AppendBuffer, ResetPolicy, Span};

/// Tokens of every file lexed into one context, in source order per file.
///
/// Three parallel arrays, one entry per token:
/// `kinds[i]`, `spans[i]`, and `values[i]` describe token `i`. Consumers that
/// only dispatch on kind touch one byte per token.
#[derive(Clone, Debug, Default)]
pub struct TokenList {
    kinds: AppendBuffer<TokenKind>,
    spans: AppendBuffer<Span>,
    values: AppendBuffer<TokenValue>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token list with pre-allocated capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            kinds: AppendBuffer::with_capacity(capacity),
            spans: AppendBuffer::with_capacity(capacity),
            values: AppendBuffer::with_capacity(capacity),
        }
    }

    /// Append one token and return its index.
    #[inline]
    pub fn push(&mut self, kind: TokenKind, span: Span, value: TokenValue) -> TokenIndex {
        let index = self.kinds.push(kind);
        self.spans.push(span);
        self.values.push(value);
        debug_assert_eq!(self.kinds.len(), self.spans.len());
        debug_assert_eq!(self.kinds.len(), self.values.len());
        index
    }

    /// Replace the value of an already-pushed token.
    ///
    /// Used for literals whose content is only known once the literal closes.
    #[inline]
    pub fn set_value(&mut self, index: TokenIndex, value: TokenValue) {
        let replaced = self.values.set(index, value);
        debug_assert!(replaced, "token index {index} out of bounds");
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    #[inline]
    pub fn kinds(&self) -> &[TokenKind] {
        self.kinds.as_slice()
    }

    #[inline]
    pub fn spans(&self) -> &[Span] {
        self.spans.as_slice()
    }

    #[inline]
    pub fn values(&self) -> &[TokenValue] {
        self.values.as_slice()
    }

    #[inline]
    pub fn kind(&self, index: TokenIndex) -> Option<TokenKind> {
        self.kinds.get(index).copied()
    }

    /// Row view of token `index`.
    pub fn get(&self, index: TokenIndex) -> Option<Token> {
        Some(Token {
            kind: *self.kinds.get(index)?,
            span: *self.spans.get(index)?,
            value: *self.values.get(index)?,
        })
    }

    /// Iterate over tokens in `start..end`.
    pub fn range(&self, start: TokenIndex, end: TokenIndex) -> impl Iterator<Item = Token> + '_ {
        (start..end.min(self.len())).filter_map(move |i| self.get(i))
    }

    /// Iterate over every token.
    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.range(0, self.len())
    }

    /// Remove every token.
    pub fn reset(&mut self, policy: ResetPolicy) {
        self.kinds.reset(policy);
        self.spans.reset(policy);
        self.values.reset(policy);
    }
}
