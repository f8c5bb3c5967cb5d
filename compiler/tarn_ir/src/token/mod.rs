//! Tokens.
//!
//! A token is stored column-wise in [`TokenList`]: its kind, span, and value
//! live at the same [`TokenIndex`] in three parallel arrays. [`Token`] is the
//! row view handed out by [`TokenList::get`].

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use crate::{Span, Utf8StringHandle};

/// Position of a token in a [`TokenList`].
pub type TokenIndex = u32;

/// Payload of a token.
///
/// Floats are stored as their IEEE-754 bits so the value stays `Eq` and
/// `Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    #[default]
    None,
    Integer(u64),
    Float(u64),
    Rune(char),
    String(Utf8StringHandle),
}

impl TokenValue {
    /// Float payload from an `f64`.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenValue::Float(value.to_bits())
    }

    #[inline]
    pub fn as_integer(self) -> Option<u64> {
        match self {
            TokenValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(self) -> Option<f64> {
        match self {
            TokenValue::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    #[inline]
    pub fn as_rune(self) -> Option<char> {
        match self {
            TokenValue::Rune(ch) => Some(ch),
            _ => None,
        }
    }

    #[inline]
    pub fn as_string(self) -> Option<Utf8StringHandle> {
        match self {
            TokenValue::String(handle) => Some(handle),
            _ => None,
        }
    }
}

/// One row of a [`TokenList`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: TokenValue,
}
