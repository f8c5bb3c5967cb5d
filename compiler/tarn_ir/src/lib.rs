//! Shared data model of the Tarn front end.
//!
//! Everything here is index-based: tokens are addressed by [`TokenIndex`],
//! interned strings by [`Utf8StringHandle`], files by [`FileId`]. Storage grows
//! by appending, so an issued index stays valid until the owning context is
//! reset.

mod arena;
mod file;
mod hash;
mod span;
mod strings;
mod token;

pub use arena::{AppendBuffer, ResetPolicy};
pub use file::{FileId, LexerFileEntry};
pub use hash::ContentHash;
pub use span::{Location, Span};
pub use strings::{StringTable, Utf8StringHandle};
pub use token::{Token, TokenIndex, TokenKind, TokenList, TokenValue};
