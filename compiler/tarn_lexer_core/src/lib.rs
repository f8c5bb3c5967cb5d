//! Byte-level substrate for the Tarn lexer.
//!
//! This crate knows nothing about tokens. It owns the pieces every scanning
//! function leans on:
//!
//! - [`SourceBuffer`]: source bytes followed by a `0x00` sentinel and zero
//!   padding, so lookahead never needs a bounds check.
//! - [`Cursor`]: a `Copy` read head over that buffer.
//! - [`ByteClass`] and [`byte_class`]: the 256-entry classification table the
//!   dispatch table is built from.
//! - [`utf8`]: decoding of multi-byte scalars and their display width.

mod byte_class;
mod cursor;
mod source_buffer;
pub mod utf8;

pub use byte_class::{byte_class, is_ident_continue, ByteClass, BYTE_CLASSES};
pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
