//! Sentinel-terminated source buffer.
//!
//! The buffer stores the source bytes followed by a `0x00` sentinel and a
//! zero-filled tail. The total length is rounded up to the next 64-byte
//! boundary, and at least [`LOOKAHEAD`] zero bytes always follow the sentinel,
//! so `peek_at(n)` for `n <= LOOKAHEAD` and UTF-8 decoding of a truncated
//! sequence at the very end of the file never index out of bounds.
//!
//! Source bytes are taken as-is. Nothing is validated here: malformed UTF-8
//! and interior NUL bytes are the scanner's business.

use std::io::{self, Read};

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the sentinel.
pub(crate) const LOOKAHEAD: usize = 8;

/// Source bytes with a `0x00` sentinel and zero padding.
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new padded buffer.
    ///
    /// Inputs larger than `u32::MAX` bytes are truncated to `u32::MAX`: every
    /// offset in the token stream is a `u32`.
    pub fn from_bytes(source: &[u8]) -> Self {
        let source = &source[..source.len().min(u32::MAX as usize)];
        let mut buf = Vec::with_capacity(padded_len(source.len()));
        buf.extend_from_slice(source);
        Self::seal(buf)
    }

    /// Copy a UTF-8 source string into a new padded buffer.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Read everything from `reader` into a new padded buffer.
    pub fn from_reader(mut reader: impl Read) -> io::Result<Self> {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        buf.truncate(u32::MAX as usize);
        Ok(Self::seal(buf))
    }

    /// Append the sentinel and padding to raw source bytes.
    fn seal(mut buf: Vec<u8>) -> Self {
        let source_len = buf.len();
        buf.resize(padded_len(source_len), 0);
        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// Buffer length for `source_len` bytes: sentinel plus lookahead, rounded up
/// to a cache line.
fn padded_len(source_len: usize) -> usize {
    (source_len + 1 + LOOKAHEAD + CACHE_LINE - 1) & !(CACHE_LINE - 1)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
