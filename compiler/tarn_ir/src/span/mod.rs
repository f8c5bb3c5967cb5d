//! Source positions.
//!
//! Lines and columns are zero-based. Columns count display cells, not bytes:
//! a CJK ideograph advances the column by two, a combining mark by zero.

use std::fmt;

/// A point in a source file.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Byte offset from the start of the file.
    pub offset: u32,
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[inline]
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Location {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.offset, self.line, self.column)
    }
}

/// Extent of one token.
///
/// `line` and `column` describe the first byte; the end is `offset + len`.
///
/// Layout: 16 bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub offset: u32,
    pub len: u32,
    pub line: u32,
    pub column: u32,
}

const _: () = assert!(std::mem::size_of::<Span>() == 16);

impl Span {
    /// Span from `start` covering `len` bytes.
    #[inline]
    pub const fn new(start: Location, len: u32) -> Self {
        Span {
            offset: start.offset,
            len,
            line: start.line,
            column: start.column,
        }
    }

    /// Span from `start` up to the byte offset `end` (exclusive).
    #[inline]
    pub fn between(start: Location, end: u32) -> Self {
        debug_assert!(end >= start.offset, "span end {end} before start {start:?}");
        Span::new(start, end - start.offset)
    }

    /// Location of the first byte.
    #[inline]
    pub const fn start(&self) -> Location {
        Location::new(self.offset, self.line, self.column)
    }

    /// Byte offset one past the last byte.
    #[inline]
    pub const fn end(&self) -> u32 {
        self.offset + self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if a byte offset is within this span.
    #[inline]
    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.offset && offset < self.end()
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}@{}:{}",
            self.offset,
            self.end(),
            self.line,
            self.column
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}
