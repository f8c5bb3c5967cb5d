//! Read head over a sentinel-terminated buffer.
//!
//! EOF is the sentinel: the current byte is `0x00` and the position has
//! reached the source length. A `0x00` at `pos < source_len` is an interior
//! NUL, which the scanner turns into an `Invalid` token.
//!
//! The cursor tracks byte offsets only. Line and column bookkeeping belongs to
//! the scanner, which knows which bytes are newlines and how wide a rune is.

/// Zero-cost cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a snapshot is just a copy.
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and at least eight zero bytes follow it.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Returns the byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Returns the byte `n` positions ahead of current.
    ///
    /// Reads past the padding return `0x00` instead of panicking.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        self.buf
            .get(self.pos as usize + n as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Up to four bytes starting at the current position, for UTF-8 decoding.
    ///
    /// Never shorter than four bytes: the padding covers the tail.
    #[inline]
    pub fn rune_window(&self) -> &'a [u8] {
        let start = self.pos as usize;
        &self.buf[start..start + 4]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.buf[start as usize..end as usize]
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        self.slice(start, self.pos)
    }

    /// Source bytes from the current position to the end of the source.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of consecutive `byte`s starting at the current position.
    ///
    /// Does not move the cursor. `byte` must not be `0x00`.
    pub fn run_length(&self, byte: u8) -> u32 {
        debug_assert!(byte != 0, "the sentinel cannot be counted");
        let mut n = 0;
        while self.buf[self.pos as usize + n as usize] == byte {
            n += 1;
        }
        n
    }

    /// Offset of the next `\n` or `\r` at or after the current position,
    /// or the source length when there is none.
    ///
    /// Does not move the cursor.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "rest().len() <= source_len which fits in u32"
    )]
    pub fn find_line_end(&self) -> u32 {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos + offset as u32,
            None => self.source_len,
        }
    }
}
