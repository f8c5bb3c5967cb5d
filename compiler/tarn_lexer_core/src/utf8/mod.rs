//! UTF-8 decoding and display width.
//!
//! The scanner decodes one scalar at a time from a four-byte window (see
//! [`Cursor::rune_window`](crate::Cursor::rune_window)). Malformed sequences
//! consume exactly one byte so the caller always makes progress.

use unicode_width::UnicodeWidthChar;

/// Result of decoding the scalar at the start of a byte window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed scalar and its encoded length in bytes.
    Scalar { ch: char, len: u32 },
    /// The leading byte does not start a well-formed sequence. Skip one byte.
    Malformed,
}

/// Encoded length announced by a lead byte, or 0 for a byte that cannot
/// start a sequence.
#[inline]
pub const fn sequence_len(lead: u8) -> u32 {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode the scalar at the start of `window`.
///
/// Overlong encodings, surrogates, values above U+10FFFF, and truncated
/// sequences are all [`Decoded::Malformed`].
pub fn decode(window: &[u8]) -> Decoded {
    let Some(&lead) = window.first() else {
        return Decoded::Malformed;
    };
    let len = sequence_len(lead);
    if len == 0 || window.len() < len as usize {
        return Decoded::Malformed;
    }
    match std::str::from_utf8(&window[..len as usize]) {
        Ok(s) => match s.chars().next() {
            Some(ch) => Decoded::Scalar { ch, len },
            None => Decoded::Malformed,
        },
        Err(_) => Decoded::Malformed,
    }
}

/// Number of columns `ch` occupies.
///
/// ASCII (tab included) is always one column. Other scalars use their East
/// Asian width: 2 for wide characters, 0 for combining marks and other
/// zero-width scalars.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "display widths are at most 2"
)]
pub fn rune_width(ch: char) -> u32 {
    if ch.is_ascii() {
        1
    } else {
        ch.width().unwrap_or(0) as u32
    }
}
