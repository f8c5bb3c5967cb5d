//! Byte classification.
//!
//! Every possible byte value maps to exactly one [`ByteClass`]. The lexer
//! builds its table of scanning functions from [`BYTE_CLASSES`], so adding a
//! class here is how a new byte gets its own scanning function.

/// Class of a single source byte, as seen by the dispatch table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ByteClass {
    /// `0x00`: the sentinel, or an interior NUL.
    Eof,
    /// Control bytes, DEL, stray UTF-8 continuation bytes, and lead bytes
    /// that can never start a valid scalar (`0xC0`, `0xC1`, `0xF5..=0xFF`).
    Invalid,
    /// Space or horizontal tab.
    Space,
    /// `\n` or `\r`.
    NewLine,
    /// ASCII letter.
    Letter,
    Underscore,
    Digit,
    DoubleQuote,
    SingleQuote,
    Dollar,
    Exclamation,
    Hash,
    Percent,
    Ampersand,
    OpenParen,
    CloseParen,
    Asterisk,
    Plus,
    Comma,
    Minus,
    Dot,
    Slash,
    Colon,
    Semicolon,
    LessThan,
    Equal,
    GreaterThan,
    Question,
    At,
    OpenBracket,
    Backslash,
    CloseBracket,
    Caret,
    Backtick,
    OpenBrace,
    Pipe,
    CloseBrace,
    Tilde,
    /// Lead byte of a two-byte UTF-8 sequence.
    Utf8Lead2,
    /// Lead byte of a three-byte UTF-8 sequence.
    Utf8Lead3,
    /// Lead byte of a four-byte UTF-8 sequence.
    Utf8Lead4,
}

impl ByteClass {
    /// Number of classes.
    pub const COUNT: usize = ByteClass::Utf8Lead4 as usize + 1;

    /// Class of byte `b`.
    pub const fn of(b: u8) -> Self {
        match b {
            0x00 => Self::Eof,
            b' ' | b'\t' => Self::Space,
            b'\n' | b'\r' => Self::NewLine,
            b'a'..=b'z' | b'A'..=b'Z' => Self::Letter,
            b'_' => Self::Underscore,
            b'0'..=b'9' => Self::Digit,
            b'"' => Self::DoubleQuote,
            b'\'' => Self::SingleQuote,
            b'$' => Self::Dollar,
            b'!' => Self::Exclamation,
            b'#' => Self::Hash,
            b'%' => Self::Percent,
            b'&' => Self::Ampersand,
            b'(' => Self::OpenParen,
            b')' => Self::CloseParen,
            b'*' => Self::Asterisk,
            b'+' => Self::Plus,
            b',' => Self::Comma,
            b'-' => Self::Minus,
            b'.' => Self::Dot,
            b'/' => Self::Slash,
            b':' => Self::Colon,
            b';' => Self::Semicolon,
            b'<' => Self::LessThan,
            b'=' => Self::Equal,
            b'>' => Self::GreaterThan,
            b'?' => Self::Question,
            b'@' => Self::At,
            b'[' => Self::OpenBracket,
            b'\\' => Self::Backslash,
            b']' => Self::CloseBracket,
            b'^' => Self::Caret,
            b'`' => Self::Backtick,
            b'{' => Self::OpenBrace,
            b'|' => Self::Pipe,
            b'}' => Self::CloseBrace,
            b'~' => Self::Tilde,
            0xC2..=0xDF => Self::Utf8Lead2,
            0xE0..=0xEF => Self::Utf8Lead3,
            0xF0..=0xF4 => Self::Utf8Lead4,
            _ => Self::Invalid,
        }
    }

    /// Returns `true` for a byte that starts a multi-byte UTF-8 sequence.
    pub const fn is_utf8_lead(self) -> bool {
        matches!(self, Self::Utf8Lead2 | Self::Utf8Lead3 | Self::Utf8Lead4)
    }
}

/// Class of every byte value, indexed by the byte.
pub static BYTE_CLASSES: [ByteClass; 256] = {
    let mut table = [ByteClass::Invalid; 256];
    let mut i = 0usize;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "i < 256 so the cast to u8 is lossless"
        )]
        let b = i as u8;
        table[i] = ByteClass::of(b);
        i += 1;
    }
    table
};

/// Class of byte `b`, by table lookup.
#[inline]
pub fn byte_class(b: u8) -> ByteClass {
    BYTE_CLASSES[b as usize]
}

static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "i < 256 so the cast to u8 is lossless"
        )]
        let b = i as u8;
        table[i] = matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_');
        i += 1;
    }
    table
};

/// Returns `true` if `b` is an ASCII identifier continuation byte.
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

#[cfg(test)]
mod tests;
