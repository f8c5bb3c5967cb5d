//! Per-file bookkeeping of a lexing context.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::TokenIndex;

/// Index of a file in the order it was lexed into a context.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FileId(u32);

impl FileId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        FileId(index)
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where one file's tokens live in the shared token list.
///
/// `begin_token..end_token` is half-open and includes the file's `Eof`
/// token, so it is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerFileEntry {
    pub path: PathBuf,
    /// Length of the source in bytes.
    pub byte_len: u32,
    pub begin_token: TokenIndex,
    pub end_token: TokenIndex,
}

impl LexerFileEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of tokens, `Eof` included.
    pub fn token_count(&self) -> u32 {
        self.end_token - self.begin_token
    }

    /// Returns `true` if token `index` belongs to this file.
    pub fn contains_token(&self, index: TokenIndex) -> bool {
        index >= self.begin_token && index < self.end_token
    }
}

#[cfg(test)]
mod tests;
