//! Incremental content hash.
//!
//! 32-bit FNV-1a. Scanners fold each byte in as they copy it, so interning
//! and keyword lookup never rehash the content.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a hash of a byte sequence, built one byte at a time.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ContentHash(u32);

impl ContentHash {
    /// Hash of the empty sequence.
    pub const EMPTY: ContentHash = ContentHash(FNV_OFFSET_BASIS);

    /// Fold one more byte into the hash.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless, reason = "u32::from is not callable in const fn")]
    pub const fn push(self, b: u8) -> ContentHash {
        ContentHash((self.0 ^ b as u32).wrapping_mul(FNV_PRIME))
    }

    /// Fold `bytes` into the hash.
    #[inline]
    #[must_use]
    pub fn push_bytes(self, bytes: &[u8]) -> ContentHash {
        bytes.iter().fold(self, |h, &b| h.push(b))
    }

    /// Hash of `bytes`.
    #[inline]
    pub const fn of(bytes: &[u8]) -> ContentHash {
        let mut hash = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            hash = hash.push(bytes[i]);
            i += 1;
        }
        hash
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for ContentHash {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests;
