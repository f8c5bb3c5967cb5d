//! Hash-consing string table.
//!
//! Identifier names and decoded literal contents are stored once, in one
//! append-only byte buffer. Interning the same bytes twice yields the same
//! [`Utf8StringHandle`], so handle equality is content equality.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{AppendBuffer, ContentHash, ResetPolicy};

/// Reference to interned content: a range of the table's byte buffer.
///
/// The empty handle `(0, 0)` stands for every empty string.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Utf8StringHandle {
    offset: u32,
    len: u32,
}

impl Utf8StringHandle {
    pub const EMPTY: Utf8StringHandle = Utf8StringHandle { offset: 0, len: 0 };

    #[inline]
    pub const fn offset(self) -> u32 {
        self.offset
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Append-only, content-addressed string storage.
///
/// Lookup is keyed by `(hash, len)`; every candidate under a key is confirmed
/// by comparing bytes, so hash collisions cost a comparison and nothing more.
#[derive(Clone, Debug, Default)]
pub struct StringTable {
    bytes: AppendBuffer<u8>,
    map: FxHashMap<(u32, u32), SmallVec<[Utf8StringHandle; 1]>>,
    count: u32,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with room for `capacity` content bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        StringTable {
            bytes: AppendBuffer::with_capacity(capacity),
            map: FxHashMap::default(),
            count: 0,
        }
    }

    /// Intern `bytes`, hashing them first.
    pub fn intern(&mut self, bytes: &[u8]) -> Utf8StringHandle {
        self.intern_hashed(bytes, ContentHash::of(bytes))
    }

    /// Intern `bytes` whose hash the caller already folded.
    ///
    /// `hash` must equal `ContentHash::of(bytes)`.
    pub fn intern_hashed(&mut self, bytes: &[u8], hash: ContentHash) -> Utf8StringHandle {
        debug_assert_eq!(hash, ContentHash::of(bytes), "stale content hash");
        if bytes.is_empty() {
            return Utf8StringHandle::EMPTY;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "interned content comes from a source of at most u32::MAX bytes"
        )]
        let len = bytes.len() as u32;

        let candidates = self.map.entry((hash.value(), len)).or_default();
        for &handle in candidates.iter() {
            let start = handle.offset as usize;
            if &self.bytes.as_slice()[start..start + handle.len as usize] == bytes {
                return handle;
            }
        }

        let range = self.bytes.extend_from_slice(bytes);
        let handle = Utf8StringHandle {
            offset: range.start,
            len,
        };
        candidates.push(handle);
        self.count += 1;
        handle
    }

    /// Bytes of `handle`. Handles from another table resolve to `&[]`.
    pub fn resolve(&self, handle: Utf8StringHandle) -> &[u8] {
        self.bytes
            .slice(handle.offset..handle.offset + handle.len)
            .unwrap_or_default()
    }

    /// Content of `handle` as text.
    ///
    /// Interned content is always valid UTF-8: the lexer replaces malformed
    /// source bytes with U+FFFD before interning.
    pub fn resolve_str(&self, handle: Utf8StringHandle) -> &str {
        std::str::from_utf8(self.resolve(handle)).unwrap_or_default()
    }

    /// Number of distinct non-empty strings.
    pub fn len(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total content bytes stored.
    pub fn byte_len(&self) -> u32 {
        self.bytes.len()
    }

    /// Forget every string. Issued handles become dangling.
    pub fn reset(&mut self, policy: ResetPolicy) {
        self.bytes.reset(policy);
        self.count = 0;
        match policy {
            ResetPolicy::ReleaseMemory => self.map = FxHashMap::default(),
            ResetPolicy::KeepCommitted => self.map.clear(),
        }
    }
}
