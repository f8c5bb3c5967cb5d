//! Reserved word recognition.
//!
//! The identifier scanner folds a [`ContentHash`] as it goes, so a lookup is
//! one hash probe plus a byte comparison against each candidate with that
//! hash. The table is built on first use and never changes afterwards.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tarn_ir::{ContentHash, TokenKind};

type Candidates = SmallVec<[(&'static [u8], TokenKind); 1]>;

struct KeywordTable {
    by_hash: FxHashMap<u32, Candidates>,
    shortest: usize,
    longest: usize,
}

static TABLE: OnceLock<KeywordTable> = OnceLock::new();

fn table() -> &'static KeywordTable {
    TABLE.get_or_init(build)
}

fn build() -> KeywordTable {
    let mut by_hash: FxHashMap<u32, Candidates> = FxHashMap::default();
    let mut shortest = usize::MAX;
    let mut longest = 0;
    for kind in TokenKind::KEYWORDS {
        let Some(text) = kind.lexeme() else {
            continue;
        };
        let bytes = text.as_bytes();
        shortest = shortest.min(bytes.len());
        longest = longest.max(bytes.len());
        by_hash
            .entry(ContentHash::of(bytes).value())
            .or_default()
            .push((bytes, kind));
    }
    KeywordTable {
        by_hash,
        shortest,
        longest,
    }
}

/// Keyword spelled by `bytes`, whose content hash is `hash`.
#[inline]
pub(crate) fn lookup(bytes: &[u8], hash: ContentHash) -> Option<TokenKind> {
    debug_assert_eq!(hash, ContentHash::of(bytes), "stale identifier hash");
    let table = table();
    if bytes.len() < table.shortest || bytes.len() > table.longest {
        return None;
    }
    table
        .by_hash
        .get(&hash.value())?
        .iter()
        .find(|(text, _)| *text == bytes)
        .map(|&(_, kind)| kind)
}

/// Keyword spelled by `text`, if any.
pub fn keyword(text: &str) -> Option<TokenKind> {
    let bytes = text.as_bytes();
    lookup(bytes, ContentHash::of(bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
