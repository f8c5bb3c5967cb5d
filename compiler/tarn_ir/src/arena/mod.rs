//! Append-only storage.
//!
//! [`AppendBuffer`] hands out `u32` indices on push. Growing the buffer moves
//! its contents, so nothing outside the buffer holds a pointer into it; an
//! index stays meaningful until [`AppendBuffer::reset`].

use std::ops::Range;

/// What [`reset`](AppendBuffer::reset) does with the memory it held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ResetPolicy {
    /// Drop all allocations.
    #[default]
    ReleaseMemory,
    /// Keep the allocations for the next round of appends.
    KeepCommitted,
}

/// Growable, append-only array addressed by `u32` indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppendBuffer<T> {
    items: Vec<T>,
}

impl<T> Default for AppendBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AppendBuffer<T> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        AppendBuffer { items: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        AppendBuffer {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append `item` and return its index.
    #[inline]
    pub fn push(&mut self, item: T) -> u32 {
        let index = self.len();
        self.items.push(item);
        index
    }

    /// Number of items, as a `u32` index bound.
    #[inline]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "buffers are indexed by u32; sources are capped at u32::MAX bytes"
    )]
    pub fn len(&self) -> u32 {
        self.items.len() as u32
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`.
    #[inline]
    pub fn get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)
    }

    /// Replace the item at `index`. Returns `false` if out of bounds.
    #[inline]
    pub fn set(&mut self, index: u32, item: T) -> bool {
        match self.items.get_mut(index as usize) {
            Some(slot) => {
                *slot = item;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Drop every item past `len`.
    pub fn truncate(&mut self, len: u32) {
        self.items.truncate(len as usize);
    }

    /// Allocated capacity in items.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Remove every item.
    pub fn reset(&mut self, policy: ResetPolicy) {
        match policy {
            ResetPolicy::ReleaseMemory => self.items = Vec::new(),
            ResetPolicy::KeepCommitted => self.items.clear(),
        }
    }
}

impl<T: Copy> AppendBuffer<T> {
    /// Append every item of `items` and return the index range they occupy.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Range<u32> {
        let start = self.len();
        self.items.extend_from_slice(items);
        start..self.len()
    }

    /// Items in `range`, or `None` if it is out of bounds.
    #[inline]
    pub fn slice(&self, range: Range<u32>) -> Option<&[T]> {
        self.items.get(range.start as usize..range.end as usize)
    }
}

#[cfg(test)]
mod tests;
