use super::*;
use pretty_assertions::assert_eq;

#[test]
fn push_returns_sequential_indices() {
    let mut buf = AppendBuffer::new();
    assert_eq!(buf.push('a'), 0);
    assert_eq!(buf.push('b'), 1);
    assert_eq!(buf.len(), 2);
    assert_eq!(buf.get(1), Some(&'b'));
    assert_eq!(buf.get(2), None);
}

#[test]
fn extend_returns_range() {
    let mut buf = AppendBuffer::new();
    buf.push(0u8);
    let range = buf.extend_from_slice(b"abc");
    assert_eq!(range, 1..4);
    assert_eq!(buf.slice(range), Some(&b"abc"[..]));
}

#[test]
fn indices_survive_growth() {
    let mut buf = AppendBuffer::with_capacity(1);
    let first = buf.push(10u32);
    for i in 0..1000 {
        buf.push(i);
    }
    assert_eq!(buf.get(first), Some(&10));
}

#[test]
fn set_replaces_in_place() {
    let mut buf = AppendBuffer::new();
    buf.push(1);
    assert!(buf.set(0, 5));
    assert!(!buf.set(3, 5));
    assert_eq!(buf.as_slice(), &[5]);
}

// === Reset ===

#[test]
fn reset_keep_committed_retains_capacity() {
    let mut buf = AppendBuffer::with_capacity(64);
    buf.extend_from_slice(&[1u8; 64]);
    buf.reset(ResetPolicy::KeepCommitted);
    assert!(buf.is_empty());
    assert!(buf.capacity() >= 64);
}

#[test]
fn reset_release_memory_frees_capacity() {
    let mut buf = AppendBuffer::with_capacity(64);
    buf.extend_from_slice(&[1u8; 64]);
    buf.reset(ResetPolicy::ReleaseMemory);
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), 0);
}

#[test]
fn default_needs_no_default_items() {
    struct Opaque;

    let mut buf = AppendBuffer::<Opaque>::default();
    assert!(buf.is_empty());
    assert_eq!(buf.push(Opaque), 0);
    assert_eq!(buf.len(), 1);
}
