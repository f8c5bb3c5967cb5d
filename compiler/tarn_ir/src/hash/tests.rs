use super::*;
use proptest::prelude::*;

#[test]
fn known_fnv1a_vectors() {
    assert_eq!(ContentHash::of(b"").value(), 0x811c_9dc5);
    assert_eq!(ContentHash::of(b"a").value(), 0xe40c_292c);
    assert_eq!(ContentHash::of(b"foobar").value(), 0xbf9c_f968);
}

#[test]
fn default_is_empty() {
    assert_eq!(ContentHash::default(), ContentHash::EMPTY);
}

proptest! {
    #[test]
    fn incremental_matches_whole(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let incremental = bytes.iter().fold(ContentHash::EMPTY, |h, &b| h.push(b));
        prop_assert_eq!(incremental, ContentHash::of(&bytes));
        prop_assert_eq!(ContentHash::EMPTY.push_bytes(&bytes), ContentHash::of(&bytes));
    }
}
