use super::*;
use proptest::prelude::*;

// === Table Consistency ===

#[test]
fn table_matches_classifier() {
    for b in 0..=255u8 {
        assert_eq!(byte_class(b), ByteClass::of(b), "byte {b:#04x}");
    }
}

#[test]
fn every_class_is_reachable() {
    let mut seen = [false; ByteClass::COUNT];
    for class in BYTE_CLASSES {
        seen[class as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "some class has no byte");
}

// === Specific Bytes ===

#[test]
fn whitespace_and_newlines() {
    assert_eq!(byte_class(b' '), ByteClass::Space);
    assert_eq!(byte_class(b'\t'), ByteClass::Space);
    assert_eq!(byte_class(b'\n'), ByteClass::NewLine);
    assert_eq!(byte_class(b'\r'), ByteClass::NewLine);
}

#[test]
fn controls_and_del_are_invalid() {
    for b in [0x01, 0x07, 0x0B, 0x0C, 0x1B, 0x1F, 0x7F] {
        assert_eq!(byte_class(b), ByteClass::Invalid, "byte {b:#04x}");
    }
}

#[test]
fn utf8_lead_ranges() {
    assert_eq!(byte_class(0xC2), ByteClass::Utf8Lead2);
    assert_eq!(byte_class(0xDF), ByteClass::Utf8Lead2);
    assert_eq!(byte_class(0xE0), ByteClass::Utf8Lead3);
    assert_eq!(byte_class(0xEF), ByteClass::Utf8Lead3);
    assert_eq!(byte_class(0xF0), ByteClass::Utf8Lead4);
    assert_eq!(byte_class(0xF4), ByteClass::Utf8Lead4);
}

#[test]
fn impossible_utf8_bytes_are_invalid() {
    for b in (0x80..=0xC1u8).chain(0xF5..=0xFF) {
        assert_eq!(byte_class(b), ByteClass::Invalid, "byte {b:#04x}");
    }
}

#[test]
fn sentinel_is_eof() {
    assert_eq!(byte_class(0), ByteClass::Eof);
}

#[test]
fn ident_continue() {
    assert!(is_ident_continue(b'a'));
    assert!(is_ident_continue(b'Z'));
    assert!(is_ident_continue(b'7'));
    assert!(is_ident_continue(b'_'));
    assert!(!is_ident_continue(b'-'));
    assert!(!is_ident_continue(0));
    assert!(!is_ident_continue(0xC3));
}

proptest! {
    #[test]
    fn ascii_letters_are_letters(b in b'a'..=b'z') {
        prop_assert_eq!(byte_class(b), ByteClass::Letter);
        prop_assert_eq!(byte_class(b.to_ascii_uppercase()), ByteClass::Letter);
    }

    #[test]
    fn lead_bytes_agree_with_std(ch in any::<char>()) {
        let mut buf = [0u8; 4];
        let encoded = ch.encode_utf8(&mut buf);
        let class = byte_class(encoded.as_bytes()[0]);
        match encoded.len() {
            1 => prop_assert!(!class.is_utf8_lead()),
            2 => prop_assert_eq!(class, ByteClass::Utf8Lead2),
            3 => prop_assert_eq!(class, ByteClass::Utf8Lead3),
            _ => prop_assert_eq!(class, ByteClass::Utf8Lead4),
        }
    }
}
