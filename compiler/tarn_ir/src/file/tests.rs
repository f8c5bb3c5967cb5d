use super::*;

#[test]
fn entry_token_range() {
    let entry = LexerFileEntry {
        path: PathBuf::from("src/main.tarn"),
        byte_len: 12,
        begin_token: 5,
        end_token: 9,
    };
    assert_eq!(entry.token_count(), 4);
    assert!(entry.contains_token(5));
    assert!(entry.contains_token(8));
    assert!(!entry.contains_token(9));
    assert_eq!(entry.path(), Path::new("src/main.tarn"));
}

#[test]
fn file_id_display() {
    assert_eq!(FileId::new(3).to_string(), "#3");
    assert_eq!(FileId::new(3).index(), 3);
}
