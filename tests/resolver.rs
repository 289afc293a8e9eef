use std::io::Write;
use std::path::PathBuf;

use picto_wsd::error::Error;
use picto_wsd::sense::{resolve, resolve_first, LoadError, SenseTable, NO_SYNSET};

const INDEX_SENSE: &str = "aardvark%1:05:00:: 02065397 1 0
chat%1:05:00:: 02124272 1 3
chat_domestique%1:05:00:: 02124272 1 0
chat%1:18:00:: 02124272 2 0
maison%1:06:00:: 03549540 1 5
";

fn table_file() -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(INDEX_SENSE.as_bytes()).unwrap();
    f
}

#[test]
fn resolve_from_file() {
    let f = table_file();
    let table = SenseTable::from_path(f.path()).unwrap();
    assert_eq!(table.len(), 5);

    assert_eq!(
        resolve("02124272-n", &table).unwrap(),
        vec![
            "chat%1:05:00::",
            "chat_domestique%1:05:00::",
            "chat%1:18:00::"
        ]
    );
    assert_eq!(resolve_first("02124272-n", &table).unwrap(), "chat%1:05:00::");
    assert_eq!(resolve("3549540-n", &table).unwrap(), vec!["maison%1:06:00::"]);
}

#[test]
fn first_is_head_of_all() {
    let f = table_file();
    let table = SenseTable::from_path(f.path()).unwrap();
    for reference in ["02124272-n", "03549540-n", "02065397-n", "00000001-n"] {
        let all = resolve(reference, &table).unwrap();
        let first = resolve_first(reference, &table).unwrap();
        assert_eq!(all.first().cloned().unwrap_or_default(), first);
    }
}

#[test]
fn sentinels_never_fail() {
    let table = SenseTable::default();
    for sentinel in NO_SYNSET {
        assert!(resolve(sentinel, &table).unwrap().is_empty());
        assert_eq!(resolve_first(sentinel, &table).unwrap(), "");
    }
}

#[test]
fn malformed_reference() {
    let table = SenseTable::default();
    let err = resolve("n-02124272", &table).unwrap_err();
    assert_eq!(err.reference(), "n-02124272");

    let err: Error = resolve_first("abc", &table).unwrap_err().into();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn missing_table() {
    let path = PathBuf::from("surely/not/an/index.sense");
    let err = SenseTable::from_path(&path).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}
