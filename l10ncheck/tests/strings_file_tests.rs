use l10ncheck::{Error, StringsTable};
use std::fs;
use tempfile::TempDir;

#[test]
fn reads_a_utf8_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Localizable.strings");
    fs::write(
        &path,
        "/* greeting */\n\"hello\" = \"Hello %@\";\n\"bye\" = \"Bye\";\n",
    )
    .unwrap();

    let table = StringsTable::read_from(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("hello"), Some("Hello %@"));
}

#[test]
fn reads_a_utf8_file_with_bom() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Localizable.strings");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"\"key\" = \"value\";\n");
    fs::write(&path, bytes).unwrap();

    let table = StringsTable::read_from(&path).unwrap();
    assert_eq!(table.get("key"), Some("value"));
}

#[test]
fn reads_a_utf16_little_endian_file() {
    // Xcode historically wrote .strings files as UTF-16 with a BOM.
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Localizable.strings");
    let content = "\"key\" = \"gr\u{fc}\u{df}e %d\";\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in content.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let table = StringsTable::read_from(&path).unwrap();
    assert_eq!(table.get("key"), Some("gr\u{fc}\u{df}e %d"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = StringsTable::read_from(dir.path().join("absent.strings")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("Localizable.strings");
    fs::write(&path, "\"good\" = \"yes\";\nnot an entry\n").unwrap();

    let err = StringsTable::read_from(&path).unwrap_err();
    assert!(matches!(err, Error::ParseLine(_)));
    assert!(err.to_string().contains("not an entry"));
}
