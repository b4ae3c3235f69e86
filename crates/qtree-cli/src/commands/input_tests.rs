use std::io::Write;
use std::path::Path;

use qtree_wire::words_to_bytes;
use tempfile::NamedTempFile;

use super::input::{InputError, load_words};

fn temp_file(bytes: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn loads_native_words() {
    let file = temp_file(&words_to_bytes(&[0x0004_0001, 0x0004_0002, 0, 7, 1]));

    let words = load_words(file.path()).unwrap();

    assert_eq!(words, [0x0004_0001, 0x0004_0002, 0, 7, 1]);
}

#[test]
fn partial_word_is_reported() {
    let file = temp_file(&[1, 2, 3]);

    let err = load_words(file.path()).unwrap_err();

    assert!(matches!(err, InputError::Wire { .. }));
    assert!(err.to_string().ends_with("byte buffer of 3 bytes is not a whole number of words"));
}

#[test]
fn removed_file_is_io_error() {
    let file = temp_file(&[0; 4]);
    let path = file.path().to_path_buf();
    file.close().unwrap();

    let err = load_words(&path).unwrap_err();

    assert!(matches!(err, InputError::Io { .. }));
}

#[test]
fn missing_file() {
    let err = load_words(Path::new("/nonexistent/qtree/tree.bin")).unwrap_err();

    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().starts_with("failed to read /nonexistent/qtree/tree.bin"));
}
