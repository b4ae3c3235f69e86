use crate::buffer::{words_from_bytes, words_to_bytes};
use crate::error::{ErrorKind, WireError};
use crate::tree::decode_tree;

#[test]
fn native_order() {
    let words = [0x0004_0001u32, 0x0102_0304];
    let bytes = words_to_bytes(&words);

    assert_eq!(bytes.len(), 8);
    assert_eq!(&bytes[4..], &0x0102_0304u32.to_ne_bytes());
    assert_eq!(words_from_bytes(&bytes).unwrap(), words);
}

#[test]
fn empty_bytes() {
    assert_eq!(words_from_bytes(&[]).unwrap(), Vec::<u32>::new());
}

#[test]
fn partial_word_rejected() {
    let err = words_from_bytes(&[1, 2, 3, 4, 5]).unwrap_err();

    assert_eq!(err, WireError::UnalignedBuffer(5));
    assert_eq!(err.kind(), ErrorKind::TruncatedBuffer);
}

#[test]
fn decodes_transported_tree() {
    let tree = [0x0004_0001u32, 0x0004_0002, 0, 7, 1];
    let words = words_from_bytes(&words_to_bytes(&tree)).unwrap();

    let view = decode_tree(&words).unwrap();
    assert_eq!(view.node_count(), 1);
    view.validate().unwrap();
}
