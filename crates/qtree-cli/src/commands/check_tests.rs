use qtree_wire::{
    DecodeLimits, ErrorKind, InfoBits, Sections, encode_lookup_parameters, encode_param_tree,
    encode_scan_fragment, encode_tree,
};

use super::check::check_words;
use super::input::TreeKind;

fn scan_tree() -> Vec<u32> {
    let node = encode_scan_fragment(7, 1, InfoBits::empty(), &Sections::new()).unwrap();
    encode_tree(&[node]).unwrap()
}

#[test]
fn valid_node_tree() {
    let count = check_words(&scan_tree(), TreeKind::Nodes, DecodeLimits::default()).unwrap();

    assert_eq!(count, 1);
}

#[test]
fn valid_param_tree() {
    let record = encode_lookup_parameters(9, InfoBits::empty(), &Sections::new()).unwrap();
    let words = encode_param_tree(&[record]).unwrap();

    let count = check_words(&words, TreeKind::Params, DecodeLimits::default()).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn truncated_tree() {
    let words = scan_tree();
    let err = check_words(&words[..3], TreeKind::Nodes, DecodeLimits::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TruncatedBuffer);
}

#[test]
fn node_tree_read_as_params() {
    // A 4-word scan record declares request info 0 and one word past the
    // 3-word parameter header.
    let err = check_words(&scan_tree(), TreeKind::Params, DecodeLimits::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Malformed);
}

#[test]
fn limits_apply() {
    let limits = DecodeLimits::new().max_words(3);
    let err = check_words(&scan_tree(), TreeKind::Nodes, limits).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Range);
}
