use crate::error::{ErrorKind, WireError};
use crate::word::{pack_count_len, pack_op_len, unpack_count, unpack_len, unpack_op};

#[test]
fn op_len_layout() {
    let w = pack_op_len(2, 9).unwrap();
    assert_eq!(w, 0x0009_0002);
    assert_eq!(unpack_op(w), 2);
    assert_eq!(unpack_len(w), 9);
}

#[test]
fn count_len_layout() {
    let w = pack_count_len(3, 40).unwrap();
    assert_eq!(w, 0x0028_0003);
    assert_eq!(unpack_count(w), 3);
    assert_eq!(unpack_len(w), 40);
}

#[test]
fn extremes_roundtrip() {
    for (a, b) in [(0, 0), (0xFFFF, 0), (0, 0xFFFF), (0xFFFF, 0xFFFF), (1, 0x8000)] {
        let w = pack_op_len(a, b).unwrap();
        assert_eq!(unpack_op(w) as usize, a);
        assert_eq!(unpack_len(w) as usize, b);

        let w = pack_count_len(a, b).unwrap();
        assert_eq!(unpack_count(w) as usize, a);
        assert_eq!(unpack_len(w) as usize, b);
    }
}

#[test]
fn overflow_is_range_error() {
    let err = pack_op_len(0x1_0000, 4).unwrap_err();
    assert_eq!(
        err,
        WireError::FieldOverflow {
            field: "op type",
            value: 0x1_0000
        }
    );
    assert_eq!(err.kind(), ErrorKind::Range);

    let err = pack_op_len(1, 70_000).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert!(err.to_string().contains("record length 70000"));

    assert_eq!(pack_count_len(65_536, 0).unwrap_err().kind(), ErrorKind::Range);
    assert_eq!(pack_count_len(0, 65_536).unwrap_err().kind(), ErrorKind::Range);
}

mod props {
    use proptest::prelude::*;

    use crate::word::{pack_count_len, pack_op_len, unpack_count, unpack_len, unpack_op};

    proptest! {
        #[test]
        fn op_len_roundtrip(o in 0usize..65_536, l in 0usize..65_536) {
            let w = pack_op_len(o, l).unwrap();
            prop_assert_eq!(unpack_op(w) as usize, o);
            prop_assert_eq!(unpack_len(w) as usize, l);
        }

        #[test]
        fn count_len_roundtrip(c in 0usize..65_536, l in 0usize..65_536) {
            let w = pack_count_len(c, l).unwrap();
            prop_assert_eq!(unpack_count(w) as usize, c);
            prop_assert_eq!(unpack_len(w) as usize, l);
        }

        #[test]
        fn oversized_fields_rejected(big in 65_536usize..1_000_000, small in 0usize..65_536) {
            prop_assert!(pack_op_len(big, small).is_err());
            prop_assert!(pack_op_len(small, big).is_err());
            prop_assert!(pack_count_len(big, small).is_err());
            prop_assert!(pack_count_len(small, big).is_err());
        }
    }
}
