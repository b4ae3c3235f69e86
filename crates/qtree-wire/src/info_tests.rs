use crate::constants::MAX_INFO_BITS;
use crate::error::WireError;
use crate::info::{InfoBit, InfoBits, NodeInfoBit, ParamInfoBit, SectionShape};

#[test]
fn node_bit_values() {
    let masks: Vec<u32> = NodeInfoBit::ALL.iter().map(|b| b.mask()).collect();
    assert_eq!(masks, [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x100]);
    assert_eq!(NodeInfoBit::defined_mask(), 0x1FF);
}

#[test]
fn param_bit_values() {
    let masks: Vec<u32> = ParamInfoBit::ALL.iter().map(|b| b.mask()).collect();
    assert_eq!(masks, [0x1, 0x2, 0x4, 0x8, 0x10]);
    assert_eq!(ParamInfoBit::defined_mask(), 0x1F);
}

#[test]
fn canonical_order_matches_ord() {
    let mut sorted = NodeInfoBit::ALL.to_vec();
    sorted.sort();
    assert_eq!(sorted, NodeInfoBit::ALL);
}

#[test]
fn slots_are_bit_positions() {
    assert_eq!(NodeInfoBit::HasParent.slot(), 0);
    assert_eq!(NodeInfoBit::AttrLinked.slot(), 7);
    assert_eq!(NodeInfoBit::LinkedDisk.slot(), 8);
    assert_eq!(ParamInfoBit::DiskAttr.slot(), 4);
}

#[test]
fn every_slot_fits_section_table() {
    for &bit in NodeInfoBit::ALL {
        assert!(bit.slot() < MAX_INFO_BITS, "{bit:?}");
    }
    for &bit in ParamInfoBit::ALL {
        assert!(bit.slot() < MAX_INFO_BITS, "{bit:?}");
    }
}

#[test]
fn marker_bits_are_zero_width() {
    assert_eq!(NodeInfoBit::LinkedDisk.shape(), SectionShape::Fixed(0));
    assert_eq!(ParamInfoBit::DiskAttr.shape(), SectionShape::Fixed(0));
    assert_eq!(NodeInfoBit::KeyLinked.shape(), SectionShape::Prefixed);
    assert_eq!(SectionShape::Prefixed.wire_width(3), 4);
    assert_eq!(SectionShape::Fixed(0).wire_width(0), 0);
}

#[test]
fn iter_in_canonical_order() {
    let bits: InfoBits<NodeInfoBit> = [
        NodeInfoBit::AttrLinked,
        NodeInfoBit::HasParent,
        NodeInfoBit::KeyLinked,
    ]
    .into_iter()
    .collect();

    assert_eq!(bits.bits(), 0x83);
    assert_eq!(bits.len(), 3);
    assert_eq!(
        bits.iter().collect::<Vec<_>>(),
        [
            NodeInfoBit::HasParent,
            NodeInfoBit::KeyLinked,
            NodeInfoBit::AttrLinked
        ]
    );
}

#[test]
fn from_bits_rejects_undefined() {
    assert!(InfoBits::<NodeInfoBit>::from_bits(0x1FF).is_ok());
    assert_eq!(
        InfoBits::<NodeInfoBit>::from_bits(0x200),
        Err(WireError::UnknownInfoBits(0x200))
    );
    assert_eq!(
        InfoBits::<ParamInfoBit>::from_bits(0x21),
        Err(WireError::UnknownInfoBits(0x21))
    );
}

#[test]
fn display_lists_names() {
    let empty = InfoBits::<NodeInfoBit>::empty();
    assert_eq!(empty.to_string(), "-");

    let bits = InfoBits::empty()
        .with(NodeInfoBit::KeyLinked)
        .with(NodeInfoBit::HasParent);
    assert_eq!(bits.to_string(), "HAS_PARENT|KEY_LINKED");
    assert_eq!(
        format!("{bits:?}"),
        "InfoBits(0x003: HAS_PARENT|KEY_LINKED)"
    );
}
