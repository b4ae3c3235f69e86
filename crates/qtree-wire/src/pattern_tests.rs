use crate::error::{ErrorKind, WireError};
use crate::pattern::{
    Pattern, PatternReader, PatternTag, PatternWriter, RawPattern, decode, encode_column,
    encode_composite_key_column, encode_data, encode_parameter, encode_parameter_with_header,
    encode_attribute_with_header, read_patterns,
};

#[test]
fn single_word_tags_roundtrip() {
    let cases = [
        (encode_column(5), PatternTag::Column, 0x0002_0005),
        (encode_composite_key_column(6), PatternTag::CompositeKeyColumn, 0x0003_0006),
        (encode_parameter(7), PatternTag::Parameter, 0x0004_0007),
        (encode_parameter_with_header(8), PatternTag::ParameterWithHeader, 0x0006_0008),
        (encode_attribute_with_header(9), PatternTag::AttributeWithHeader, 0x0007_0009),
    ];

    for (word, tag, expected) in cases {
        assert_eq!(word, expected);
        let raw = decode(word).unwrap();
        assert_eq!(raw.tag, tag);
        assert_eq!(raw.value as u32, expected & 0xFFFF);
    }
}

#[test]
fn data_tag_carries_length() {
    let words = encode_data(&[0xAA, 0xBB]).unwrap();
    assert_eq!(words, [0x0001_0002, 0xAA, 0xBB]);
    assert_eq!(
        decode(words[0]),
        Ok(RawPattern {
            tag: PatternTag::Data,
            value: 2
        })
    );
}

#[test]
fn empty_data_is_valid() {
    let words = encode_data(&[]).unwrap();
    assert_eq!(words, [0x0001_0000]);
    assert_eq!(read_patterns(&words), Ok(vec![Pattern::Data(&[])]));
}

#[test]
fn oversized_data_is_range_error() {
    let payload = vec![0u32; 0x1_0000];
    let err = encode_data(&payload).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn unknown_tags_rejected() {
    assert_eq!(decode(0x0000_0001), Err(WireError::UnknownPatternTag(0)));
    assert_eq!(decode(0x0005_0001), Err(WireError::UnknownPatternTag(5)));
    assert_eq!(decode(0x0008_0000), Err(WireError::UnknownPatternTag(8)));
}

#[test]
fn reader_interleaves_data_and_refs() {
    let mut w = PatternWriter::new();
    w.column(0)
        .data(&[1, 2, 3])
        .unwrap()
        .parameter(4)
        .attribute_with_header(2);
    let words = w.finish();
    assert_eq!(words.len(), 7);

    let patterns = read_patterns(&words).unwrap();
    assert_eq!(
        patterns,
        [
            Pattern::Column(0),
            Pattern::Data(&[1, 2, 3]),
            Pattern::Parameter(4),
            Pattern::AttributeWithHeader(2),
        ]
    );
    let width: usize = patterns.iter().map(|p| p.wire_width()).sum();
    assert_eq!(width, words.len());
}

#[test]
fn reader_reports_truncated_data_once() {
    // Data claims 3 payload words, only 1 present.
    let words = [0x0001_0003, 0xFF];
    let mut reader = PatternReader::new(&words);

    let err = reader.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedBuffer);
    assert!(reader.next().is_none());
}

#[test]
fn push_matches_direct_encoding() {
    let mut a = PatternWriter::new();
    a.push(&Pattern::CompositeKeyColumn(3))
        .unwrap()
        .push(&Pattern::Data(&[9]))
        .unwrap()
        .push(&Pattern::ParameterWithHeader(1))
        .unwrap();

    let mut b = PatternWriter::new();
    b.composite_key_column(3)
        .data(&[9])
        .unwrap()
        .parameter_with_header(1);

    assert_eq!(a.finish(), b.finish());
}

#[test]
fn display_forms() {
    let shown: Vec<String> = [
        Pattern::Data(&[0x10, 0x2000]),
        Pattern::Column(1),
        Pattern::CompositeKeyColumn(2),
        Pattern::Parameter(3),
        Pattern::ParameterWithHeader(4),
        Pattern::AttributeWithHeader(5),
    ]
    .iter()
    .map(|p| p.to_string())
    .collect();

    assert_eq!(
        shown,
        [
            "data[2] 0x00000010 0x00002000",
            "col(1)",
            "pk(2)",
            "param(3)",
            "param_hdr(4)",
            "attr_hdr(5)",
        ]
    );
}

mod props {
    use proptest::prelude::*;

    use crate::pattern::{Pattern, PatternWriter, read_patterns};

    #[derive(Clone, Debug)]
    enum Entry {
        Data(Vec<u32>),
        Column(u16),
        CompositeKeyColumn(u16),
        Parameter(u16),
        ParameterWithHeader(u16),
        AttributeWithHeader(u16),
    }

    impl Entry {
        fn as_pattern(&self) -> Pattern<'_> {
            match self {
                Self::Data(p) => Pattern::Data(p),
                Self::Column(v) => Pattern::Column(*v),
                Self::CompositeKeyColumn(v) => Pattern::CompositeKeyColumn(*v),
                Self::Parameter(v) => Pattern::Parameter(*v),
                Self::ParameterWithHeader(v) => Pattern::ParameterWithHeader(*v),
                Self::AttributeWithHeader(v) => Pattern::AttributeWithHeader(*v),
            }
        }
    }

    fn arb_entry() -> impl Strategy<Value = Entry> {
        prop_oneof![
            prop::collection::vec(any::<u32>(), 0..6).prop_map(Entry::Data),
            any::<u16>().prop_map(Entry::Column),
            any::<u16>().prop_map(Entry::CompositeKeyColumn),
            any::<u16>().prop_map(Entry::Parameter),
            any::<u16>().prop_map(Entry::ParameterWithHeader),
            any::<u16>().prop_map(Entry::AttributeWithHeader),
        ]
    }

    proptest! {
        #[test]
        fn stream_roundtrip(entries in prop::collection::vec(arb_entry(), 0..12)) {
            let expected: Vec<Pattern<'_>> = entries.iter().map(Entry::as_pattern).collect();

            let mut w = PatternWriter::new();
            for p in &expected {
                w.push(p).unwrap();
            }
            let words = w.finish();

            prop_assert_eq!(read_patterns(&words).unwrap(), expected);
        }
    }
}
