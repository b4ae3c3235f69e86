//! Pattern entries: where one runtime input value comes from.
//!
//! Each entry starts with a tag word, tag in the high 16 bits and payload in
//! the low 16 bits. Only [`PatternTag::Data`] is followed by more words (the
//! literal payload, its length given by the tag word), so the width of a
//! stream is known without interpreting the other entries.

use std::fmt;

use crate::cursor::WordCursor;
use crate::error::WireError;
use crate::word::check_u16;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum PatternTag {
    /// Literal constant of `value` words.
    Data = 0x1,
    /// Column of the parent row, by index.
    Column = 0x2,
    /// Primary key taken from the composite key column of a unique index.
    CompositeKeyColumn = 0x3,
    /// Caller-supplied parameter, by index.
    Parameter = 0x4,
    /// Parameter value including its attribute header.
    ParameterWithHeader = 0x6,
    /// Parent column including its attribute header.
    AttributeWithHeader = 0x7,
}

impl PatternTag {
    pub fn from_u16(v: u16) -> Result<Self, WireError> {
        Ok(match v {
            0x1 => Self::Data,
            0x2 => Self::Column,
            0x3 => Self::CompositeKeyColumn,
            0x4 => Self::Parameter,
            0x6 => Self::ParameterWithHeader,
            0x7 => Self::AttributeWithHeader,
            _ => return Err(WireError::UnknownPatternTag(v)),
        })
    }
}

/// A decoded tag word.
///
/// For `Data`, `value` is the number of payload words that follow; the
/// caller advances past them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RawPattern {
    pub tag: PatternTag,
    pub value: u16,
}

#[inline]
fn tag_word(tag: PatternTag, value: u16) -> u32 {
    ((tag as u32) << 16) | value as u32
}

/// Tag word plus literal payload.
pub fn encode_data(payload: &[u32]) -> Result<Vec<u32>, WireError> {
    let len = check_u16("data pattern length", payload.len())?;
    let mut words = Vec::with_capacity(1 + payload.len());
    words.push(tag_word(PatternTag::Data, len));
    words.extend_from_slice(payload);
    Ok(words)
}

pub fn encode_column(col: u16) -> u32 {
    tag_word(PatternTag::Column, col)
}

pub fn encode_composite_key_column(col: u16) -> u32 {
    tag_word(PatternTag::CompositeKeyColumn, col)
}

pub fn encode_parameter(param: u16) -> u32 {
    tag_word(PatternTag::Parameter, param)
}

pub fn encode_parameter_with_header(param: u16) -> u32 {
    tag_word(PatternTag::ParameterWithHeader, param)
}

pub fn encode_attribute_with_header(col: u16) -> u32 {
    tag_word(PatternTag::AttributeWithHeader, col)
}

/// Split a tag word. Does not consume a `Data` payload.
pub fn decode(word: u32) -> Result<RawPattern, WireError> {
    let tag = PatternTag::from_u16((word >> 16) as u16)?;
    Ok(RawPattern {
        tag,
        value: (word & 0xFFFF) as u16,
    })
}

/// One pattern entry, with `Data` payload borrowed from the stream.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Pattern<'a> {
    Data(&'a [u32]),
    Column(u16),
    CompositeKeyColumn(u16),
    Parameter(u16),
    ParameterWithHeader(u16),
    AttributeWithHeader(u16),
}

impl Pattern<'_> {
    pub fn tag(&self) -> PatternTag {
        match self {
            Self::Data(_) => PatternTag::Data,
            Self::Column(_) => PatternTag::Column,
            Self::CompositeKeyColumn(_) => PatternTag::CompositeKeyColumn,
            Self::Parameter(_) => PatternTag::Parameter,
            Self::ParameterWithHeader(_) => PatternTag::ParameterWithHeader,
            Self::AttributeWithHeader(_) => PatternTag::AttributeWithHeader,
        }
    }

    /// Words this entry occupies, tag word included.
    pub fn wire_width(&self) -> usize {
        match self {
            Self::Data(payload) => 1 + payload.len(),
            _ => 1,
        }
    }

    pub fn encode_into(&self, out: &mut Vec<u32>) -> Result<(), WireError> {
        match *self {
            Self::Data(payload) => out.extend(encode_data(payload)?),
            Self::Column(c) => out.push(encode_column(c)),
            Self::CompositeKeyColumn(c) => out.push(encode_composite_key_column(c)),
            Self::Parameter(p) => out.push(encode_parameter(p)),
            Self::ParameterWithHeader(p) => out.push(encode_parameter_with_header(p)),
            Self::AttributeWithHeader(c) => out.push(encode_attribute_with_header(c)),
        }
        Ok(())
    }
}

impl fmt::Display for Pattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(payload) => {
                write!(f, "data[{}]", payload.len())?;
                for w in *payload {
                    write!(f, " 0x{w:08x}")?;
                }
                Ok(())
            }
            Self::Column(c) => write!(f, "col({c})"),
            Self::CompositeKeyColumn(c) => write!(f, "pk({c})"),
            Self::Parameter(p) => write!(f, "param({p})"),
            Self::ParameterWithHeader(p) => write!(f, "param_hdr({p})"),
            Self::AttributeWithHeader(c) => write!(f, "attr_hdr({c})"),
        }
    }
}

/// Iterator over the entries of a pattern stream.
///
/// Stops after the first error.
pub struct PatternReader<'a> {
    cursor: WordCursor<'a>,
    failed: bool,
}

impl<'a> PatternReader<'a> {
    pub fn new(words: &'a [u32]) -> Self {
        Self {
            cursor: WordCursor::new(words),
            failed: false,
        }
    }

    fn next_pattern(&mut self) -> Result<Pattern<'a>, WireError> {
        let raw = decode(self.cursor.read()?)?;
        Ok(match raw.tag {
            PatternTag::Data => Pattern::Data(self.cursor.take(raw.value as usize)?),
            PatternTag::Column => Pattern::Column(raw.value),
            PatternTag::CompositeKeyColumn => Pattern::CompositeKeyColumn(raw.value),
            PatternTag::Parameter => Pattern::Parameter(raw.value),
            PatternTag::ParameterWithHeader => Pattern::ParameterWithHeader(raw.value),
            PatternTag::AttributeWithHeader => Pattern::AttributeWithHeader(raw.value),
        })
    }
}

impl<'a> Iterator for PatternReader<'a> {
    type Item = Result<Pattern<'a>, WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }
        let res = self.next_pattern();
        self.failed = res.is_err();
        Some(res)
    }
}

impl std::iter::FusedIterator for PatternReader<'_> {}

/// Decode a whole pattern stream.
pub fn read_patterns(words: &[u32]) -> Result<Vec<Pattern<'_>>, WireError> {
    PatternReader::new(words).collect()
}

/// Builder for a pattern stream.
#[derive(Clone, Debug, Default)]
pub struct PatternWriter {
    words: Vec<u32>,
}

impl PatternWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&mut self, payload: &[u32]) -> Result<&mut Self, WireError> {
        self.words.extend(encode_data(payload)?);
        Ok(self)
    }

    pub fn column(&mut self, col: u16) -> &mut Self {
        self.words.push(encode_column(col));
        self
    }

    pub fn composite_key_column(&mut self, col: u16) -> &mut Self {
        self.words.push(encode_composite_key_column(col));
        self
    }

    pub fn parameter(&mut self, param: u16) -> &mut Self {
        self.words.push(encode_parameter(param));
        self
    }

    pub fn parameter_with_header(&mut self, param: u16) -> &mut Self {
        self.words.push(encode_parameter_with_header(param));
        self
    }

    pub fn attribute_with_header(&mut self, col: u16) -> &mut Self {
        self.words.push(encode_attribute_with_header(col));
        self
    }

    pub fn push(&mut self, pattern: &Pattern<'_>) -> Result<&mut Self, WireError> {
        pattern.encode_into(&mut self.words)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn finish(&mut self) -> Vec<u32> {
        std::mem::take(&mut self.words)
    }
}
