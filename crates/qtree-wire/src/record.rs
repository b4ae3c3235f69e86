//! Operation records: lookup / scan-fragment nodes and their parameters.
//!
//! Node record layout (words):
//! - 0: op type (low 16) + record length (high 16)
//! - 1: request info ([`NodeInfoBit`] set)
//! - 2: table id
//! - 3: table version
//! - 4..: sections selected by request info, in canonical bit order
//!
//! Parameter records replace words 2-3 with a single result-destination word
//! and use [`ParamInfoBit`].
//!
//! The record length in word 0 is authoritative: it is what advances a
//! reader to the next record, never the sum of section widths.

use std::fmt;
use std::marker::PhantomData;

use crate::constants::{NODE_FIXED_WORDS, PARAM_FIXED_WORDS};
use crate::cursor::WordCursor;
use crate::error::WireError;
use crate::info::{InfoBit, InfoBits, NodeInfoBit, ParamInfoBit};
use crate::pattern::PatternReader;
use crate::section::{SectionTable, Sections, read_sections, write_sections};
use crate::word::{pack_op_len, unpack_len, unpack_op};

/// Record op types. `0` is reserved as the end sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(u16)]
pub enum OpType {
    Lookup = 0x1,
    ScanFrag = 0x2,
}

impl OpType {
    pub fn from_u16(v: u16) -> Result<Self, WireError> {
        match v {
            0x1 => Ok(Self::Lookup),
            0x2 => Ok(Self::ScanFrag),
            _ => Err(WireError::UnknownOpType(v)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lookup => "lookup",
            Self::ScanFrag => "scan_frag",
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Node records or parameter records.
///
/// Both share the op+len word, the request-info word and the section
/// discipline; they differ in fixed width, info bits and owned form.
pub trait RecordKind: sealed::Sealed + Sized + 'static {
    type Bit: InfoBit;
    type Owned: Clone + fmt::Debug + PartialEq;

    /// Words before the first section.
    const FIXED_WORDS: usize;
    const LABEL: &'static str;

    fn own(view: &RecordView<'_, Self>) -> Self::Owned;

    fn encode_owned(owned: &Self::Owned) -> Result<Vec<u32>, WireError>;
}

/// Marker for lookup / scan-fragment node records.
#[derive(Clone, Copy, Debug)]
pub enum NodeRecord {}

/// Marker for parameter records.
#[derive(Clone, Copy, Debug)]
pub enum ParamRecord {}

impl sealed::Sealed for NodeRecord {}
impl sealed::Sealed for ParamRecord {}

impl RecordKind for NodeRecord {
    type Bit = NodeInfoBit;
    type Owned = OperationNode;

    const FIXED_WORDS: usize = NODE_FIXED_WORDS;
    const LABEL: &'static str = "node";

    fn own(view: &RecordView<'_, Self>) -> OperationNode {
        let body = NodeBody {
            table_id: view.table_id(),
            table_version: view.table_version(),
            sections: view.owned_sections(),
        };
        match view.op_type() {
            OpType::Lookup => OperationNode::Lookup(body),
            OpType::ScanFrag => OperationNode::ScanFrag(body),
        }
    }

    fn encode_owned(owned: &OperationNode) -> Result<Vec<u32>, WireError> {
        owned.encode()
    }
}

impl RecordKind for ParamRecord {
    type Bit = ParamInfoBit;
    type Owned = OperationParams;

    const FIXED_WORDS: usize = PARAM_FIXED_WORDS;
    const LABEL: &'static str = "params";

    fn own(view: &RecordView<'_, Self>) -> OperationParams {
        let body = ParamBody {
            result_destination: view.result_destination(),
            sections: view.owned_sections(),
        };
        match view.op_type() {
            OpType::Lookup => OperationParams::Lookup(body),
            OpType::ScanFrag => OperationParams::ScanFrag(body),
        }
    }

    fn encode_owned(owned: &OperationParams) -> Result<Vec<u32>, WireError> {
        owned.encode()
    }
}

/// Shared encoder: header words, then sections.
fn encode_record<K: RecordKind>(
    op: OpType,
    fixed: &[u32],
    flags: InfoBits<K::Bit>,
    sections: &Sections<K::Bit>,
) -> Result<Vec<u32>, WireError> {
    debug_assert_eq!(2 + fixed.len(), K::FIXED_WORDS);

    let mut words = Vec::with_capacity(K::FIXED_WORDS + sections.wire_width());
    words.push(0);
    words.push(flags.bits());
    words.extend_from_slice(fixed);
    write_sections(flags, sections, &mut words)?;
    words[0] = pack_op_len(op as usize, words.len())?;

    tracing::trace!(kind = K::LABEL, op = op.as_str(), len = words.len(), %flags, "encoded record");
    Ok(words)
}

pub fn encode_lookup(
    table_id: u32,
    table_version: u32,
    flags: InfoBits<NodeInfoBit>,
    sections: &Sections<NodeInfoBit>,
) -> Result<Vec<u32>, WireError> {
    encode_record::<NodeRecord>(OpType::Lookup, &[table_id, table_version], flags, sections)
}

pub fn encode_scan_fragment(
    table_id: u32,
    table_version: u32,
    flags: InfoBits<NodeInfoBit>,
    sections: &Sections<NodeInfoBit>,
) -> Result<Vec<u32>, WireError> {
    encode_record::<NodeRecord>(OpType::ScanFrag, &[table_id, table_version], flags, sections)
}

pub fn encode_lookup_parameters(
    result_destination: u32,
    flags: InfoBits<ParamInfoBit>,
    sections: &Sections<ParamInfoBit>,
) -> Result<Vec<u32>, WireError> {
    encode_record::<ParamRecord>(OpType::Lookup, &[result_destination], flags, sections)
}

pub fn encode_scan_frag_parameters(
    result_destination: u32,
    flags: InfoBits<ParamInfoBit>,
    sections: &Sections<ParamInfoBit>,
) -> Result<Vec<u32>, WireError> {
    encode_record::<ParamRecord>(OpType::ScanFrag, &[result_destination], flags, sections)
}

/// Borrowed view of one decoded record.
pub struct RecordView<'a, K: RecordKind> {
    op: OpType,
    words: &'a [u32],
    flags: InfoBits<K::Bit>,
    sections: SectionTable<'a>,
    _kind: PhantomData<K>,
}

pub type NodeView<'a> = RecordView<'a, NodeRecord>;
pub type ParamsView<'a> = RecordView<'a, ParamRecord>;

impl<K: RecordKind> Clone for RecordView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: RecordKind> Copy for RecordView<'_, K> {}

impl<'a, K: RecordKind> RecordView<'a, K> {
    /// Decode the record starting at `offset`.
    ///
    /// With `allow_slack`, words between the last section and the declared
    /// record end are tolerated; the declared length still decides how many
    /// words the record consumes.
    pub fn decode(buffer: &'a [u32], offset: usize, allow_slack: bool) -> Result<Self, WireError> {
        let head = WordCursor::at(buffer, offset).peek()?;
        let op = OpType::from_u16(unpack_op(head))?;
        let len = unpack_len(head) as usize;

        if len < K::FIXED_WORDS {
            return Err(WireError::RecordTooShort {
                declared: len,
                minimum: K::FIXED_WORDS,
            });
        }
        let words = WordCursor::at(buffer, offset).take(len)?;
        let flags = InfoBits::from_bits(words[1])?;

        let (sections, end) = read_sections(flags, words, K::FIXED_WORDS)?;
        if end != len && !allow_slack {
            return Err(WireError::TrailingSlack { words: len - end });
        }

        Ok(Self {
            op,
            words,
            flags,
            sections,
            _kind: PhantomData,
        })
    }

    pub fn op_type(&self) -> OpType {
        self.op
    }

    /// Words this record occupies, as declared by its own header.
    pub fn consumed_words(&self) -> usize {
        self.words.len()
    }

    pub fn request_info(&self) -> u32 {
        self.flags.bits()
    }

    pub fn flags(&self) -> InfoBits<K::Bit> {
        self.flags
    }

    /// Raw record words, header included.
    pub fn words(&self) -> &'a [u32] {
        self.words
    }

    /// Body of the section selected by `bit`, without its length word.
    pub fn section(&self, bit: K::Bit) -> Option<&'a [u32]> {
        self.sections.get(bit)
    }

    /// Present sections in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = (K::Bit, &'a [u32])> + '_ {
        self.flags
            .iter()
            .filter_map(|b| self.sections.get(b).map(|body| (b, body)))
    }

    /// Pattern entries of a section; empty when the section is absent.
    pub fn patterns(&self, bit: K::Bit) -> PatternReader<'a> {
        PatternReader::new(self.section(bit).unwrap_or_default())
    }

    pub fn to_owned(&self) -> K::Owned {
        K::own(self)
    }

    fn owned_sections(&self) -> Sections<K::Bit> {
        let mut owned = Sections::new();
        for (bit, body) in self.sections() {
            owned.insert(bit, body);
        }
        owned
    }
}

impl RecordView<'_, NodeRecord> {
    pub fn table_id(&self) -> u32 {
        self.words[2]
    }

    pub fn table_version(&self) -> u32 {
        self.words[3]
    }
}

impl RecordView<'_, ParamRecord> {
    /// Opaque correlation token supplied by the caller.
    pub fn result_destination(&self) -> u32 {
        self.words[2]
    }
}

impl<K: RecordKind> fmt::Debug for RecordView<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordView")
            .field("kind", &K::LABEL)
            .field("op", &self.op)
            .field("len", &self.words.len())
            .field("flags", &self.flags)
            .finish()
    }
}

/// Decode the node record at `offset`.
pub fn decode_node(buffer: &[u32], offset: usize) -> Result<NodeView<'_>, WireError> {
    RecordView::decode(buffer, offset, false)
}

/// Decode the parameter record at `offset`.
pub fn decode_params(buffer: &[u32], offset: usize) -> Result<ParamsView<'_>, WireError> {
    RecordView::decode(buffer, offset, false)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeBody {
    pub table_id: u32,
    pub table_version: u32,
    pub sections: Sections<NodeInfoBit>,
}

/// Owned operation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationNode {
    Lookup(NodeBody),
    ScanFrag(NodeBody),
}

impl OperationNode {
    pub fn op_type(&self) -> OpType {
        match self {
            Self::Lookup(_) => OpType::Lookup,
            Self::ScanFrag(_) => OpType::ScanFrag,
        }
    }

    pub fn body(&self) -> &NodeBody {
        match self {
            Self::Lookup(b) | Self::ScanFrag(b) => b,
        }
    }

    pub fn flags(&self) -> InfoBits<NodeInfoBit> {
        self.body().sections.flags()
    }

    /// Encode with flags derived from the present sections.
    pub fn encode(&self) -> Result<Vec<u32>, WireError> {
        let b = self.body();
        encode_record::<NodeRecord>(
            self.op_type(),
            &[b.table_id, b.table_version],
            self.flags(),
            &b.sections,
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamBody {
    pub result_destination: u32,
    pub sections: Sections<ParamInfoBit>,
}

/// Owned parameter record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationParams {
    Lookup(ParamBody),
    ScanFrag(ParamBody),
}

impl OperationParams {
    pub fn op_type(&self) -> OpType {
        match self {
            Self::Lookup(_) => OpType::Lookup,
            Self::ScanFrag(_) => OpType::ScanFrag,
        }
    }

    pub fn body(&self) -> &ParamBody {
        match self {
            Self::Lookup(b) | Self::ScanFrag(b) => b,
        }
    }

    pub fn flags(&self) -> InfoBits<ParamInfoBit> {
        self.body().sections.flags()
    }

    pub fn encode(&self) -> Result<Vec<u32>, WireError> {
        let b = self.body();
        encode_record::<ParamRecord>(
            self.op_type(),
            &[b.result_destination],
            self.flags(),
            &b.sections,
        )
    }
}
