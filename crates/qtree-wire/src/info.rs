//! Request-info bits selecting a record's optional trailing sections.
//!
//! Sections follow the fixed header in ascending bit order. A decoder finds
//! each one purely from which lower bits are set and the section's own
//! framing, so the bit order is part of the wire format.

use std::fmt;
use std::marker::PhantomData;

use crate::constants::MAX_INFO_BITS;
use crate::error::WireError;

/// How a section is framed on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionShape {
    /// One length word followed by that many body words.
    Prefixed,
    /// Exactly this many words, no length word.
    Fixed(u16),
}

impl SectionShape {
    /// Words a section with `body_len` body words occupies on the wire.
    pub fn wire_width(self, body_len: usize) -> usize {
        match self {
            Self::Prefixed => 1 + body_len,
            Self::Fixed(n) => n as usize,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A single request-info bit of one record kind.
pub trait InfoBit: sealed::Sealed + Copy + Ord + fmt::Debug + 'static {
    /// Every defined bit, in canonical (ascending) order.
    const ALL: &'static [Self];

    fn mask(self) -> u32;

    /// Upper-case wire name, e.g. `KEY_LINKED`.
    fn name(self) -> &'static str;

    fn shape(self) -> SectionShape;

    /// Whether the section body is a pattern stream.
    fn carries_patterns(self) -> bool {
        false
    }

    /// Slot in a per-record section table (bit position).
    #[inline]
    fn slot(self) -> usize {
        self.mask().trailing_zeros() as usize
    }

    fn defined_mask() -> u32 {
        Self::ALL.iter().fold(0, |m, b| m | b.mask())
    }
}

/// Bits shared by lookup and scan-fragment node records.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u32)]
pub enum NodeInfoBit {
    /// Parent linkage: at least one pattern reads a column of an ancestor row.
    HasParent = 0x01,
    /// Key info contains linked values.
    KeyLinked = 0x02,
    /// Key info contains parameters.
    KeyParams = 0x04,
    /// Key info contains constant values.
    KeyConsts = 0x08,
    /// Attributes this node projects for its children.
    LinkedAttr = 0x10,
    /// Attribute info is an interpreted program.
    AttrInterpret = 0x20,
    /// Attribute info contains parameters.
    AttrParams = 0x40,
    /// Attribute info contains linked values.
    AttrLinked = 0x80,
    /// A child links against a disk column of this node. Marker only.
    LinkedDisk = 0x100,
}

impl sealed::Sealed for NodeInfoBit {}

impl InfoBit for NodeInfoBit {
    const ALL: &'static [Self] = &[
        Self::HasParent,
        Self::KeyLinked,
        Self::KeyParams,
        Self::KeyConsts,
        Self::LinkedAttr,
        Self::AttrInterpret,
        Self::AttrParams,
        Self::AttrLinked,
        Self::LinkedDisk,
    ];

    fn mask(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            Self::HasParent => "HAS_PARENT",
            Self::KeyLinked => "KEY_LINKED",
            Self::KeyParams => "KEY_PARAMS",
            Self::KeyConsts => "KEY_CONSTS",
            Self::LinkedAttr => "LINKED_ATTR",
            Self::AttrInterpret => "ATTR_INTERPRET",
            Self::AttrParams => "ATTR_PARAMS",
            Self::AttrLinked => "ATTR_LINKED",
            Self::LinkedDisk => "LINKED_DISK",
        }
    }

    fn shape(self) -> SectionShape {
        match self {
            Self::LinkedDisk => SectionShape::Fixed(0),
            _ => SectionShape::Prefixed,
        }
    }

    fn carries_patterns(self) -> bool {
        matches!(
            self,
            Self::KeyLinked | Self::KeyParams | Self::KeyConsts | Self::AttrParams | Self::AttrLinked
        )
    }
}

/// Bits of lookup and scan-fragment parameter records.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u32)]
pub enum ParamInfoBit {
    /// User projection list.
    AttrList = 0x1,
    /// Attribute-info parameter values (pairs with `NodeInfoBit::AttrParams`).
    AttrParams = 0x2,
    /// Key-info parameter values (pairs with `NodeInfoBit::KeyParams`).
    KeyParams = 0x4,
    /// Program interpreted before reading attributes, i.e. a scan filter.
    AttrInterpret = 0x8,
    /// The user projection contains at least one disk column. Marker only.
    DiskAttr = 0x10,
}

impl sealed::Sealed for ParamInfoBit {}

impl InfoBit for ParamInfoBit {
    const ALL: &'static [Self] = &[
        Self::AttrList,
        Self::AttrParams,
        Self::KeyParams,
        Self::AttrInterpret,
        Self::DiskAttr,
    ];

    fn mask(self) -> u32 {
        self as u32
    }

    fn name(self) -> &'static str {
        match self {
            Self::AttrList => "ATTR_LIST",
            Self::AttrParams => "ATTR_PARAMS",
            Self::KeyParams => "KEY_PARAMS",
            Self::AttrInterpret => "ATTR_INTERPRET",
            Self::DiskAttr => "DISK_ATTR",
        }
    }

    fn shape(self) -> SectionShape {
        match self {
            Self::DiskAttr => SectionShape::Fixed(0),
            _ => SectionShape::Prefixed,
        }
    }
}

const _: () = assert!(NodeInfoBit::LinkedDisk as u32 >> MAX_INFO_BITS == 0);
const _: () = assert!(ParamInfoBit::DiskAttr as u32 >> MAX_INFO_BITS == 0);

/// Set of request-info bits of one record kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoBits<B: InfoBit> {
    mask: u32,
    _marker: PhantomData<B>,
}

impl<B: InfoBit> Default for InfoBits<B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<B: InfoBit> InfoBits<B> {
    pub const fn empty() -> Self {
        Self {
            mask: 0,
            _marker: PhantomData,
        }
    }

    /// Interpret a raw request-info word, rejecting undefined bits.
    pub fn from_bits(mask: u32) -> Result<Self, WireError> {
        if mask & !B::defined_mask() != 0 {
            return Err(WireError::UnknownInfoBits(mask));
        }
        Ok(Self {
            mask,
            _marker: PhantomData,
        })
    }

    pub fn bits(self) -> u32 {
        self.mask
    }

    pub fn contains(self, bit: B) -> bool {
        self.mask & bit.mask() != 0
    }

    pub fn insert(&mut self, bit: B) {
        self.mask |= bit.mask();
    }

    pub fn with(mut self, bit: B) -> Self {
        self.insert(bit);
        self
    }

    pub fn is_empty(self) -> bool {
        self.mask == 0
    }

    pub fn len(self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Set bits in canonical section order.
    pub fn iter(self) -> impl Iterator<Item = B> {
        B::ALL.iter().copied().filter(move |b| self.contains(*b))
    }
}

impl<B: InfoBit> FromIterator<B> for InfoBits<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut bits = Self::empty();
        for b in iter {
            bits.insert(b);
        }
        bits
    }
}

impl<B: InfoBit> fmt::Display for InfoBits<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, bit) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(bit.name())?;
        }
        Ok(())
    }
}

impl<B: InfoBit> fmt::Debug for InfoBits<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoBits(0x{:03x}: {self})", self.mask)
    }
}
