//! Optional trailing sections of a record.

use std::collections::BTreeMap;

use crate::constants::MAX_INFO_BITS;
use crate::error::WireError;
use crate::info::{InfoBit, InfoBits, SectionShape};
use crate::word::check_u16;

/// Owned section bodies keyed by info bit, iterated in canonical order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sections<B: InfoBit> {
    map: BTreeMap<B, Vec<u32>>,
}

impl<B: InfoBit> Default for Sections<B> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }
}

impl<B: InfoBit> Sections<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, bit: B, body: impl Into<Vec<u32>>) -> Self {
        self.insert(bit, body);
        self
    }

    /// Marker sections (`Fixed(0)`) take an empty body.
    pub fn insert(&mut self, bit: B, body: impl Into<Vec<u32>>) -> Option<Vec<u32>> {
        self.map.insert(bit, body.into())
    }

    pub fn get(&self, bit: B) -> Option<&[u32]> {
        self.map.get(&bit).map(Vec::as_slice)
    }

    /// The flag set implied by the supplied sections.
    pub fn flags(&self) -> InfoBits<B> {
        self.map.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (B, &[u32])> {
        self.map.iter().map(|(b, body)| (*b, body.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Wire words all sections occupy, framing included.
    pub fn wire_width(&self) -> usize {
        self.iter().map(|(b, body)| b.shape().wire_width(body.len())).sum()
    }
}

/// Append every section selected by `flags` in canonical order.
///
/// Every set flag needs a section and every section needs its flag.
pub(crate) fn write_sections<B: InfoBit>(
    flags: InfoBits<B>,
    sections: &Sections<B>,
    out: &mut Vec<u32>,
) -> Result<(), WireError> {
    if let Some(bit) = sections.iter().map(|(b, _)| b).find(|b| !flags.contains(*b)) {
        return Err(WireError::UnexpectedSection { bit: bit.name() });
    }

    for bit in flags.iter() {
        let body = sections
            .get(bit)
            .ok_or(WireError::MissingSection { bit: bit.name() })?;

        match bit.shape() {
            SectionShape::Prefixed => {
                let len = check_u16("section length", body.len())?;
                out.push(len as u32);
            }
            SectionShape::Fixed(n) if body.len() != n as usize => {
                return Err(WireError::FixedSectionWidth {
                    bit: bit.name(),
                    expected: n as usize,
                    actual: body.len(),
                });
            }
            SectionShape::Fixed(_) => {}
        }
        out.extend_from_slice(body);
    }
    Ok(())
}

/// Borrowed section bodies of one decoded record, indexed by bit slot.
#[derive(Clone, Copy, Debug, Default)]
pub struct SectionTable<'a> {
    slots: [Option<&'a [u32]>; MAX_INFO_BITS],
}

impl<'a> SectionTable<'a> {
    pub fn get<B: InfoBit>(&self, bit: B) -> Option<&'a [u32]> {
        self.slots.get(bit.slot()).copied().flatten()
    }

    fn set<B: InfoBit>(&mut self, bit: B, body: &'a [u32]) {
        if let Some(slot) = self.slots.get_mut(bit.slot()) {
            *slot = Some(body);
        }
    }
}

/// Slice the sections selected by `flags` out of `record`, starting at
/// `start`. Returns the table and the word index after the last section.
///
/// Sections may not run past the end of `record`.
pub(crate) fn read_sections<'a, B: InfoBit>(
    flags: InfoBits<B>,
    record: &'a [u32],
    start: usize,
) -> Result<(SectionTable<'a>, usize), WireError> {
    let mut table = SectionTable::default();
    let mut pos = start;

    for bit in flags.iter() {
        let overrun = |end: usize| WireError::SectionOverrun {
            bit: bit.name(),
            end,
            record_len: record.len(),
        };

        let body_start = match bit.shape() {
            SectionShape::Prefixed => pos + 1,
            SectionShape::Fixed(_) => pos,
        };
        let body_len = match bit.shape() {
            SectionShape::Prefixed => *record.get(pos).ok_or_else(|| overrun(pos + 1))? as usize,
            SectionShape::Fixed(n) => n as usize,
        };
        let end = body_start.saturating_add(body_len);
        let body = record.get(body_start..end).ok_or_else(|| overrun(end))?;

        table.set(bit, body);
        pos = end;
    }
    Ok((table, pos))
}
