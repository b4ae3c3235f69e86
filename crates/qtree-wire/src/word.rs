//! Packing of two 16-bit fields into one 32-bit word.
//!
//! Record headers carry the op type in the low half and the record length in
//! the high half. The tree header uses the same shape with the node count in
//! the low half and the total length in the high half.

use crate::constants::MAX_FIELD;
use crate::error::WireError;

/// Narrow `value` to 16 bits or report which field overflowed.
#[inline]
pub(crate) fn check_u16(field: &'static str, value: usize) -> Result<u16, WireError> {
    if value > MAX_FIELD {
        return Err(WireError::FieldOverflow { field, value });
    }
    Ok(value as u16)
}

/// `(len << 16) | op`
pub fn pack_op_len(op: usize, len: usize) -> Result<u32, WireError> {
    let op = check_u16("op type", op)?;
    let len = check_u16("record length", len)?;
    Ok(join(op, len))
}

/// `(len << 16) | count`
pub fn pack_count_len(count: usize, len: usize) -> Result<u32, WireError> {
    let count = check_u16("node count", count)?;
    let len = check_u16("tree length", len)?;
    Ok(join(count, len))
}

#[inline]
pub fn unpack_op(word: u32) -> u16 {
    low(word)
}

#[inline]
pub fn unpack_count(word: u32) -> u16 {
    low(word)
}

/// High half of a packed word: record length or total tree length.
#[inline]
pub fn unpack_len(word: u32) -> u16 {
    (word >> 16) as u16
}

#[inline]
fn join(low: u16, high: u16) -> u32 {
    ((high as u32) << 16) | low as u32
}

#[inline]
fn low(word: u32) -> u16 {
    (word & 0xFFFF) as u16
}
