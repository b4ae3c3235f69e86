//! Conversion between transport bytes and host-order words.
//!
//! Trees travel as opaque word arrays in the host's native byte order; no
//! byte swapping is performed.

use crate::error::WireError;

const WORD_BYTES: usize = size_of::<u32>();

/// Reinterpret a byte buffer as native-order words.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<u32>, WireError> {
    if !bytes.len().is_multiple_of(WORD_BYTES) {
        return Err(WireError::UnalignedBuffer(bytes.len()));
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

pub fn words_to_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_ne_bytes()).collect()
}
