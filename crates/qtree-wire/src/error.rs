//! Errors raised while encoding or decoding query trees.

use crate::constants::MAX_FIELD;

/// Coarse classification of a [`WireError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A count, length or index does not fit its field (producer side).
    Range,
    /// Flags and supplied sections disagree during encode.
    Layout,
    /// A record carries an op type other than lookup or scan-fragment.
    UnknownOpType,
    /// A declared length runs past the available words.
    TruncatedBuffer,
    /// Node count and total length in the tree header disagree with the records.
    LengthMismatch,
    /// A record's internal structure is inconsistent with its own header.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    #[error("{field} {value} does not fit in 16 bits (max {MAX_FIELD})")]
    FieldOverflow { field: &'static str, value: usize },

    #[error("{limit} {value} exceeds configured maximum {max}")]
    LimitExceeded {
        limit: &'static str,
        value: usize,
        max: usize,
    },

    #[error("flag {bit} is set but no section was supplied")]
    MissingSection { bit: &'static str },

    #[error("section supplied for {bit} but the flag is not set")]
    UnexpectedSection { bit: &'static str },

    #[error("section {bit} is fixed at {expected} words, got {actual}")]
    FixedSectionWidth {
        bit: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("unknown op type {0} (expected 1=lookup or 2=scan_frag)")]
    UnknownOpType(u16),

    #[error("buffer truncated: need {needed} words, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("byte buffer of {0} bytes is not a whole number of words")]
    UnalignedBuffer(usize),

    #[error("tree length mismatch: header declares {declared} words, records consumed {consumed}")]
    LengthMismatch { declared: usize, consumed: usize },

    #[error("record length {declared} is shorter than its fixed header ({minimum} words)")]
    RecordTooShort { declared: usize, minimum: usize },

    #[error("request info 0x{0:08x} contains undefined bits")]
    UnknownInfoBits(u32),

    #[error("section {bit} ends at word {end}, past record length {record_len}")]
    SectionOverrun {
        bit: &'static str,
        end: usize,
        record_len: usize,
    },

    #[error("{words} words left over after the last section")]
    TrailingSlack { words: usize },

    #[error("unknown pattern tag {0}")]
    UnknownPatternTag(u16),
}

impl WireError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FieldOverflow { .. } | Self::LimitExceeded { .. } => ErrorKind::Range,
            Self::MissingSection { .. }
            | Self::UnexpectedSection { .. }
            | Self::FixedSectionWidth { .. } => ErrorKind::Layout,
            Self::UnknownOpType(_) => ErrorKind::UnknownOpType,
            Self::Truncated { .. } | Self::UnalignedBuffer(_) => ErrorKind::TruncatedBuffer,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::RecordTooShort { .. }
            | Self::UnknownInfoBits(_)
            | Self::SectionOverrun { .. }
            | Self::TrailingSlack { .. }
            | Self::UnknownPatternTag(_) => ErrorKind::Malformed,
        }
    }

    /// Whether resending the same tree could succeed.
    ///
    /// Only an incomplete transmission qualifies; every other error is
    /// deterministic for the given input.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::TruncatedBuffer
    }
}
