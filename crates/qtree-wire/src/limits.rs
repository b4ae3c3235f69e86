//! Caller-supplied bounds for tree decoding.

use crate::constants::MAX_FIELD;

/// Bounds applied while decoding a tree.
///
/// The header fields are 16 bits wide, so the defaults admit every tree the
/// encoder can produce. Lower them to reject oversized input before any
/// record is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum node count in the tree header (default: 65,535).
    pub(crate) max_nodes: usize,
    /// Maximum total record words in the tree header (default: 65,535).
    pub(crate) max_words: usize,
    /// Tolerate unused words at the end of a record (default: false).
    pub(crate) allow_slack: bool,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_nodes: MAX_FIELD,
            max_words: MAX_FIELD,
            allow_slack: false,
        }
    }
}

impl DecodeLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node count limit.
    pub fn max_nodes(mut self, max: usize) -> Self {
        self.max_nodes = max;
        self
    }

    /// Set the tree length limit, in words.
    pub fn max_words(mut self, max: usize) -> Self {
        self.max_words = max;
        self
    }

    /// Accept records whose declared length exceeds their sections.
    pub fn allow_slack(mut self, allow: bool) -> Self {
        self.allow_slack = allow;
        self
    }

    pub fn get_max_nodes(&self) -> usize {
        self.max_nodes
    }
    pub fn get_max_words(&self) -> usize {
        self.max_words
    }
    pub fn get_allow_slack(&self) -> bool {
        self.allow_slack
    }
}
