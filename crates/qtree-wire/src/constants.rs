//! Wire format constants.

/// Largest value any packed 16-bit field can hold.
pub const MAX_FIELD: usize = 0xFFFF;

/// Words in the fixed part of a lookup / scan-fragment node record:
/// op+len, request info, table id, table version.
pub const NODE_FIXED_WORDS: usize = 4;

/// Words in the fixed part of a parameter record:
/// op+len, request info, result destination.
pub const PARAM_FIXED_WORDS: usize = 3;

/// Words in the tree header (node count + total length).
pub const TREE_HEADER_WORDS: usize = 1;

/// Reserved op type terminating a node list. Never a valid record.
pub const OP_END: u16 = 0;

/// Upper bound on the number of info bits any record kind defines.
pub const MAX_INFO_BITS: usize = 16;
