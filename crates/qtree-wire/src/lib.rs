#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Word-oriented wire format for pushed-down join/scan query trees.
//!
//! A tree is a header word followed by variable-length operation records.
//! Each record carries a fixed header and optional sections selected by
//! request-info bits; key and attribute sections hold pattern streams that
//! describe where each input value comes from.
//!
//! Decoding hands out views borrowing from the input words. Every read is
//! bounds-checked and every declared length is verified.

pub mod buffer;
pub mod constants;
pub mod cursor;
pub mod dump;
pub mod error;
pub mod info;
pub mod limits;
pub mod pattern;
pub mod record;
pub mod section;
pub mod tree;
pub mod word;

#[cfg(test)]
mod buffer_tests;
#[cfg(test)]
mod cursor_tests;
#[cfg(test)]
mod info_tests;
#[cfg(test)]
mod pattern_tests;
#[cfg(test)]
mod word_tests;

pub use buffer::{words_from_bytes, words_to_bytes};
pub use cursor::WordCursor;
pub use dump::{dump, dump_params, dump_params_with, dump_with};
pub use error::{ErrorKind, WireError};
pub use info::{InfoBit, InfoBits, NodeInfoBit, ParamInfoBit, SectionShape};
pub use limits::DecodeLimits;
pub use pattern::{Pattern, PatternReader, PatternTag, PatternWriter, RawPattern};
pub use record::{
    NodeBody, NodeRecord, NodeView, OpType, OperationNode, OperationParams, ParamBody,
    ParamRecord, ParamsView, RecordKind, RecordView, decode_node, decode_params, encode_lookup,
    encode_lookup_parameters, encode_scan_frag_parameters, encode_scan_fragment,
};
pub use section::{SectionTable, Sections};
pub use tree::{
    ParamTreeBuilder, ParamTreeView, QueryTreeBuilder, QueryTreeView, TreeBuilder, TreeIter,
    TreeView, decode_param_tree, decode_param_tree_with, decode_tree, decode_tree_with,
    encode_param_tree, encode_tree,
};
