//! Query trees: a header word followed by concatenated records.
//!
//! Layout (words):
//! - 0: node count (low 16) + total record words (high 16, header excluded)
//! - 1..: records, root first, no padding
//!
//! Parent/child relations live inside the records' patterns; the tree layer
//! only frames and walks them.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::constants::TREE_HEADER_WORDS;
use crate::cursor::WordCursor;
use crate::error::WireError;
use crate::limits::DecodeLimits;
use crate::record::{NodeRecord, ParamRecord, RecordKind, RecordView};
use crate::word::{pack_count_len, unpack_count, unpack_len};

/// Frame already-encoded records into a tree.
///
/// Records are copied verbatim; their contents are not checked.
pub fn encode_tree<N: AsRef<[u32]>>(nodes: &[N]) -> Result<Vec<u32>, WireError> {
    let total: usize = nodes.iter().map(|n| n.as_ref().len()).sum();
    let header = pack_count_len(nodes.len(), total)?;

    let mut words = Vec::with_capacity(TREE_HEADER_WORDS + total);
    words.push(header);
    for node in nodes {
        words.extend_from_slice(node.as_ref());
    }

    tracing::debug!(nodes = nodes.len(), words = total, "encoded tree");
    Ok(words)
}

/// Frame already-encoded parameter records. Same layout as [`encode_tree`].
pub fn encode_param_tree<N: AsRef<[u32]>>(params: &[N]) -> Result<Vec<u32>, WireError> {
    encode_tree(params)
}

/// Parse the header of a node tree with default limits.
pub fn decode_tree(buffer: &[u32]) -> Result<TreeView<'_, NodeRecord>, WireError> {
    TreeView::parse_with(buffer, DecodeLimits::default())
}

pub fn decode_tree_with(
    buffer: &[u32],
    limits: DecodeLimits,
) -> Result<TreeView<'_, NodeRecord>, WireError> {
    TreeView::parse_with(buffer, limits)
}

pub fn decode_param_tree(buffer: &[u32]) -> Result<TreeView<'_, ParamRecord>, WireError> {
    TreeView::parse_with(buffer, DecodeLimits::default())
}

pub fn decode_param_tree_with(
    buffer: &[u32],
    limits: DecodeLimits,
) -> Result<TreeView<'_, ParamRecord>, WireError> {
    TreeView::parse_with(buffer, limits)
}

/// A tree whose header has been checked against the buffer.
///
/// Records are decoded lazily by [`nodes`](Self::nodes). Nothing past the
/// declared total length is ever read, however long the buffer is.
pub struct TreeView<'a, K: RecordKind> {
    records: &'a [u32],
    node_count: usize,
    allow_slack: bool,
    _kind: PhantomData<K>,
}

pub type QueryTreeView<'a> = TreeView<'a, NodeRecord>;
pub type ParamTreeView<'a> = TreeView<'a, ParamRecord>;

impl<K: RecordKind> Clone for TreeView<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: RecordKind> Copy for TreeView<'_, K> {}

impl<K: RecordKind> std::fmt::Debug for TreeView<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeView")
            .field("kind", &K::LABEL)
            .field("node_count", &self.node_count)
            .field("total_words", &self.records.len())
            .finish()
    }
}

impl<'a, K: RecordKind> TreeView<'a, K> {
    pub fn parse(buffer: &'a [u32]) -> Result<Self, WireError> {
        Self::parse_with(buffer, DecodeLimits::default())
    }

    pub fn parse_with(buffer: &'a [u32], limits: DecodeLimits) -> Result<Self, WireError> {
        let result = Self::parse_header(buffer, limits);
        if let Err(err) = &result {
            tracing::warn!(kind = K::LABEL, error = %err, "rejected tree header");
        }
        result
    }

    fn parse_header(buffer: &'a [u32], limits: DecodeLimits) -> Result<Self, WireError> {
        let mut cursor = WordCursor::new(buffer);
        let header = cursor.read()?;
        let node_count = unpack_count(header) as usize;
        let total = unpack_len(header) as usize;

        if node_count > limits.max_nodes {
            return Err(WireError::LimitExceeded {
                limit: "node count",
                value: node_count,
                max: limits.max_nodes,
            });
        }
        if total > limits.max_words {
            return Err(WireError::LimitExceeded {
                limit: "tree length",
                value: total,
                max: limits.max_words,
            });
        }

        let records = cursor.take(total)?;
        Ok(Self {
            records,
            node_count,
            allow_slack: limits.allow_slack,
            _kind: PhantomData,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Declared record words, header excluded.
    pub fn total_words(&self) -> usize {
        self.records.len()
    }

    /// The record region, `buffer[1..1 + total]`.
    pub fn record_words(&self) -> &'a [u32] {
        self.records
    }

    pub fn nodes(&self) -> TreeIter<'a, K> {
        TreeIter {
            records: self.records,
            pos: 0,
            index: 0,
            count: self.node_count,
            allow_slack: self.allow_slack,
            done: false,
            _kind: PhantomData,
        }
    }

    /// Decode every record and confirm the header's count and length.
    pub fn validate(&self) -> Result<(), WireError> {
        for node in self.nodes() {
            node?;
        }
        tracing::debug!(
            kind = K::LABEL,
            nodes = self.node_count,
            words = self.records.len(),
            "decoded tree"
        );
        Ok(())
    }

    pub fn collect_owned(&self) -> Result<Vec<K::Owned>, WireError> {
        let owned = self
            .nodes()
            .map(|node| node.map(|view| view.to_owned()))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            kind = K::LABEL,
            nodes = owned.len(),
            words = self.records.len(),
            "decoded tree"
        );
        Ok(owned)
    }
}

impl<'a, K: RecordKind> IntoIterator for TreeView<'a, K> {
    type Item = Result<RecordView<'a, K>, WireError>;
    type IntoIter = TreeIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

impl<'a, K: RecordKind> IntoIterator for &TreeView<'a, K> {
    type Item = Result<RecordView<'a, K>, WireError>;
    type IntoIter = TreeIter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// Lazy record walk over a tree.
///
/// Yields exactly `node_count` records, then one [`WireError::LengthMismatch`]
/// if the last record did not end on the declared total. Stops after the
/// first error.
pub struct TreeIter<'a, K: RecordKind> {
    records: &'a [u32],
    pos: usize,
    index: usize,
    count: usize,
    allow_slack: bool,
    done: bool,
    _kind: PhantomData<K>,
}

impl<'a, K: RecordKind> TreeIter<'a, K> {
    /// Records yielded so far.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Word offset of the next record within the record region.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn mismatch(&self) -> WireError {
        WireError::LengthMismatch {
            declared: self.records.len(),
            consumed: self.pos,
        }
    }

    fn fail(&mut self, err: WireError) -> Option<Result<RecordView<'a, K>, WireError>> {
        self.done = true;
        tracing::warn!(
            kind = K::LABEL,
            index = self.index,
            offset = self.pos,
            error = %err,
            "rejected tree"
        );
        Some(Err(err))
    }
}

impl<'a, K: RecordKind> Iterator for TreeIter<'a, K> {
    type Item = Result<RecordView<'a, K>, WireError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.index == self.count {
            self.done = true;
            if self.pos != self.records.len() {
                let err = self.mismatch();
                return self.fail(err);
            }
            return None;
        }
        if self.pos == self.records.len() {
            let err = self.mismatch();
            return self.fail(err);
        }

        match RecordView::<K>::decode(self.records, self.pos, self.allow_slack) {
            Ok(view) => {
                tracing::trace!(
                    kind = K::LABEL,
                    index = self.index,
                    op = view.op_type().as_str(),
                    len = view.consumed_words(),
                    "decoded record"
                );
                self.pos += view.consumed_words();
                self.index += 1;
                Some(Ok(view))
            }
            Err(err) => self.fail(err),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        (0, Some(self.count - self.index + 1))
    }
}

impl<K: RecordKind> FusedIterator for TreeIter<'_, K> {}

/// Accumulates records and frames them into a tree.
///
/// [`push`](Self::push) encodes from an owned record. Pre-encoded words
/// given to [`push_encoded`](Self::push_encoded) are decoded once and must
/// form exactly one record, so [`build`](Self::build) output always passes
/// [`TreeView::validate`].
#[derive(Debug)]
pub struct TreeBuilder<K: RecordKind> {
    words: Vec<u32>,
    count: usize,
    _kind: PhantomData<K>,
}

pub type QueryTreeBuilder = TreeBuilder<NodeRecord>;
pub type ParamTreeBuilder = TreeBuilder<ParamRecord>;

impl<K: RecordKind> Default for TreeBuilder<K> {
    fn default() -> Self {
        Self {
            words: vec![0; TREE_HEADER_WORDS],
            count: 0,
            _kind: PhantomData,
        }
    }
}

impl<K: RecordKind> TreeBuilder<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: &K::Owned) -> Result<&mut Self, WireError> {
        let record = K::encode_owned(node)?;
        self.words.extend_from_slice(&record);
        self.count += 1;
        Ok(self)
    }

    /// Append one encoded record. The slice must hold exactly one record.
    pub fn push_encoded(&mut self, record: &[u32]) -> Result<&mut Self, WireError> {
        let view = RecordView::<K>::decode(record, 0, false)?;
        if view.consumed_words() != record.len() {
            return Err(WireError::TrailingSlack {
                words: record.len() - view.consumed_words(),
            });
        }
        self.words.extend_from_slice(record);
        self.count += 1;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn build(mut self) -> Result<Vec<u32>, WireError> {
        let total = self.words.len() - TREE_HEADER_WORDS;
        self.words[0] = pack_count_len(self.count, total)?;
        tracing::debug!(kind = K::LABEL, nodes = self.count, words = total, "built tree");
        Ok(self.words)
    }
}
