//! Bounds-checked forward reader over a word slice.

use crate::error::WireError;

/// Cursor over an immutable word sequence.
///
/// Every read is checked against the slice bound and reports
/// [`WireError::Truncated`] instead of reading past it. Slices handed out by
/// [`take`](Self::take) borrow from the underlying buffer.
#[derive(Clone, Copy, Debug)]
pub struct WordCursor<'a> {
    words: &'a [u32],
    pos: usize,
}

impl<'a> WordCursor<'a> {
    pub fn new(words: &'a [u32]) -> Self {
        Self { words, pos: 0 }
    }

    /// Cursor starting at `pos`. A position past the end is allowed and
    /// fails on the first read.
    pub fn at(words: &'a [u32], pos: usize) -> Self {
        Self { words, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.words.len().saturating_sub(self.pos)
    }

    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek(&self) -> Result<u32, WireError> {
        self.words
            .get(self.pos)
            .copied()
            .ok_or_else(|| self.truncated(1))
    }

    pub fn read(&mut self) -> Result<u32, WireError> {
        let word = self.peek()?;
        self.pos += 1;
        Ok(word)
    }

    /// Borrow the next `n` words and advance past them.
    pub fn take(&mut self, n: usize) -> Result<&'a [u32], WireError> {
        let slice = self
            .pos
            .checked_add(n)
            .and_then(|end| self.words.get(self.pos..end))
            .ok_or_else(|| self.truncated(n))?;
        self.pos += n;
        Ok(slice)
    }

    fn truncated(&self, n: usize) -> WireError {
        WireError::Truncated {
            needed: self.pos.saturating_add(n),
            available: self.words.len(),
        }
    }
}
