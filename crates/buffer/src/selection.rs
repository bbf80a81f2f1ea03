// Chunk: docs/chunks/caret_selection - Anchor/caret offsets and edit remapping

//! Caret and selection tracking in the anchor-caret model.
//!
//! The tracker only holds two offsets. It knows nothing about the content;
//! the text area remaps it after every edit with [`CaretSelection::remap`]
//! so the offsets are never stale.

use crate::types::IndexRange;

/// Anchor and caret offsets. `anchor == caret` means no selection.
///
/// The anchor may sit before or after the caret; both directions are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaretSelection {
    anchor: usize,
    caret: usize,
}

impl CaretSelection {
    pub fn new(anchor: usize, caret: usize) -> Self {
        Self { anchor, caret }
    }

    pub fn anchor(&self) -> usize {
        self.anchor
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Returns the selection in document order.
    pub fn range(&self) -> IndexRange {
        IndexRange::normalized(self.anchor, self.caret)
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.caret
    }

    /// Moves only the caret; the anchor stays put.
    pub(crate) fn set_caret(&mut self, caret: usize) {
        self.caret = caret;
    }

    /// Remaps both offsets after `[start, end)` was replaced by
    /// `inserted_len` offsets, then clamps them to `new_len`.
    pub(crate) fn remap(&mut self, start: usize, end: usize, inserted_len: usize, new_len: usize) {
        self.anchor = remap_offset(self.anchor, start, end, inserted_len).min(new_len);
        self.caret = remap_offset(self.caret, start, end, inserted_len).min(new_len);
    }
}

/// Maps an offset across the replacement of `[start, end)` by `inserted_len`
/// offsets.
///
/// - At or before `start`: unchanged.
/// - Strictly inside the replaced range: collapses to the end of the
///   inserted text.
/// - At or after `end`: shifted by the length delta.
pub fn remap_offset(offset: usize, start: usize, end: usize, inserted_len: usize) -> usize {
    if offset <= start {
        offset
    } else if offset < end {
        start + inserted_len
    } else {
        offset - (end - start) + inserted_len
    }
}
