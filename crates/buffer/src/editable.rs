// Chunk: docs/chunks/edit_primitive - Core editing capability trait

//! The core capability every editable text area provides.
//!
//! [`EditableText`] is deliberately narrow: read accessors, the two
//! caret/selection setters, stepping helpers, and exactly one content
//! mutation, [`replace_text`](EditableText::replace_text). Higher-level
//! editing lives in [`EditActions`](crate::EditActions), which is implemented
//! for every `EditableText` in terms of these methods alone.

use crate::error::Result;
use crate::paragraph::Paragraph;
use crate::text_unit::TextUnit;
use crate::types::IndexRange;

pub trait EditableText {
    /// Style value carried by each paragraph.
    type Style;

    // ==================== Content ====================

    /// Total length in offsets (code points plus one per paragraph boundary).
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole document, paragraphs joined by `'\n'`.
    fn text(&self) -> String;

    /// Text of one paragraph, without separator.
    fn paragraph_text(&self, index: usize) -> Result<&str>;

    /// Text over `[start, end)`.
    fn text_range(&self, start: usize, end: usize) -> Result<String>;

    /// Read-only ordered view of the paragraphs.
    fn paragraphs(&self) -> &[Paragraph<Self::Style>];

    // ==================== Caret & selection ====================

    fn caret_position(&self) -> usize;

    /// The selection endpoint that `position_caret` leaves alone. Equals the
    /// caret when there is no selection.
    fn anchor(&self) -> usize;

    /// The selection in document order.
    fn selection(&self) -> IndexRange {
        IndexRange::normalized(self.anchor(), self.caret_position())
    }

    /// Text over [`selection`](EditableText::selection); empty when there is
    /// no selection.
    ///
    /// Fails only if the implementation let its caret or anchor fall outside
    /// the document.
    fn selected_text(&self) -> Result<String> {
        let range = self.selection();
        self.text_range(range.start, range.end)
    }

    /// Index of the paragraph holding the caret.
    fn current_paragraph(&self) -> usize;

    /// Caret column within the current paragraph.
    fn caret_column(&self) -> usize;

    /// Sets anchor and caret explicitly. Fails with `OutOfRange` if either is
    /// past the end of the document.
    fn select_range(&mut self, anchor: usize, caret: usize) -> Result<()>;

    /// Moves only the caret, leaving the anchor in place.
    ///
    /// This can put the caret inside a former selection, or leave caret and
    /// anchor describing a different range than before. Fails with
    /// `OutOfRange` if `pos` is past the end of the document.
    fn position_caret(&mut self, pos: usize) -> Result<()>;

    // ==================== Stepping ====================

    /// The offset one `unit` before `offset`.
    fn boundary_before(&self, offset: usize, unit: TextUnit) -> Result<usize>;

    /// The offset one `unit` after `offset`.
    fn boundary_after(&self, offset: usize, unit: TextUnit) -> Result<usize>;

    // ==================== Flags ====================

    fn is_editable(&self) -> bool;
    fn set_editable(&mut self, editable: bool);
    fn is_wrap_text(&self) -> bool;
    fn set_wrap_text(&mut self, wrap_text: bool);

    // ==================== Mutation ====================

    /// Replaces `[start, end)` with `text`. The only content mutation.
    ///
    /// Requires `start <= end <= len()`; otherwise fails with `InvalidRange`
    /// and changes nothing.
    fn replace_text(&mut self, start: usize, end: usize, text: &str) -> Result<()>;
}
