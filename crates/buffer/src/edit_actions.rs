// Chunk: docs/chunks/edit_actions - Derived editing actions

//! Higher-level editing actions layered over [`EditableText`].
//!
//! Every action is a composition of `replace_text`, `select_range` and the
//! read accessors; none touches paragraphs directly. Actions either build a
//! range they know to be valid or forward the caller's range and let
//! `replace_text` reject it.

use crate::editable::EditableText;
use crate::error::{EditError, Result};
use crate::text_unit::TextUnit;
use crate::types::IndexRange;

/// Extension trait providing the derived editing actions.
///
/// Implemented for every [`EditableText`], so a new buffer type gets all of
/// these by implementing the core trait.
///
/// ```
/// use codearea_buffer::{EditActions, EditableText, TextArea};
///
/// let mut area = TextArea::from_text("hello world", ());
/// area.select_range(0, 5).unwrap();
/// area.move_selected_text(11).unwrap();
/// assert_eq!(area.text(), " worldhello");
/// assert_eq!(area.caret_position(), 6);
/// ```
pub trait EditActions: EditableText {
    /// Appends `text` to the end of the document.
    fn append_text(&mut self, text: &str) -> Result<()> {
        let len = self.len();
        self.insert_text(len, text)
    }

    /// Inserts `text` at `index`.
    fn insert_text(&mut self, index: usize, text: &str) -> Result<()> {
        self.replace_text(index, index, text)
    }

    /// Removes the text in `range`.
    fn delete_range(&mut self, range: IndexRange) -> Result<()> {
        self.delete_text(range.start, range.end)
    }

    /// Removes `[start, end)`.
    fn delete_text(&mut self, start: usize, end: usize) -> Result<()> {
        self.replace_text(start, end, "")
    }

    /// Deletes the code point before the caret (Backspace).
    ///
    /// Does nothing at the start of the document. At the start of a paragraph
    /// this deletes the separator, merging with the previous paragraph.
    fn delete_previous_char(&mut self) -> Result<()> {
        self.delete_previous(TextUnit::CodePoint)
    }

    /// Deletes the code point after the caret (Delete).
    ///
    /// Does nothing at the end of the document.
    fn delete_next_char(&mut self) -> Result<()> {
        self.delete_next(TextUnit::CodePoint)
    }

    /// Deletes the grapheme cluster before the caret.
    fn delete_previous_grapheme(&mut self) -> Result<()> {
        self.delete_previous(TextUnit::Grapheme)
    }

    /// Deletes the grapheme cluster after the caret.
    fn delete_next_grapheme(&mut self) -> Result<()> {
        self.delete_next(TextUnit::Grapheme)
    }

    /// Deletes one `unit` ending at the caret.
    fn delete_previous(&mut self, unit: TextUnit) -> Result<()> {
        let end = self.caret_position();
        if end == 0 {
            return Ok(());
        }
        let start = self.boundary_before(end, unit)?;
        self.delete_text(start, end)
    }

    /// Deletes one `unit` starting at the caret.
    fn delete_next(&mut self, unit: TextUnit) -> Result<()> {
        let start = self.caret_position();
        if start >= self.len() {
            return Ok(());
        }
        let end = self.boundary_after(start, unit)?;
        self.delete_text(start, end)
    }

    /// Removes all text, leaving one empty paragraph.
    fn clear(&mut self) -> Result<()> {
        let len = self.len();
        self.replace_text(0, len, "")
    }

    /// Replaces the whole document with `replacement`.
    fn replace_all(&mut self, replacement: &str) -> Result<()> {
        let len = self.len();
        self.replace_text(0, len, replacement)
    }

    /// Replaces the text in `range` with `text`.
    fn replace_range(&mut self, range: IndexRange, text: &str) -> Result<()> {
        self.replace_text(range.start, range.end, text)
    }

    /// Replaces the selection with `replacement`. Without a selection this
    /// inserts at the caret.
    ///
    /// Either way the selection is cleared and the caret ends up after the
    /// inserted text.
    fn replace_selection(&mut self, replacement: &str) -> Result<()> {
        let selection = self.selection();
        self.replace_range(selection, replacement)?;
        let at = selection.start + replacement.chars().count();
        self.select_range(at, at)
    }

    /// Moves the selected text so that it starts at `pos`.
    ///
    /// `pos` is an offset in the document as it is before the move. Dropping
    /// inside the selection, either end included, moves nothing and only
    /// collapses the caret to `pos`. Otherwise the selection is deleted and
    /// reinserted, and the caret collapses to the start of the moved text.
    fn move_selected_text(&mut self, pos: usize) -> Result<()> {
        let len = self.len();
        if pos > len {
            return Err(EditError::OutOfRange { offset: pos, len });
        }

        let selection = self.selection();
        if selection.contains_inclusive(pos) {
            return self.select_range(pos, pos);
        }

        let text = self.selected_text()?;
        // Deleting the selection first shifts everything after it left
        let target = if pos > selection.end {
            pos - selection.len()
        } else {
            pos
        };
        self.delete_range(selection)?;
        self.insert_text(target, &text)?;
        self.select_range(target, target)
    }

    /// Selects the whole document, caret at the end.
    fn select_all(&mut self) -> Result<()> {
        let len = self.len();
        self.select_range(0, len)
    }

    /// Collapses the selection onto the caret.
    fn deselect(&mut self) -> Result<()> {
        let caret = self.caret_position();
        self.select_range(caret, caret)
    }
}

impl<T: EditableText + ?Sized> EditActions for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextArea;

    fn area(text: &str) -> TextArea<()> {
        TextArea::from_text(text, ())
    }

    // ==================== Insert / Append ====================

    #[test]
    fn test_append_text() {
        let mut area = area("hello");
        area.append_text(" world").unwrap();
        assert_eq!(area.text(), "hello world");
    }

    #[test]
    fn test_append_to_empty() {
        let mut area: TextArea<()> = TextArea::default();
        area.append_text("a\nb").unwrap();
        assert_eq!(area.paragraph_count(), 2);
    }

    #[test]
    fn test_insert_text_keeps_caret_at_insertion_point() {
        let mut area = area("hello world");
        area.position_caret(5).unwrap();
        area.insert_text(5, ",").unwrap();
        assert_eq!(area.text(), "hello, world");
        assert_eq!(area.caret_position(), 5);
    }

    #[test]
    fn test_insert_text_out_of_range() {
        let mut area = area("abc");
        assert_eq!(
            area.insert_text(4, "x"),
            Err(EditError::InvalidRange { start: 4, end: 4, len: 3 })
        );
        assert_eq!(area.text(), "abc");
    }

    // ==================== Delete ====================

    #[test]
    fn test_delete_range_and_text() {
        let mut area = area("hello beautiful world");
        area.delete_range(IndexRange::new(6, 16)).unwrap();
        assert_eq!(area.text(), "hello world");
        area.delete_text(0, 6).unwrap();
        assert_eq!(area.text(), "world");
    }

    #[test]
    fn test_delete_inverted_range_rejected() {
        let mut area = area("hello");
        assert!(area.delete_range(IndexRange::new(3, 1)).is_err());
        assert_eq!(area.text(), "hello");
    }

    #[test]
    fn test_delete_previous_char_at_start_is_noop() {
        let mut area = area("hello");
        area.delete_previous_char().unwrap();
        assert_eq!(area.text(), "hello");
        assert_eq!(area.caret_position(), 0);
    }

    #[test]
    fn test_delete_previous_char_middle() {
        let mut area = area("hello");
        area.position_caret(3).unwrap();
        area.delete_previous_char().unwrap();
        assert_eq!(area.text(), "helo");
        // Caret sat on the end of the deleted range and shifts left
        assert_eq!(area.caret_position(), 2);
    }

    #[test]
    fn test_delete_previous_char_merges_paragraphs() {
        let mut area = area("hello\nworld");
        area.position_caret(6).unwrap();
        area.delete_previous_char().unwrap();
        assert_eq!(area.text(), "helloworld");
        assert_eq!(area.paragraph_count(), 1);
        assert_eq!(area.caret_position(), 5);
    }

    #[test]
    fn test_delete_next_char_at_end_is_noop() {
        let mut area = area("hello");
        area.position_caret(5).unwrap();
        area.delete_next_char().unwrap();
        assert_eq!(area.text(), "hello");
    }

    #[test]
    fn test_delete_next_char_merges_paragraphs() {
        let mut area = area("hello\nworld");
        area.position_caret(5).unwrap();
        area.delete_next_char().unwrap();
        assert_eq!(area.text(), "helloworld");
        assert_eq!(area.caret_position(), 5);
    }

    #[test]
    fn test_delete_previous_char_removes_one_code_point() {
        let mut area = area("a😀");
        area.position_caret(2).unwrap();
        area.delete_previous_char().unwrap();
        assert_eq!(area.text(), "a");
        assert_eq!(area.len(), 1);
    }

    #[test]
    fn test_delete_previous_grapheme_removes_cluster() {
        let mut area = area("ae\u{0301}");
        area.position_caret(3).unwrap();
        area.delete_previous_grapheme().unwrap();
        assert_eq!(area.text(), "a");
    }

    // ==================== Clear / Replace ====================

    #[test]
    fn test_clear() {
        let mut area = area("a\nb\nc");
        area.select_range(1, 4).unwrap();
        area.clear().unwrap();
        assert_eq!(area.text(), "");
        assert_eq!(area.paragraph_count(), 1);
        assert_eq!(area.caret_position(), 0);
        assert_eq!(area.anchor(), 0);
    }

    #[test]
    fn test_replace_all() {
        let mut area = area("old\ntext");
        area.replace_all("new").unwrap();
        assert_eq!(area.text(), "new");
        assert_eq!(area.paragraph_count(), 1);
    }

    #[test]
    fn test_replace_selection_clears_selection() {
        let mut area = area("hello world");
        area.select_range(6, 11).unwrap();
        area.replace_selection("there!").unwrap();
        assert_eq!(area.text(), "hello there!");
        assert!(!area.has_selection());
        assert_eq!(area.caret_position(), 12);
        assert_eq!(area.selected_text().unwrap(), "");
    }

    #[test]
    fn test_replace_backward_selection_clears_selection() {
        let mut area = area("hello world");
        area.select_range(11, 6).unwrap();
        area.replace_selection("you").unwrap();
        assert_eq!(area.text(), "hello you");
        assert_eq!(area.anchor(), 9);
        assert_eq!(area.caret_position(), 9);
    }

    #[test]
    fn test_replace_selection_without_selection_inserts_at_caret() {
        let mut area = area("helo");
        area.position_caret(2).unwrap();
        area.replace_selection("l").unwrap();
        assert_eq!(area.text(), "hello");
        assert!(!area.has_selection());
        assert_eq!(area.caret_position(), 3);
    }

    #[test]
    fn test_replace_selection_with_paragraphs() {
        let mut area = area("ab");
        area.select_range(1, 2).unwrap();
        area.replace_selection("x\ny").unwrap();
        assert_eq!(area.paragraph_count(), 2);
        assert_eq!(area.caret_location(), crate::Position::new(1, 1));
    }

    // ==================== Move Selection ====================

    #[test]
    fn test_move_selected_text_inside_selection_only_moves_caret() {
        let mut area = area("hello world");
        area.select_range(0, 5).unwrap();
        area.move_selected_text(3).unwrap();
        assert_eq!(area.text(), "hello world");
        assert_eq!(area.anchor(), 3);
        assert_eq!(area.caret_position(), 3);
    }

    #[test]
    fn test_move_selected_text_at_selection_end_counts_as_inside() {
        let mut area = area("hello world");
        area.select_range(0, 5).unwrap();
        area.move_selected_text(5).unwrap();
        assert_eq!(area.text(), "hello world");
        assert_eq!(area.caret_position(), 5);
    }

    #[test]
    fn test_move_selected_text_forward() {
        let mut area = area("hello world");
        area.select_range(0, 5).unwrap();
        area.move_selected_text(11).unwrap();
        assert_eq!(area.text(), " worldhello");
        assert_eq!(area.anchor(), 6);
        assert_eq!(area.caret_position(), 6);
    }

    #[test]
    fn test_move_selected_text_backward() {
        let mut area = area("hello world");
        area.select_range(6, 11).unwrap();
        area.move_selected_text(0).unwrap();
        assert_eq!(area.text(), "worldhello ");
        assert_eq!(area.caret_position(), 0);
    }

    #[test]
    fn test_move_selected_text_across_paragraphs() {
        let mut area = area("ab\ncd\nef");
        area.select_range(0, 3).unwrap(); // "ab\n"
        area.move_selected_text(8).unwrap();
        assert_eq!(area.text(), "cd\nefab\n");
        assert_eq!(area.paragraph_count(), 3);
    }

    #[test]
    fn test_move_selected_text_past_end_rejected_without_mutation() {
        let mut area = area("hello");
        area.select_range(0, 2).unwrap();
        assert_eq!(
            area.move_selected_text(9),
            Err(EditError::OutOfRange { offset: 9, len: 5 })
        );
        assert_eq!(area.text(), "hello");
        assert_eq!(area.selection(), IndexRange::new(0, 2));
    }

    // ==================== Select ====================

    #[test]
    fn test_select_all_and_deselect() {
        let mut area = area("hello\nworld");
        area.select_all().unwrap();
        assert_eq!(area.selected_text().unwrap(), "hello\nworld");
        assert_eq!(area.caret_position(), 11);

        area.deselect().unwrap();
        assert!(!area.has_selection());
        assert_eq!(area.anchor(), 11);
    }
}
