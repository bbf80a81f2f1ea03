// Chunk: docs/chunks/paragraph_store - Paragraph store with offset-addressed replace

//! ParagraphStore owns the document content.
//!
//! It combines the ordered paragraph list with a [`ParagraphIndex`] of start
//! offsets, converts between global offsets and (paragraph, column)
//! positions, and implements the one content mutation: replacing an offset
//! range with new text.
//!
//! Offsets address the concatenation of all paragraph texts where each
//! paragraph boundary contributes exactly one separator offset.

use crate::error::{EditError, Result};
use crate::paragraph::{Paragraph, PARAGRAPH_SEPARATOR};
use crate::paragraph_index::ParagraphIndex;
use crate::text_unit::{self, char_len, char_slice, TextUnit};
use crate::types::{DirtyParagraphs, Position};

/// Structural summary of one applied `replace_range`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    /// Index of the first paragraph touched by the edit.
    pub first_paragraph: usize,
    /// How many paragraphs the edit consumed.
    pub removed_paragraphs: usize,
    /// How many paragraphs replaced them.
    pub inserted_paragraphs: usize,
    /// The text that was replaced, separators included.
    pub removed_text: String,
}

impl StoreChange {
    /// Paragraphs a renderer has to refresh after this change.
    ///
    /// A split or merge shifts every following paragraph index, so it dirties
    /// everything to the end. Otherwise only the replaced paragraphs changed.
    pub fn dirty(&self) -> DirtyParagraphs {
        if self.is_structural() {
            DirtyParagraphs::FromParagraphToEnd(self.first_paragraph)
        } else if self.inserted_paragraphs == 1 {
            DirtyParagraphs::Single(self.first_paragraph)
        } else {
            DirtyParagraphs::Range {
                from: self.first_paragraph,
                to: self.first_paragraph + self.inserted_paragraphs,
            }
        }
    }

    /// Returns true if paragraphs were split or merged.
    pub fn is_structural(&self) -> bool {
        self.removed_paragraphs != self.inserted_paragraphs
    }
}

/// Ordered, never-empty sequence of styled paragraphs.
#[derive(Debug, Clone)]
pub struct ParagraphStore<S> {
    paragraphs: Vec<Paragraph<S>>,
    index: ParagraphIndex,
    /// Total length in offsets, separators included.
    len: usize,
    /// Mutation counter for sampling debug assertions (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl<S> ParagraphStore<S> {
    /// Creates a store holding one empty paragraph with the given style.
    pub fn new(style: S) -> Self {
        Self {
            paragraphs: vec![Paragraph::empty(style)],
            index: ParagraphIndex::new(),
            len: 0,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    /// Creates a store from flat text, one paragraph per separator-delimited
    /// run, every paragraph carrying `style`.
    pub fn from_text(text: &str, style: S) -> Self
    where
        S: Clone,
    {
        let paragraphs: Vec<Paragraph<S>> = text
            .split(PARAGRAPH_SEPARATOR)
            .map(|segment| Paragraph::new(segment, style.clone()))
            .collect();
        let mut index = ParagraphIndex::new();
        index.rebuild(paragraphs.iter().map(Paragraph::len));

        Self {
            paragraphs,
            index,
            len: char_len(text),
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    // ==================== Accessors ====================

    /// Returns the total length in offsets, one per separator included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of paragraphs. Always at least 1.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Read-only view of the paragraphs in document order.
    pub fn paragraphs(&self) -> &[Paragraph<S>] {
        &self.paragraphs
    }

    pub fn paragraph(&self, index: usize) -> Result<&Paragraph<S>> {
        self.paragraphs
            .get(index)
            .ok_or(EditError::ParagraphOutOfRange {
                index,
                count: self.paragraphs.len(),
            })
    }

    /// Returns the text of one paragraph, without separator.
    pub fn paragraph_text(&self, index: usize) -> Result<&str> {
        self.paragraph(index).map(Paragraph::text)
    }

    /// Returns the offset at which the given paragraph starts.
    pub fn paragraph_start(&self, index: usize) -> Result<usize> {
        self.index
            .paragraph_start(index)
            .ok_or(EditError::ParagraphOutOfRange {
                index,
                count: self.paragraphs.len(),
            })
    }

    /// Returns the whole document text, paragraphs joined by separators.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.len);
        for (i, paragraph) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push(PARAGRAPH_SEPARATOR);
            }
            out.push_str(paragraph.text());
        }
        out
    }

    /// Returns the text over `[start, end)`, separators included.
    pub fn text_range(&self, start: usize, end: usize) -> Result<String> {
        self.check_range(start, end)?;
        let from = self.offset_to_position(start)?;
        let to = self.offset_to_position(end)?;

        if from.paragraph == to.paragraph {
            let text = self.paragraphs[from.paragraph].text();
            return Ok(char_slice(text, from.col, to.col).to_string());
        }

        let mut out = String::with_capacity(end - start);
        out.push_str(self.paragraphs[from.paragraph].text_from(from.col));
        for paragraph in &self.paragraphs[from.paragraph + 1..to.paragraph] {
            out.push(PARAGRAPH_SEPARATOR);
            out.push_str(paragraph.text());
        }
        out.push(PARAGRAPH_SEPARATOR);
        out.push_str(self.paragraphs[to.paragraph].text_before(to.col));
        Ok(out)
    }

    // ==================== Coordinates ====================

    /// Maps a global offset to its (paragraph, column) position.
    ///
    /// An offset sitting on a separator maps to the end column of the
    /// paragraph that separator terminates.
    pub fn offset_to_position(&self, offset: usize) -> Result<Position> {
        self.check_offset(offset)?;
        let paragraph = self.index.paragraph_at_offset(offset);
        let start = self.index.paragraph_start(paragraph).unwrap_or(0);
        Ok(Position::new(paragraph, offset - start))
    }

    /// Maps a (paragraph, column) position back to a global offset.
    pub fn position_to_offset(&self, pos: Position) -> Result<usize> {
        let paragraph = self.paragraph(pos.paragraph)?;
        let start = self.paragraph_start(pos.paragraph)?;
        if pos.col > paragraph.len() {
            return Err(EditError::OutOfRange {
                offset: start + pos.col,
                len: self.len,
            });
        }
        Ok(start + pos.col)
    }

    /// Returns the offset one `unit` before `offset`.
    ///
    /// Stepping back from the start of a paragraph crosses exactly the one
    /// separator offset. Returns 0 at the start of the document.
    pub fn boundary_before(&self, offset: usize, unit: TextUnit) -> Result<usize> {
        let pos = self.offset_to_position(offset)?;
        if pos.col == 0 {
            return Ok(offset.saturating_sub(1));
        }
        let text = self.paragraphs[pos.paragraph].text();
        let col = text_unit::boundary_before(text, pos.col, unit);
        Ok(offset - (pos.col - col))
    }

    /// Returns the offset one `unit` after `offset`.
    ///
    /// Stepping forward from the end of a paragraph crosses exactly the one
    /// separator offset. Returns `len()` at the end of the document.
    pub fn boundary_after(&self, offset: usize, unit: TextUnit) -> Result<usize> {
        let pos = self.offset_to_position(offset)?;
        let paragraph = &self.paragraphs[pos.paragraph];
        if pos.col >= paragraph.len() {
            return Ok((offset + 1).min(self.len));
        }
        let col = text_unit::boundary_after(paragraph.text(), pos.col, unit);
        Ok(offset + (col - pos.col))
    }

    // ==================== Validation ====================

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.len {
            return Err(EditError::OutOfRange {
                offset,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Checks `start <= end <= len()`.
    pub fn check_range(&self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.len {
            return Err(EditError::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Debug assertion: verifies the incrementally spliced index and cached
    /// length match a fresh rebuild from the paragraphs.
    ///
    /// Checks every 64th mutation so tight edit loops stay fast.
    #[cfg(debug_assertions)]
    fn assert_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = ParagraphIndex::new();
        expected.rebuild(self.paragraphs.iter().map(Paragraph::len));
        assert_eq!(
            self.index.starts(),
            expected.starts(),
            "paragraph index drift detected after {} mutations",
            self.debug_mutation_count
        );
        let expected_len = self.paragraphs.iter().map(Paragraph::len).sum::<usize>()
            + self.paragraphs.len()
            - 1;
        assert_eq!(self.len, expected_len, "cached length drift detected");
    }

    #[cfg(not(debug_assertions))]
    fn assert_index_consistent(&mut self) {}

    // ==================== Mutation ====================

    /// Replaces `[start, end)` with `text`.
    ///
    /// Fails with `InvalidRange` and leaves the store untouched unless
    /// `start <= end <= len()`. Each separator in `text` starts a new
    /// paragraph; separators inside the replaced range disappear and merge
    /// their neighbours.
    ///
    /// The first resulting paragraph keeps the style of the paragraph holding
    /// `start`; any further ones take the style of the paragraph holding `end`.
    pub fn replace_range(&mut self, start: usize, end: usize, text: &str) -> Result<StoreChange>
    where
        S: Clone,
    {
        self.check_range(start, end)?;
        let from = self.offset_to_position(start)?;
        let to = self.offset_to_position(end)?;
        let removed_text = self.text_range(start, end)?;

        let head = &self.paragraphs[from.paragraph];
        let tail = &self.paragraphs[to.paragraph];
        let head_style = head.style().clone();
        let tail_style = tail.style().clone();

        let mut combined = String::with_capacity(head.text().len() + text.len() + tail.text().len());
        combined.push_str(head.text_before(from.col));
        combined.push_str(text);
        combined.push_str(tail.text_from(to.col));

        let replacement: Vec<Paragraph<S>> = combined
            .split(PARAGRAPH_SEPARATOR)
            .enumerate()
            .map(|(i, segment)| {
                let style = if i == 0 {
                    head_style.clone()
                } else {
                    tail_style.clone()
                };
                Paragraph::new(segment, style)
            })
            .collect();
        let lengths: Vec<usize> = replacement.iter().map(Paragraph::len).collect();

        let removed_paragraphs = to.paragraph - from.paragraph + 1;
        let inserted_paragraphs = replacement.len();

        self.paragraphs
            .splice(from.paragraph..=to.paragraph, replacement);
        self.index
            .splice(from.paragraph, removed_paragraphs, &lengths);
        self.len = self.len - (end - start) + char_len(text);

        self.assert_index_consistent();
        Ok(StoreChange {
            first_paragraph: from.paragraph,
            removed_paragraphs,
            inserted_paragraphs,
            removed_text,
        })
    }
}

impl<S: Default> Default for ParagraphStore<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
