// Chunk: docs/chunks/paragraph_store - Paragraph store with offset-addressed replace

use crate::text_unit::{char_len, char_slice};

/// The character that separates paragraphs in the document's flat text.
pub const PARAGRAPH_SEPARATOR: char = '\n';

/// A run of text between two separators, carrying one style value.
///
/// Paragraphs are immutable: an edit builds new paragraphs and swaps them in.
/// The text never contains [`PARAGRAPH_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph<S> {
    text: String,
    /// Length in Unicode scalar values, cached so offset math never rescans.
    len: usize,
    style: S,
}

impl<S> Paragraph<S> {
    /// Creates a paragraph from text that contains no separator.
    ///
    /// Callers inside the crate split on separators before constructing.
    pub(crate) fn new(text: impl Into<String>, style: S) -> Self {
        let text = text.into();
        debug_assert!(
            !text.contains(PARAGRAPH_SEPARATOR),
            "paragraph text must not contain a separator: {:?}",
            text
        );
        let len = char_len(&text);
        Self { text, len, style }
    }

    /// Creates an empty paragraph with the given style.
    pub fn empty(style: S) -> Self {
        Self {
            text: String::new(),
            len: 0,
            style,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in Unicode scalar values (not bytes).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn style(&self) -> &S {
        &self.style
    }

    /// Returns the text before char column `col`.
    pub fn text_before(&self, col: usize) -> &str {
        char_slice(&self.text, 0, col)
    }

    /// Returns the text from char column `col` to the end.
    pub fn text_from(&self, col: usize) -> &str {
        char_slice(&self.text, col, self.len)
    }
}
