// Chunk: docs/chunks/code_point_stepping - Code point and grapheme cluster stepping

//! Offset arithmetic over paragraph text.
//!
//! Document offsets count Unicode scalar values (`char`), while Rust strings
//! are indexed by UTF-8 bytes. Everything that turns a column into a byte
//! index, or steps a column by "one character", goes through this module so
//! that a multi-byte code point is never split.
//!
//! Two stepping granularities are supported:
//!
//! - [`TextUnit::CodePoint`]: one Unicode scalar value. `é` written as
//!   `e` + U+0301 is two steps; `😀` is one step even though it is four bytes.
//! - [`TextUnit::Grapheme`]: one extended grapheme cluster, i.e. what a user
//!   perceives as a single character (`👨‍👩‍👧‍👦` is one step of seven chars).

use unicode_segmentation::UnicodeSegmentation;

/// Granularity for stepping a column left or right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextUnit {
    /// One Unicode scalar value.
    #[default]
    CodePoint,
    /// One extended grapheme cluster.
    Grapheme,
}

/// Returns the number of Unicode scalar values in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Converts a char column into a byte index into `text`.
///
/// Columns past the end map to `text.len()`.
pub fn char_to_byte(text: &str, col: usize) -> usize {
    // Pure ASCII: chars and bytes coincide
    if text.is_ascii() {
        return col.min(text.len());
    }
    text.char_indices()
        .nth(col)
        .map_or(text.len(), |(byte, _)| byte)
}

/// Returns the substring covering char columns `[start, end)`.
///
/// Both columns are clamped to the text; an inverted range yields `""`.
pub fn char_slice(text: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = char_to_byte(text, start);
    let to = char_to_byte(text, end);
    &text[from..to]
}

/// Returns the column one `unit` to the left of `col`.
///
/// Returns 0 when `col` is 0. A column inside a grapheme cluster steps to the
/// start of that cluster.
pub fn boundary_before(text: &str, col: usize, unit: TextUnit) -> usize {
    match unit {
        TextUnit::CodePoint => col.min(char_len(text)).saturating_sub(1),
        TextUnit::Grapheme => grapheme_boundary_left(text, col),
    }
}

/// Returns the column one `unit` to the right of `col`.
///
/// Returns the text's char length when `col` is already at or past the end.
pub fn boundary_after(text: &str, col: usize, unit: TextUnit) -> usize {
    let len = char_len(text);
    match unit {
        TextUnit::CodePoint => (col + 1).min(len),
        TextUnit::Grapheme => grapheme_boundary_right(text, col),
    }
}

/// Returns the char column of the grapheme cluster boundary immediately
/// before `col`.
pub fn grapheme_boundary_left(text: &str, col: usize) -> usize {
    if col == 0 || text.is_empty() {
        return 0;
    }

    // ASCII text has no multi-char clusters except "\r\n", which never occurs
    // inside a paragraph together with its separator.
    if text.is_ascii() {
        return col.min(text.len()) - 1;
    }

    let mut result = 0;
    let mut start = 0;
    for grapheme in text.graphemes(true) {
        if start >= col {
            break;
        }
        result = start;
        start += grapheme.chars().count();
    }
    result
}

/// Returns the char column of the grapheme cluster boundary immediately
/// after `col`.
pub fn grapheme_boundary_right(text: &str, col: usize) -> usize {
    if text.is_ascii() {
        return (col + 1).min(text.len());
    }

    let mut end = 0;
    for grapheme in text.graphemes(true) {
        end += grapheme.chars().count();
        if col < end {
            return end;
        }
    }
    end
}
