// Chunk: docs/chunks/paragraph_store - Paragraph store with offset-addressed replace

use std::cmp::Ordering;

/// Position in the document as (paragraph, column) where both are 0-indexed.
///
/// The column counts Unicode scalar values from the start of the paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub paragraph: usize,
    pub col: usize,
}

impl Position {
    pub fn new(paragraph: usize, col: usize) -> Self {
        Self { paragraph, col }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.paragraph.cmp(&other.paragraph) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// A half-open range of document offsets `[start, end)`.
///
/// Constructed ranges may be inverted (`start > end`); the editing primitive
/// rejects those with `EditError::InvalidRange` rather than silently swapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexRange {
    pub start: usize,
    pub end: usize,
}

impl IndexRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Builds a range from two endpoints given in either order.
    pub fn normalized(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Number of offsets covered. Zero for empty or inverted ranges.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `offset` lies within `[start, end]`, both ends inclusive.
    ///
    /// Used for "drop inside the selection" checks where either boundary counts.
    pub fn contains_inclusive(&self, offset: usize) -> bool {
        offset >= self.start && offset <= self.end
    }
}

impl From<(usize, usize)> for IndexRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self::new(start, end)
    }
}

/// Information about which paragraphs were dirtied by a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirtyParagraphs {
    /// No paragraph changed (e.g., a caret-only movement).
    #[default]
    None,
    /// A single paragraph changed in place.
    Single(usize),
    /// A range of paragraphs changed [from, to).
    Range { from: usize, to: usize },
    /// Everything from a paragraph to the end of the document changed.
    /// Used whenever paragraphs are split or merged, since every following
    /// paragraph index shifts.
    FromParagraphToEnd(usize),
}

impl DirtyParagraphs {
    /// Returns true if no paragraphs were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyParagraphs::None)
    }

    /// Returns the first dirty paragraph, if any.
    pub fn start_paragraph(&self) -> Option<usize> {
        match self {
            DirtyParagraphs::None => None,
            DirtyParagraphs::Single(p) => Some(*p),
            DirtyParagraphs::Range { from, .. } => Some(*from),
            DirtyParagraphs::FromParagraphToEnd(p) => Some(*p),
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    ///
    /// Hosts that batch several change events before redrawing fold each
    /// event's region into one accumulator with this.
    pub fn merge(&mut self, other: DirtyParagraphs) {
        use DirtyParagraphs::*;

        *self = match (*self, other) {
            (None, other) => other,
            (this, None) => this,

            (FromParagraphToEnd(a), other) | (other, FromParagraphToEnd(a)) => {
                match other.start_paragraph() {
                    Some(b) => FromParagraphToEnd(a.min(b)),
                    Option::None => FromParagraphToEnd(a),
                }
            }

            (Single(a), Single(b)) if a == b => Single(a),
            (Single(a), Single(b)) => Range {
                from: a.min(b),
                to: a.max(b) + 1,
            },

            (Single(a), Range { from, to }) | (Range { from, to }, Single(a)) => Range {
                from: from.min(a),
                to: to.max(a + 1),
            },

            (Range { from: a, to: b }, Range { from: c, to: d }) => Range {
                from: a.min(c),
                to: b.max(d),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Position ordering ====================

    #[test]
    fn position_orders_by_paragraph_then_column() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(1, 1).cmp(&Position::new(1, 1)), Ordering::Equal);
    }

    // ==================== IndexRange ====================

    #[test]
    fn normalized_swaps_endpoints() {
        assert_eq!(IndexRange::normalized(7, 2), IndexRange::new(2, 7));
        assert_eq!(IndexRange::normalized(2, 7), IndexRange::new(2, 7));
    }

    #[test]
    fn inverted_range_has_zero_len() {
        let r = IndexRange::new(5, 3);
        assert_eq!(r.len(), 0);
        assert!(r.is_empty());
    }

    #[test]
    fn contains_inclusive_counts_both_ends() {
        let r = IndexRange::new(2, 5);
        assert!(r.contains_inclusive(2));
        assert!(r.contains_inclusive(5));
        assert!(!r.contains_inclusive(1));
        assert!(!r.contains_inclusive(6));
    }

    // ==================== Merge: identity ====================

    #[test]
    fn merge_none_with_single() {
        let mut d = DirtyParagraphs::None;
        d.merge(DirtyParagraphs::Single(5));
        assert_eq!(d, DirtyParagraphs::Single(5));
    }

    #[test]
    fn merge_single_with_none() {
        let mut d = DirtyParagraphs::Single(5);
        d.merge(DirtyParagraphs::None);
        assert_eq!(d, DirtyParagraphs::Single(5));
    }

    // ==================== Merge: singles and ranges ====================

    #[test]
    fn merge_same_single() {
        let mut d = DirtyParagraphs::Single(3);
        d.merge(DirtyParagraphs::Single(3));
        assert_eq!(d, DirtyParagraphs::Single(3));
    }

    #[test]
    fn merge_distant_singles_reversed() {
        let mut d = DirtyParagraphs::Single(10);
        d.merge(DirtyParagraphs::Single(3));
        assert_eq!(d, DirtyParagraphs::Range { from: 3, to: 11 });
    }

    #[test]
    fn merge_single_extends_range() {
        let mut d = DirtyParagraphs::Range { from: 5, to: 10 };
        d.merge(DirtyParagraphs::Single(15));
        assert_eq!(d, DirtyParagraphs::Range { from: 5, to: 16 });
    }

    #[test]
    fn merge_disjoint_ranges() {
        let mut d = DirtyParagraphs::Range { from: 3, to: 5 };
        d.merge(DirtyParagraphs::Range { from: 8, to: 12 });
        assert_eq!(d, DirtyParagraphs::Range { from: 3, to: 12 });
    }

    // ==================== Merge: FromParagraphToEnd ====================

    #[test]
    fn merge_to_end_takes_earlier_start() {
        let mut d = DirtyParagraphs::FromParagraphToEnd(5);
        d.merge(DirtyParagraphs::FromParagraphToEnd(3));
        assert_eq!(d, DirtyParagraphs::FromParagraphToEnd(3));
    }

    #[test]
    fn merge_to_end_absorbs_earlier_single() {
        let mut d = DirtyParagraphs::Single(2);
        d.merge(DirtyParagraphs::FromParagraphToEnd(5));
        assert_eq!(d, DirtyParagraphs::FromParagraphToEnd(2));
    }

    #[test]
    fn merge_edit_then_split() {
        // Edit paragraph 3 in place, then split it
        let mut d = DirtyParagraphs::None;
        d.merge(DirtyParagraphs::Single(3));
        d.merge(DirtyParagraphs::FromParagraphToEnd(3));
        assert_eq!(d, DirtyParagraphs::FromParagraphToEnd(3));
    }
}
