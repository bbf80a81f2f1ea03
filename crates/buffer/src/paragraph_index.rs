// Chunk: docs/chunks/paragraph_store - Paragraph store with offset-addressed replace

//! Paragraph start index for offset lookups.
//!
//! Maintains the document offset at which each paragraph starts, so that
//! mapping an offset to its paragraph is a binary search instead of a scan.
//! Each paragraph boundary occupies one offset (the implicit separator), so
//! `starts[p + 1] = starts[p] + len(p) + 1`.

/// Tracks paragraph start offsets.
#[derive(Debug, Clone)]
pub struct ParagraphIndex {
    /// Offsets where each paragraph starts. `starts[0] = 0` always.
    starts: Vec<usize>,
}

impl ParagraphIndex {
    /// Creates an index for a document with a single empty paragraph.
    pub fn new() -> Self {
        Self { starts: vec![0] }
    }

    /// Rebuilds the index from paragraph lengths, in document order.
    ///
    /// An empty iterator yields the single-empty-paragraph index.
    pub fn rebuild<I>(&mut self, lengths: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.starts.clear();
        self.starts.push(0);

        let mut next = 0;
        for len in lengths {
            next += len + 1;
            self.starts.push(next);
        }
        // The loop pushed one start past the last paragraph
        if self.starts.len() > 1 {
            self.starts.pop();
        }
    }

    /// Returns the number of paragraphs. Always at least 1.
    pub fn paragraph_count(&self) -> usize {
        self.starts.len()
    }

    /// Returns the offset where the given paragraph starts.
    pub fn paragraph_start(&self, paragraph: usize) -> Option<usize> {
        self.starts.get(paragraph).copied()
    }

    /// Returns the paragraph containing `offset`.
    ///
    /// An offset sitting on a separator belongs to the paragraph the separator
    /// terminates (it is that paragraph's end-of-text column). Offsets past the
    /// end resolve to the last paragraph; callers validate bounds first.
    pub fn paragraph_at_offset(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(paragraph) => paragraph,
            Err(paragraph) => paragraph.saturating_sub(1),
        }
    }

    /// Replaces `removed` paragraphs starting at `first` with paragraphs of
    /// the given lengths, shifting the starts of every following paragraph.
    ///
    /// `new_lengths` must be non-empty: an edit always leaves at least one
    /// paragraph in place of the ones it consumed.
    pub fn splice(&mut self, first: usize, removed: usize, new_lengths: &[usize]) {
        debug_assert!(!new_lengths.is_empty());
        debug_assert!(first + removed <= self.starts.len());

        let tail_from = first + removed;
        let old_next = self.starts.get(tail_from).copied();

        let mut next = self.starts[first];
        let mut new_starts = Vec::with_capacity(new_lengths.len());
        for len in new_lengths {
            new_starts.push(next);
            next += len + 1;
        }

        if let Some(old_next) = old_next {
            for start in &mut self.starts[tail_from..] {
                *start = *start - old_next + next;
            }
        }

        self.starts.splice(first..tail_from, new_starts);
    }

    #[cfg(any(debug_assertions, test))]
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}

impl Default for ParagraphIndex {
    fn default() -> Self {
        Self::new()
    }
}
