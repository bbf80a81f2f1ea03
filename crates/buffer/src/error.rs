// Chunk: docs/chunks/error_taxonomy - InvalidRange / OutOfRange errors

//! Error types for buffer operations.
//!
//! Every error here is a contract violation by the caller. Validation happens
//! before any mutation, so an `Err` always means the buffer is unchanged.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditError>;

/// Errors raised by the editing primitive and the offset lookups.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EditError {
    /// `start > end`, or `end` is past the end of the document.
    #[error("invalid range [{start}, {end}) for document of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// A single offset (caret, anchor, coordinate lookup) is past the end of
    /// the document, or a column is past the end of its paragraph.
    #[error("offset {offset} out of range [0, {len}]")]
    OutOfRange { offset: usize, len: usize },

    /// A paragraph index past the last paragraph.
    #[error("paragraph {index} out of range (document has {count} paragraphs)")]
    ParagraphOutOfRange { index: usize, count: usize },
}

/// Errors raised while loading an [`AreaConfig`](crate::AreaConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed area config: {0}")]
    Parse(#[from] serde_json::Error),
}
