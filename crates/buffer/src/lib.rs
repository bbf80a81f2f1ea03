// Chunk: docs/chunks/paragraph_store - Paragraph store with offset-addressed replace
// Chunk: docs/chunks/edit_actions - Derived editing actions

//! codearea-buffer: a paragraph-structured text buffer with an
//! offset-addressed editing contract.
//!
//! # Overview
//!
//! A document is an ordered, never-empty list of styled [`Paragraph`]s.
//! Positions are addressed by a single global offset counting Unicode scalar
//! values, where every paragraph boundary occupies one offset (the implicit
//! `'\n'` separator).
//!
//! The main type is [`TextArea`], which provides:
//! - A single content mutation, [`EditableText::replace_text`]
//! - Anchor/caret selection tracking, remapped atomically with every edit
//! - Derived actions (insert, delete, clear, replace selection, move
//!   selection) through the [`EditActions`] extension trait
//! - Synchronous change notification through [`AreaEvent`]s
//!
//! # Example
//!
//! ```
//! use codearea_buffer::{EditActions, EditableText, TextArea};
//!
//! let mut area = TextArea::from_text("hello world", ());
//!
//! area.replace_text(5, 5, " there").unwrap();
//! assert_eq!(area.text(), "hello there world");
//!
//! // Split into two paragraphs
//! area.insert_text(11, "\n").unwrap();
//! assert_eq!(area.paragraph_count(), 2);
//! assert_eq!(area.paragraph_text(1).unwrap(), " world");
//!
//! // Backspace at offset 0 does nothing
//! area.delete_previous_char().unwrap();
//! assert_eq!(area.len(), 18);
//! ```
//!
//! # Errors
//!
//! Every operation validates before mutating. A failed call returns an
//! [`EditError`] and leaves content, caret, anchor and observers untouched.

mod change;
mod config;
mod edit_actions;
mod editable;
mod error;
mod paragraph;
mod paragraph_index;
mod paragraph_store;
mod selection;
mod text_area;
mod text_unit;
mod types;

pub use change::{AreaEvent, Observers, SubscriptionId, TextChange};
pub use config::AreaConfig;
pub use edit_actions::EditActions;
pub use editable::EditableText;
pub use error::{ConfigError, EditError, Result};
pub use paragraph::{Paragraph, PARAGRAPH_SEPARATOR};
pub use paragraph_store::{ParagraphStore, StoreChange};
pub use selection::{remap_offset, CaretSelection};
pub use text_area::TextArea;
pub use text_unit::{
    boundary_after, boundary_before, char_slice, char_to_byte, grapheme_boundary_left,
    grapheme_boundary_right, TextUnit,
};
pub use types::{DirtyParagraphs, IndexRange, Position};
