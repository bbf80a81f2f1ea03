// Chunk: docs/chunks/edit_primitive - Core editing capability trait
// Chunk: docs/chunks/caret_selection - Anchor/caret offsets and edit remapping

//! TextArea is the concrete editing area.
//!
//! It owns a [`ParagraphStore`], a [`CaretSelection`], the host flags and the
//! observer registry, and implements [`EditableText`]. Its `replace_text` is
//! the edit primitive executor: validate, mutate the store, remap the caret
//! and anchor, then notify observers.

use crate::change::{AreaEvent, Observers, SubscriptionId, TextChange};
use crate::config::AreaConfig;
use crate::editable::EditableText;
use crate::error::{EditError, Result};
use crate::paragraph::Paragraph;
use crate::paragraph_store::ParagraphStore;
use crate::selection::CaretSelection;
use crate::text_unit::{char_len, TextUnit};
use crate::types::Position;

/// A paragraph-structured text buffer with caret, selection and change
/// notification.
///
/// All mutation goes through [`EditableText::replace_text`]; the derived
/// actions of [`EditActions`](crate::EditActions) are available on every
/// `TextArea` through the blanket implementation.
#[derive(Debug)]
pub struct TextArea<S> {
    store: ParagraphStore<S>,
    selection: CaretSelection,
    config: AreaConfig,
    observers: Observers,
}

impl<S> TextArea<S> {
    /// Creates an empty area: one empty paragraph with `style`, caret at 0.
    pub fn new(style: S) -> Self {
        Self {
            store: ParagraphStore::new(style),
            selection: CaretSelection::default(),
            config: AreaConfig::default(),
            observers: Observers::new(),
        }
    }

    /// Creates an area holding `text`, every paragraph styled with `style`.
    /// The caret starts at offset 0.
    pub fn from_text(text: &str, style: S) -> Self
    where
        S: Clone,
    {
        Self {
            store: ParagraphStore::from_text(text, style),
            selection: CaretSelection::default(),
            config: AreaConfig::default(),
            observers: Observers::new(),
        }
    }

    /// Replaces the host flags. Builder form of [`TextArea::set_config`].
    pub fn with_config(mut self, config: AreaConfig) -> Self {
        self.config = config;
        self
    }

    // ==================== Accessors ====================

    pub fn config(&self) -> AreaConfig {
        self.config
    }

    pub fn store(&self) -> &ParagraphStore<S> {
        &self.store
    }

    pub fn paragraph_count(&self) -> usize {
        self.store.paragraph_count()
    }

    pub fn has_selection(&self) -> bool {
        self.selection.has_selection()
    }

    /// The caret as a (paragraph, column) position.
    ///
    /// Every mutation clamps the caret to the document, so the lookup cannot
    /// fail; a failure is a broken invariant and trips in debug builds.
    pub fn caret_location(&self) -> Position {
        match self.store.offset_to_position(self.selection.caret()) {
            Ok(pos) => pos,
            Err(err) => {
                debug_assert!(false, "caret escaped the document: {}", err);
                tracing::error!("caret escaped the document: {}", err);
                Position::default()
            }
        }
    }

    pub fn offset_to_position(&self, offset: usize) -> Result<Position> {
        self.store.offset_to_position(offset)
    }

    pub fn position_to_offset(&self, pos: Position) -> Result<usize> {
        self.store.position_to_offset(pos)
    }

    // ==================== Observers ====================

    /// Registers an observer called synchronously after every change.
    pub fn subscribe(&mut self, observer: impl FnMut(&AreaEvent) + 'static) -> SubscriptionId {
        let id = self.observers.subscribe(observer);
        tracing::trace!("subscribed observer {:?} ({} total)", id, self.observers.len());
        id
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ==================== Config ====================

    /// Replaces the host flags, notifying observers if anything changed.
    pub fn set_config(&mut self, config: AreaConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        self.observers.emit(&AreaEvent::Config(config));
    }

    // ==================== Internal ====================

    fn check_offset(&self, offset: usize) -> Result<()> {
        if offset > self.store.len() {
            return Err(EditError::OutOfRange {
                offset,
                len: self.store.len(),
            });
        }
        Ok(())
    }

    fn paragraph_of_caret(&self) -> usize {
        self.caret_location().paragraph
    }

    /// Applies a caret/anchor change and emits the matching events.
    fn update_selection(&mut self, next: CaretSelection) {
        if self.selection == next {
            return;
        }
        let old_paragraph = self.paragraph_of_caret();
        self.selection = next;
        tracing::trace!(
            "selection now anchor={} caret={}",
            next.anchor(),
            next.caret()
        );

        self.observers.emit(&AreaEvent::Selection {
            anchor: next.anchor(),
            caret: next.caret(),
        });
        self.emit_current_paragraph(old_paragraph);
    }

    fn emit_current_paragraph(&mut self, old: usize) {
        let new = self.paragraph_of_caret();
        if old != new {
            self.observers
                .emit(&AreaEvent::CurrentParagraph { old, new });
        }
    }
}

impl<S: Clone> EditableText for TextArea<S> {
    type Style = S;

    fn len(&self) -> usize {
        self.store.len()
    }

    fn text(&self) -> String {
        self.store.text()
    }

    fn paragraph_text(&self, index: usize) -> Result<&str> {
        self.store.paragraph_text(index)
    }

    fn text_range(&self, start: usize, end: usize) -> Result<String> {
        self.store.text_range(start, end)
    }

    fn paragraphs(&self) -> &[Paragraph<S>] {
        self.store.paragraphs()
    }

    fn caret_position(&self) -> usize {
        self.selection.caret()
    }

    fn anchor(&self) -> usize {
        self.selection.anchor()
    }

    fn current_paragraph(&self) -> usize {
        self.caret_location().paragraph
    }

    fn caret_column(&self) -> usize {
        self.caret_location().col
    }

    fn select_range(&mut self, anchor: usize, caret: usize) -> Result<()> {
        self.check_offset(anchor)?;
        self.check_offset(caret)?;
        self.update_selection(CaretSelection::new(anchor, caret));
        Ok(())
    }

    fn position_caret(&mut self, pos: usize) -> Result<()> {
        self.check_offset(pos)?;
        let mut next = self.selection;
        next.set_caret(pos);
        self.update_selection(next);
        Ok(())
    }

    fn boundary_before(&self, offset: usize, unit: TextUnit) -> Result<usize> {
        self.store.boundary_before(offset, unit)
    }

    fn boundary_after(&self, offset: usize, unit: TextUnit) -> Result<usize> {
        self.store.boundary_after(offset, unit)
    }

    fn is_editable(&self) -> bool {
        self.config.editable
    }

    fn set_editable(&mut self, editable: bool) {
        self.set_config(AreaConfig {
            editable,
            ..self.config
        });
    }

    fn is_wrap_text(&self) -> bool {
        self.config.wrap_text
    }

    fn set_wrap_text(&mut self, wrap_text: bool) {
        self.set_config(AreaConfig {
            wrap_text,
            ..self.config
        });
    }

    fn replace_text(&mut self, start: usize, end: usize, text: &str) -> Result<()> {
        let old_paragraph = self.paragraph_of_caret();

        let change = self
            .store
            .replace_range(start, end, text)
            .map_err(|err| {
                tracing::debug!("rejected replace_text: {}", err);
                err
            })?;

        let inserted_len = char_len(text);
        self.selection
            .remap(start, end, inserted_len, self.store.len());

        tracing::debug!(
            "replaced [{}, {}) with {} chars; len={} paragraphs={} caret={}",
            start,
            end,
            inserted_len,
            self.store.len(),
            self.store.paragraph_count(),
            self.selection.caret()
        );

        let dirty = change.dirty();
        self.observers.emit(&AreaEvent::Text(TextChange {
            position: start,
            removed: change.removed_text,
            inserted: text.to_string(),
            dirty,
            caret: self.selection.caret(),
            anchor: self.selection.anchor(),
            paragraph_count: self.store.paragraph_count(),
        }));
        self.emit_current_paragraph(old_paragraph);
        Ok(())
    }
}

impl<S: Default> Default for TextArea<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}
