// Chunk: docs/chunks/change_events - Synchronous change notification

//! Change events emitted by a [`TextArea`](crate::TextArea).
//!
//! Every successful mutation emits one or more [`AreaEvent`]s to the
//! registered observers before the mutating call returns, in the order the
//! state changed. Failed calls emit nothing.

use crate::config::AreaConfig;
use crate::types::DirtyParagraphs;

/// Record of one applied `replace_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    /// Offset at which the replacement happened.
    pub position: usize,
    /// The text that was replaced.
    pub removed: String,
    /// The text put in its place.
    pub inserted: String,
    /// Paragraphs a renderer has to refresh.
    pub dirty: DirtyParagraphs,
    /// Caret after the edit.
    pub caret: usize,
    /// Anchor after the edit.
    pub anchor: usize,
    /// Paragraph count after the edit.
    pub paragraph_count: usize,
}

impl TextChange {
    /// Length, in offsets, of the removed text.
    pub fn removed_len(&self) -> usize {
        self.removed.chars().count()
    }

    /// Length, in offsets, of the inserted text.
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }
}

/// Events delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaEvent {
    /// Content changed. Paragraph structure changes are reported here too,
    /// through `dirty` and `paragraph_count`.
    Text(TextChange),

    /// Caret and/or anchor moved without a content change.
    Selection { anchor: usize, caret: usize },

    /// The paragraph holding the caret changed.
    CurrentParagraph { old: usize, new: usize },

    /// The `editable` or `wrap_text` flag changed.
    Config(AreaConfig),
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&AreaEvent)>;

/// Registry of observer callbacks, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&AreaEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn emit(&mut self, event: &AreaEvent) {
        for (_, observer) in &mut self.observers {
            observer(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.observers.len())
            .finish()
    }
}
