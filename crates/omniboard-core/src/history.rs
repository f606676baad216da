//! Ordered element log with undo/redo.

use crate::element::Element;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The committed drawing, as an append-only log plus a redo buffer.
///
/// History is the single source of truth: replaying `elements()` in order
/// against a fresh background-filled surface reproduces the exact visible
/// state. Undo moves the log tail to the front of the redo buffer; redo
/// moves it back. Any new commit invalidates the redo branch.
///
/// `clear` is itself undoable: the cleared log is stashed whole and the
/// next `undo` restores it as a single step. A subsequent commit discards
/// the stash.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    /// Committed elements in draw order.
    elements: Vec<Element>,
    /// Undone elements, most recently undone first.
    redo: VecDeque<Element>,
    /// Elements removed by the last `clear`, recoverable via `undo`.
    cleared: Option<Vec<Element>>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fully-formed element and invalidate the redo branch.
    ///
    /// Preview elements (sentinel id) are rejected silently; committing is
    /// only meaningful for finished gestures.
    pub fn commit(&mut self, element: Element) {
        if !element.is_committed() {
            log::debug!("ignoring commit of uncommitted preview element");
            return;
        }
        self.redo.clear();
        self.cleared = None;
        self.elements.push(element);
    }

    /// Move the most recent element to the redo buffer, or restore the
    /// last `clear` wholesale. No-op when there is nothing to undo.
    pub fn undo(&mut self) {
        if let Some(element) = self.elements.pop() {
            self.redo.push_front(element);
        } else if let Some(stash) = self.cleared.take() {
            self.elements = stash;
        }
    }

    /// Restore the most recently undone element. No-op when the redo
    /// buffer is empty.
    pub fn redo(&mut self) {
        if let Some(element) = self.redo.pop_front() {
            self.elements.push(element);
        }
    }

    /// Empty the log and the redo buffer. No-op when the log is empty.
    /// The cleared elements remain recoverable through a single `undo`.
    pub fn clear(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        self.redo.clear();
        self.cleared = Some(std::mem::take(&mut self.elements));
    }

    /// Committed elements in draw order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Whether `undo` would change anything.
    pub fn can_undo(&self) -> bool {
        !self.elements.is_empty() || self.cleared.is_some()
    }

    /// Whether `redo` would change anything.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of committed elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Serialize the history to JSON (diagnostic snapshots).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a history from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Rgba, Tool};
    use kurbo::Point;

    fn stroke(x: f64) -> Element {
        Element::freehand(
            Tool::Pencil,
            Rgba::black(),
            2.0,
            vec![Point::new(x, 0.0), Point::new(x, 10.0)],
        )
    }

    #[test]
    fn test_commit_monotonicity() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        assert_eq!(history.len(), 1);
        history.commit(stroke(1.0));
        assert_eq!(history.len(), 2);
        history.undo();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_redo_inverse() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.commit(stroke(1.0));
        let before = history.elements().to_vec();

        history.undo();
        history.redo();

        assert_eq!(history.elements(), before.as_slice());
    }

    #[test]
    fn test_redo_order_is_most_recent_first() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.commit(stroke(1.0));
        let ids: Vec<_> = history.elements().iter().map(|e| e.id).collect();

        history.undo();
        history.undo();
        history.redo();
        history.redo();

        let restored: Vec<_> = history.elements().iter().map(|e| e.id).collect();
        assert_eq!(restored, ids);
    }

    #[test]
    fn test_commit_invalidates_redo() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.undo();
        assert!(history.can_redo());

        history.commit(stroke(1.0));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_noop_safety() {
        let mut history = History::new();
        history.undo();
        history.redo();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());

        history.commit(stroke(0.0));
        let before = history.elements().to_vec();
        history.redo(); // empty redo buffer
        assert_eq!(history.elements(), before.as_slice());
    }

    #[test]
    fn test_preview_commit_rejected() {
        let mut history = History::new();
        history.commit(stroke(0.0).into_preview());
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear_is_undoable() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.commit(stroke(1.0));
        let before = history.elements().to_vec();

        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_redo());
        assert!(history.can_undo());

        history.undo();
        assert_eq!(history.elements(), before.as_slice());
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.undo();
        assert!(history.can_redo());

        // Empty log: clear must not touch the redo buffer.
        history.clear();
        assert!(history.can_redo());
    }

    #[test]
    fn test_commit_discards_clear_stash() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.clear();
        history.commit(stroke(1.0));

        // The stash is gone; undo only pops the new element.
        history.undo();
        assert!(history.is_empty());
        history.undo();
        assert!(history.is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut history = History::new();
        history.commit(stroke(0.0));
        history.undo();

        let json = history.to_json().unwrap();
        let back = History::from_json(&json).unwrap();
        assert_eq!(back.len(), 0);
        assert!(back.can_redo());
    }
}
