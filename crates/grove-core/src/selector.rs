//! Single-select cursor model for the switch workflow
//!
//! The same turn-based shape as the removal session, minus checkboxes: a
//! cursor over candidate worktrees, enter picks, cancel leaves empty-handed.

use crate::worktree::Worktree;

/// Semantic input events for the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    CursorUp,
    CursorDown,
    Pick,
    Cancel,
}

/// Result of applying one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorOutcome {
    Continue,
    /// Index of the chosen worktree.
    Picked(usize),
    Cancelled,
}

/// Cursor state over an ordered candidate list.
#[derive(Debug)]
pub struct Selector {
    pub items: Vec<Worktree>,
    pub cursor: usize,
}

impl Selector {
    pub fn new(items: Vec<Worktree>) -> Self {
        Self { items, cursor: 0 }
    }

    pub fn apply(&mut self, event: SelectorEvent) -> SelectorOutcome {
        match event {
            SelectorEvent::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
                SelectorOutcome::Continue
            }
            SelectorEvent::CursorDown => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
                SelectorOutcome::Continue
            }
            SelectorEvent::Pick => {
                if self.items.is_empty() {
                    SelectorOutcome::Cancelled
                } else {
                    SelectorOutcome::Picked(self.cursor)
                }
            }
            SelectorEvent::Cancel => SelectorOutcome::Cancelled,
        }
    }
}
