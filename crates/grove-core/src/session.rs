//! Interactive multi-select session for worktree removal
//!
//! The session is a turn-based state machine with three modes: List (browse
//! and select), Confirm (double-check the destructive step, defaulting to
//! No), and Done (display the report, then exit on any input). Rendering and
//! key decoding live in the binary crate; this model only applies semantic
//! events, so every transition is unit-testable without a terminal.
//!
//! Removal goes through the [`RemoveWorktrees`] seam. The real implementation
//! shells out to git; tests substitute a recording fake.

use std::path::{Path, PathBuf};

use crate::error::GroveError;
use crate::worktree::{self, Worktree};

/// Removal operations the session needs from the repository.
pub trait RemoveWorktrees {
    fn remove(&mut self, wt_path: &Path, delete_branch: bool) -> Result<(), GroveError>;
    fn prune(&mut self) -> Result<(), GroveError>;
}

/// Removal backed by the git binary.
pub struct GitRemover {
    pub repo_dir: PathBuf,
}

impl RemoveWorktrees for GitRemover {
    fn remove(&mut self, wt_path: &Path, delete_branch: bool) -> Result<(), GroveError> {
        worktree::remove_worktree(&self.repo_dir, wt_path, delete_branch)
    }

    fn prune(&mut self) -> Result<(), GroveError> {
        worktree::prune_worktrees(&self.repo_dir)
    }
}

/// Session mode. Done is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Confirm,
    Done,
}

/// Semantic input events, decoded from keys by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    CursorUp,
    CursorDown,
    /// Flip the checkbox under the cursor.
    Toggle,
    /// Check every non-current merged item.
    SelectMerged,
    /// Uncheck everything.
    DeselectAll,
    /// Move to Confirm when anything is checked.
    RequestRemoval,
    /// Flip the confirm choice between No and Yes.
    ToggleConfirm,
    /// Force Yes and execute immediately.
    Yes,
    /// Decline and return to the list.
    No,
    /// Act on the current confirm choice.
    Submit,
    Cancel,
}

/// What the event loop should do after an event has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// A worktree with its selection checkbox.
#[derive(Debug, Clone)]
pub struct Item {
    pub worktree: Worktree,
    pub checked: bool,
}

/// State of one interactive removal session.
#[derive(Debug)]
pub struct Session {
    pub items: Vec<Item>,
    pub cursor: usize,
    pub mode: Mode,
    /// Confirm choice; false = No, the safe default.
    pub confirm_yes: bool,
    /// Branch names removed, in selection iteration order.
    pub removed: Vec<String>,
    /// Per-item failures as `"<name>: <cause>"`.
    pub errors: Vec<String>,
}

impl Session {
    pub fn new(worktrees: Vec<Worktree>) -> Self {
        Self {
            items: worktrees
                .into_iter()
                .map(|worktree| Item {
                    worktree,
                    checked: false,
                })
                .collect(),
            cursor: 0,
            mode: Mode::List,
            confirm_yes: false,
            removed: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|it| it.checked).count()
    }

    /// Apply one event, possibly executing the removal batch.
    pub fn apply(&mut self, event: Event, remover: &mut dyn RemoveWorktrees) -> Signal {
        match self.mode {
            Mode::List => self.apply_list(event),
            Mode::Confirm => self.apply_confirm(event, remover),
            // Done is a dead end; any input terminates.
            Mode::Done => Signal::Quit,
        }
    }

    fn apply_list(&mut self, event: Event) -> Signal {
        match event {
            Event::Cancel => return Signal::Quit,
            Event::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            Event::CursorDown => {
                if self.cursor + 1 < self.items.len() {
                    self.cursor += 1;
                }
            }
            Event::Toggle => {
                // The active working copy can never be scheduled for removal.
                if let Some(item) = self.items.get_mut(self.cursor) {
                    if !item.worktree.is_current {
                        item.checked = !item.checked;
                    }
                }
            }
            Event::SelectMerged => {
                for item in &mut self.items {
                    if !item.worktree.is_current && item.worktree.is_merged {
                        item.checked = true;
                    }
                }
            }
            Event::DeselectAll => {
                for item in &mut self.items {
                    item.checked = false;
                }
            }
            Event::RequestRemoval => {
                if self.checked_count() > 0 {
                    self.mode = Mode::Confirm;
                    self.confirm_yes = false;
                }
            }
            _ => {}
        }
        Signal::Continue
    }

    fn apply_confirm(&mut self, event: Event, remover: &mut dyn RemoveWorktrees) -> Signal {
        match event {
            Event::ToggleConfirm => {
                self.confirm_yes = !self.confirm_yes;
            }
            Event::Yes => {
                self.confirm_yes = true;
                self.execute(remover);
            }
            Event::No | Event::Cancel => {
                // Selections survive a declined confirmation.
                self.mode = Mode::List;
            }
            Event::Submit => {
                if self.confirm_yes {
                    self.execute(remover);
                } else {
                    self.mode = Mode::List;
                }
            }
            _ => {}
        }
        Signal::Continue
    }

    /// Remove every checked item, then best-effort prune.
    ///
    /// Each removal is attempted independently; one failure never blocks the
    /// rest. Branch deletion rides on the merge status captured at
    /// enrichment time.
    fn execute(&mut self, remover: &mut dyn RemoveWorktrees) {
        for item in &self.items {
            if !item.checked {
                continue;
            }
            let branch = item.worktree.display_name();
            let delete_branch = item.worktree.is_merged;
            match remover.remove(&item.worktree.path, delete_branch) {
                Ok(()) => self.removed.push(branch),
                Err(e) => self.errors.push(format!("{branch}: {e}")),
            }
        }
        // Housekeeping only; its failure is not the user's problem.
        let _ = remover.prune();
        self.mode = Mode::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeRemover {
        calls: Vec<(PathBuf, bool)>,
        fail_paths: Vec<PathBuf>,
        pruned: usize,
    }

    impl RemoveWorktrees for FakeRemover {
        fn remove(&mut self, wt_path: &Path, delete_branch: bool) -> Result<(), GroveError> {
            self.calls.push((wt_path.to_path_buf(), delete_branch));
            if self.fail_paths.iter().any(|p| p == wt_path) {
                return Err(GroveError::GitCommand {
                    command: "worktree remove".to_string(),
                    message: "locked".to_string(),
                });
            }
            Ok(())
        }

        fn prune(&mut self) -> Result<(), GroveError> {
            self.pruned += 1;
            Ok(())
        }
    }

    fn worktree(branch: &str, current: bool, merged: bool) -> Worktree {
        Worktree {
            path: PathBuf::from(format!("/wt/{branch}")),
            branch: format!("refs/heads/{branch}"),
            is_current: current,
            is_merged: merged,
            ..Worktree::default()
        }
    }

    fn session() -> Session {
        Session::new(vec![
            worktree("main", true, false),
            worktree("feature-auth", false, true),
            worktree("feature-api", false, false),
        ])
    }

    #[test]
    fn test_cursor_clamped_at_boundaries() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::CursorUp, &mut r);
        assert_eq!(s.cursor, 0);

        for _ in 0..10 {
            s.apply(Event::CursorDown, &mut r);
        }
        assert_eq!(s.cursor, 2);
    }

    #[test]
    fn test_toggle_current_is_noop() {
        let mut s = session();
        let mut r = FakeRemover::default();

        for _ in 0..3 {
            s.apply(Event::Toggle, &mut r);
        }
        assert!(!s.items[0].checked);
    }

    #[test]
    fn test_toggle_flips_non_current() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        assert!(s.items[1].checked);
        s.apply(Event::Toggle, &mut r);
        assert!(!s.items[1].checked);
    }

    #[test]
    fn test_select_merged_skips_current_and_unmerged() {
        let mut s = Session::new(vec![
            worktree("main", true, true),
            worktree("feature-auth", false, true),
            worktree("feature-api", false, false),
        ]);
        let mut r = FakeRemover::default();

        s.apply(Event::SelectMerged, &mut r);
        assert!(!s.items[0].checked);
        assert!(s.items[1].checked);
        assert!(!s.items[2].checked);
    }

    #[test]
    fn test_select_merged_then_deselect_all_clears_everything() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        s.apply(Event::SelectMerged, &mut r);
        s.apply(Event::DeselectAll, &mut r);
        assert_eq!(s.checked_count(), 0);
    }

    #[test]
    fn test_request_removal_without_selection_stays_in_list() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::RequestRemoval, &mut r);
        assert_eq!(s.mode, Mode::List);
    }

    #[test]
    fn test_request_removal_resets_confirm_to_no() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::SelectMerged, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        assert_eq!(s.mode, Mode::Confirm);
        assert!(!s.confirm_yes);

        // Decline, re-request: choice is reset even after a toggle.
        s.apply(Event::ToggleConfirm, &mut r);
        s.apply(Event::No, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        assert!(!s.confirm_yes);
    }

    #[test]
    fn test_submit_on_no_returns_to_list_without_removal() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::SelectMerged, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        s.apply(Event::Submit, &mut r);
        assert_eq!(s.mode, Mode::List);
        assert!(r.calls.is_empty());
        // Selection is kept.
        assert_eq!(s.checked_count(), 1);
    }

    #[test]
    fn test_yes_executes_once_per_checked_item_in_order() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        s.apply(Event::Yes, &mut r);

        assert_eq!(s.mode, Mode::Done);
        assert_eq!(
            r.calls,
            vec![
                (PathBuf::from("/wt/feature-auth"), true),
                (PathBuf::from("/wt/feature-api"), false),
            ]
        );
        assert_eq!(s.removed, vec!["feature-auth", "feature-api"]);
        assert_eq!(r.pruned, 1);
    }

    #[test]
    fn test_partial_failure_still_reaches_done() {
        let mut s = session();
        let mut r = FakeRemover {
            fail_paths: vec![PathBuf::from("/wt/feature-api")],
            ..FakeRemover::default()
        };

        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        s.apply(Event::CursorDown, &mut r);
        s.apply(Event::Toggle, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        s.apply(Event::ToggleConfirm, &mut r);
        s.apply(Event::Submit, &mut r);

        assert_eq!(s.mode, Mode::Done);
        assert_eq!(s.removed, vec!["feature-auth"]);
        assert_eq!(s.errors.len(), 1);
        assert!(s.errors[0].starts_with("feature-api: "));
        // Both were attempted despite the failure.
        assert_eq!(r.calls.len(), 2);
        assert_eq!(r.pruned, 1);
    }

    #[test]
    fn test_cancel_from_list_quits_without_mutation() {
        let mut s = session();
        let mut r = FakeRemover::default();

        assert_eq!(s.apply(Event::Cancel, &mut r), Signal::Quit);
        assert!(r.calls.is_empty());
        assert!(s.removed.is_empty());
    }

    #[test]
    fn test_done_terminates_on_any_input() {
        let mut s = session();
        let mut r = FakeRemover::default();

        s.apply(Event::SelectMerged, &mut r);
        s.apply(Event::RequestRemoval, &mut r);
        s.apply(Event::Yes, &mut r);
        assert_eq!(s.mode, Mode::Done);

        for event in [Event::CursorDown, Event::Toggle, Event::Submit] {
            assert_eq!(s.apply(event, &mut r), Signal::Quit);
        }
    }
}
