//! Worktree listing, enrichment, and classification
//!
//! A [`Worktree`] starts as the raw facts parsed from
//! `git worktree list --porcelain` and is enriched in place with file-status
//! counts, ahead/behind counts, merge membership, and last-activity time.
//! Classification helpers (`status_text`, `sync_text`, `tags`) are pure
//! functions over the enriched record.

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};

use crate::error::GroveError;
use crate::git;

/// Inactivity threshold for the `"<n>d stale"` display tag.
///
/// This is a fixed rendering default. The configurable `cleanup.stale_days`
/// threshold is a separate knob and must stay separate.
pub const STALE_DISPLAY_DAYS: u64 = 30;

/// One checked-out working copy of the repository.
#[derive(Debug, Clone, Default)]
pub struct Worktree {
    pub path: PathBuf,
    pub head: String,
    /// Fully-qualified branch ref, empty when detached or bare.
    pub branch: String,
    pub is_bare: bool,
    pub is_detached: bool,
    pub is_current: bool,

    // Status info, populated by enrich()
    pub modified: u64,
    pub untracked: u64,
    pub ahead: u64,
    pub behind: u64,
    pub is_merged: bool,
    pub last_commit: Option<DateTime<Utc>>,
}

/// Display tag attached to a worktree, in fixed assembly order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Current,
    Dirty(String),
    Merged,
    Sync(String),
    Stale(u64),
}

impl Worktree {
    pub fn is_clean(&self) -> bool {
        self.modified == 0 && self.untracked == 0
    }

    /// Branch name without the `refs/heads/` prefix.
    pub fn branch_short(&self) -> &str {
        self.branch.strip_prefix("refs/heads/").unwrap_or(&self.branch)
    }

    /// Abbreviated head commit id.
    pub fn short_head(&self) -> &str {
        if self.head.len() >= 8 {
            &self.head[..8]
        } else {
            &self.head
        }
    }

    /// Human-facing name: branch short name, or a detached/bare placeholder.
    pub fn display_name(&self) -> String {
        if self.is_bare {
            return "(bare)".to_string();
        }
        if self.is_detached {
            return format!("{} (detached)", self.short_head());
        }
        self.branch_short().to_string()
    }

    /// `"bare"`, `"clean"`, or a comma-joined list of modified/untracked counts.
    pub fn status_text(&self) -> String {
        if self.is_bare {
            return "bare".to_string();
        }
        if self.is_clean() {
            return "clean".to_string();
        }
        let mut parts = Vec::new();
        if self.modified > 0 {
            parts.push(format!("{} modified", self.modified));
        }
        if self.untracked > 0 {
            parts.push(format!("{} untracked", self.untracked));
        }
        parts.join(", ")
    }

    /// `"-"` when in sync with upstream, else behind then ahead indicators.
    pub fn sync_text(&self) -> String {
        if self.ahead == 0 && self.behind == 0 {
            return "-".to_string();
        }
        let mut parts = Vec::new();
        if self.behind > 0 {
            parts.push(format!("↓{}", self.behind));
        }
        if self.ahead > 0 {
            parts.push(format!("↑{}", self.ahead));
        }
        parts.join(" ")
    }

    /// Whole days since the last commit; 0 when the history is unknown.
    pub fn inactive_days(&self) -> u64 {
        match self.last_commit {
            Some(t) => Utc::now().signed_duration_since(t).num_days().max(0) as u64,
            None => 0,
        }
    }

    /// True when the branch has been inactive for more than `threshold_days`.
    pub fn is_stale(&self, threshold_days: u64) -> bool {
        self.inactive_days() > threshold_days
    }

    /// Assemble display tags in the fixed order: current, dirty status,
    /// merged, sync, staleness.
    pub fn tags(&self) -> Vec<Tag> {
        let mut tags = Vec::new();
        if self.is_current {
            tags.push(Tag::Current);
        }
        if !self.is_bare && !self.is_clean() {
            tags.push(Tag::Dirty(self.status_text()));
        }
        if self.is_merged {
            tags.push(Tag::Merged);
        }
        let sync = self.sync_text();
        if sync != "-" {
            tags.push(Tag::Sync(sync));
        }
        let days = self.inactive_days();
        if days > STALE_DISPLAY_DAYS {
            tags.push(Tag::Stale(days));
        }
        tags
    }
}

/// True when `cwd` is `candidate` or lives underneath it.
///
/// Both paths must already be resolved absolute paths; comparison is purely
/// component-wise.
pub fn is_ancestor_or_same(candidate: &Path, cwd: &Path) -> bool {
    cwd.starts_with(candidate)
}

/// List all worktrees of the repository, marking the current one.
pub fn list_worktrees(repo_dir: &Path) -> Result<Vec<Worktree>, GroveError> {
    let out = git::run(repo_dir, &["worktree", "list", "--porcelain"])?;
    let mut worktrees = parse_worktree_list(&out);

    if let Ok(cwd) = std::env::current_dir() {
        let cwd = cwd.canonicalize().unwrap_or(cwd);
        for wt in &mut worktrees {
            let wt_path = wt.path.canonicalize().unwrap_or_else(|_| wt.path.clone());
            if is_ancestor_or_same(&wt_path, &cwd) {
                wt.is_current = true;
            }
        }
    }

    Ok(worktrees)
}

/// Parse `git worktree list --porcelain` output.
pub fn parse_worktree_list(out: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut current: Option<Worktree> = None;

    for line in out.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(wt) = current.take() {
                worktrees.push(wt);
            }
            current = Some(Worktree {
                path: PathBuf::from(path),
                ..Worktree::default()
            });
        } else if let Some(wt) = current.as_mut() {
            if let Some(head) = line.strip_prefix("HEAD ") {
                wt.head = head.to_string();
            } else if let Some(branch) = line.strip_prefix("branch ") {
                wt.branch = branch.to_string();
            } else if line == "bare" {
                wt.is_bare = true;
            } else if line == "detached" {
                wt.is_detached = true;
            }
        }
    }
    if let Some(wt) = current {
        worktrees.push(wt);
    }

    worktrees
}

/// Populate status counts, ahead/behind, merge status, and last-commit time.
///
/// A no-op for bare worktrees and for worktrees whose directory is gone.
/// Fragments that fail to parse contribute zero; enrichment never fails.
pub fn enrich(wt: &mut Worktree, default_branch: &str) {
    if wt.is_bare || !wt.path.exists() {
        return;
    }

    if let Ok(out) = git::run(&wt.path, &["status", "--porcelain"]) {
        let (modified, untracked) = parse_status_counts(&out);
        wt.modified = modified;
        wt.untracked = untracked;
    }

    if let Ok(out) = git::run(
        &wt.path,
        &["rev-list", "--left-right", "--count", "HEAD...@{upstream}"],
    ) {
        if let Some((ahead, behind)) = parse_ahead_behind(&out) {
            wt.ahead = ahead;
            wt.behind = behind;
        }
    }

    let branch = wt.branch_short().to_string();
    if !branch.is_empty() && branch != default_branch {
        if let Ok(out) = git::run(&wt.path, &["branch", "--merged", default_branch]) {
            wt.is_merged = merged_output_contains(&out, &branch);
        }
    }

    if let Ok(out) = git::run(&wt.path, &["log", "-1", "--format=%ct"]) {
        if let Ok(ts) = out.parse::<i64>() {
            wt.last_commit = Utc.timestamp_opt(ts, 0).single();
        }
    }
}

/// Count modified and untracked entries in `git status --porcelain` output.
fn parse_status_counts(out: &str) -> (u64, u64) {
    let mut modified = 0;
    let mut untracked = 0;
    for line in out.lines() {
        if line.len() < 2 {
            continue;
        }
        if line.starts_with("??") {
            untracked += 1;
        } else {
            modified += 1;
        }
    }
    (modified, untracked)
}

/// Parse `git rev-list --left-right --count` output into (ahead, behind).
fn parse_ahead_behind(out: &str) -> Option<(u64, u64)> {
    let mut fields = out.split_whitespace();
    let ahead = fields.next()?.parse().ok()?;
    let behind = fields.next()?.parse().ok()?;
    Some((ahead, behind))
}

/// Check whether `git branch --merged` output lists the given branch.
fn merged_output_contains(out: &str, branch: &str) -> bool {
    out.lines().any(|line| {
        let name = line.trim().trim_start_matches("* ").trim_start_matches("+ ");
        name.trim() == branch
    })
}

/// Create a worktree at `target_path` for `branch`.
///
/// An existing branch is checked out unmodified; otherwise a new branch is
/// created from `base` (or the current position when `base` is None).
pub fn add_worktree(
    repo_dir: &Path,
    target_path: &Path,
    branch: &str,
    base: Option<&str>,
) -> Result<(), GroveError> {
    let target = target_path.to_string_lossy();
    if git::branch_exists(repo_dir, branch) {
        git::run(repo_dir, &["worktree", "add", &target, branch])?;
        return Ok(());
    }
    let mut args = vec!["worktree", "add", "-b", branch, &target];
    if let Some(base) = base {
        args.push(base);
    }
    git::run(repo_dir, &args)?;
    Ok(())
}

/// Remove a worktree, optionally deleting its now-unused branch.
///
/// Removal is retried with `--force` before giving up. Branch deletion is
/// best-effort and tolerates the branch already being gone.
pub fn remove_worktree(
    repo_dir: &Path,
    wt_path: &Path,
    delete_branch: bool,
) -> Result<(), GroveError> {
    // Capture the branch name before the worktree disappears.
    let mut branch_name = String::new();
    if delete_branch {
        if let Ok(worktrees) = list_worktrees(repo_dir) {
            let target = wt_path.canonicalize().unwrap_or_else(|_| wt_path.to_path_buf());
            for wt in worktrees {
                let p = wt.path.canonicalize().unwrap_or_else(|_| wt.path.clone());
                if p == target {
                    branch_name = wt.branch_short().to_string();
                    break;
                }
            }
        }
    }

    let target = wt_path.to_string_lossy();
    if git::run(repo_dir, &["worktree", "remove", &target]).is_err() {
        git::run(repo_dir, &["worktree", "remove", "--force", &target])?;
    }

    if delete_branch && !branch_name.is_empty() {
        let _ = git::run(repo_dir, &["branch", "-d", &branch_name]);
    }
    Ok(())
}

/// Clean up references to worktrees whose directories no longer exist.
pub fn prune_worktrees(repo_dir: &Path) -> Result<(), GroveError> {
    git::run(repo_dir, &["worktree", "prune"])?;
    Ok(())
}
