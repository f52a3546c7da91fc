//! `grove clean` - remove merged or stale worktrees

use dialoguer::Confirm;
use owo_colors::OwoColorize;

use grove_core::config::Config;
use grove_core::error::GroveError;
use grove_core::worktree::{self, Worktree};

use crate::colors::COLORS;

struct Candidate {
    worktree: Worktree,
    reason: String,
}

pub fn run_clean(
    merged: bool,
    stale: Option<u64>,
    dry_run: bool,
    force: bool,
) -> Result<i32, GroveError> {
    let repo_root = super::repo_root()?;
    let cfg = Config::load_for_repo(&repo_root);
    let (worktrees, default_branch) = super::load_enriched(&repo_root)?;

    // Explicit flags narrow selection to exactly the named criteria;
    // a bare `clean` targets both merged and config-threshold stale.
    // `--stale 0` counts as unset, since every worktree is 0 days inactive.
    let stale = stale.filter(|n| *n > 0);
    let has_explicit_flags = merged || stale.is_some();
    let stale_days = match stale {
        Some(n) => n,
        None => cfg.cleanup.stale_days,
    };

    let mut candidates = Vec::new();
    for wt in worktrees {
        if wt.is_bare || wt.is_current || wt.branch_short() == default_branch {
            continue;
        }

        let mut reasons = Vec::new();
        if has_explicit_flags {
            if merged && wt.is_merged {
                reasons.push("merged".to_string());
            }
            if stale.is_some() && wt.inactive_days() >= stale_days {
                reasons.push(format!("{}d inactive", wt.inactive_days()));
            }
        } else {
            if wt.is_merged {
                reasons.push("merged".to_string());
            }
            if stale_days > 0 && wt.inactive_days() >= stale_days {
                reasons.push(format!("{}d inactive", wt.inactive_days()));
            }
        }

        if !reasons.is_empty() {
            candidates.push(Candidate {
                worktree: wt,
                reason: reasons.join(", "),
            });
        }
    }

    if candidates.is_empty() {
        println!("  {}", "No worktrees to clean up.".style(COLORS.success));
        if cfg.cleanup.auto_prune {
            let _ = worktree::prune_worktrees(&repo_root);
        }
        return Ok(0);
    }

    println!("\n  Worktrees to remove ({}):\n", candidates.len());
    for c in &candidates {
        let wt = &c.worktree;
        let mut tags = vec![c.reason.clone()];
        if !wt.is_clean() {
            tags.push(wt.status_text().style(COLORS.warning).to_string());
        }
        println!(
            "    {}  {}  [{}]",
            wt.branch_short().style(COLORS.accent),
            wt.path.display(),
            tags.join(", "),
        );
    }
    println!();

    if dry_run {
        println!("  {}", "Dry run - no changes made.".style(COLORS.warning));
        return Ok(0);
    }

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("  Remove these worktrees?")
            .default(false)
            .interact()
            .map_err(|e| GroveError::Io(std::io::Error::other(e)))?;
        if !confirmed {
            println!("  Cancelled.");
            return Ok(0);
        }
    }

    let mut removed = 0;
    for c in &candidates {
        let wt = &c.worktree;
        let branch = wt.branch_short();
        let delete_branch = wt.is_merged;
        match worktree::remove_worktree(&repo_root, &wt.path, delete_branch) {
            Ok(()) => {
                println!("  {}", format!("Removed: {branch}").style(COLORS.success));
                removed += 1;
            }
            Err(e) => {
                println!(
                    "  {}",
                    format!("Failed to remove {branch}: {e}").style(COLORS.fail)
                );
            }
        }
    }

    if cfg.cleanup.auto_prune {
        let _ = worktree::prune_worktrees(&repo_root);
    }

    println!("\n  Cleaned up {removed} worktree(s).");
    Ok(0)
}
