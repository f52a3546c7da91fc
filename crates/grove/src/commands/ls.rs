//! `grove ls` - tabular or JSON worktree listing

use owo_colors::OwoColorize;
use serde::Serialize;

use grove_core::error::GroveError;
use grove_core::worktree::{STALE_DISPLAY_DAYS, Worktree};

use crate::colors::COLORS;

const MAX_PATH_WIDTH: usize = 50;

/// Machine-readable row for `--json` output.
#[derive(Serialize)]
struct Row<'a> {
    branch: String,
    path: String,
    head: &'a str,
    bare: bool,
    detached: bool,
    current: bool,
    modified: u64,
    untracked: u64,
    ahead: u64,
    behind: u64,
    merged: bool,
    inactive_days: u64,
}

impl<'a> Row<'a> {
    fn from_worktree(wt: &'a Worktree) -> Self {
        Self {
            branch: wt.branch_short().to_string(),
            path: wt.path.display().to_string(),
            head: &wt.head,
            bare: wt.is_bare,
            detached: wt.is_detached,
            current: wt.is_current,
            modified: wt.modified,
            untracked: wt.untracked,
            ahead: wt.ahead,
            behind: wt.behind,
            merged: wt.is_merged,
            inactive_days: wt.inactive_days(),
        }
    }
}

pub fn run_ls(json: bool) -> Result<i32, GroveError> {
    let repo_root = super::repo_root()?;
    let (worktrees, _) = super::load_enriched(&repo_root)?;

    if worktrees.is_empty() {
        println!("No worktrees found.");
        return Ok(0);
    }

    if json {
        let rows: Vec<Row> = worktrees.iter().map(Row::from_worktree).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).map_err(|e| GroveError::Io(e.into()))?
        );
        return Ok(0);
    }

    print_table(&worktrees);
    Ok(0)
}

fn print_table(worktrees: &[Worktree]) {
    let mut branch_w = "Branch".len();
    let mut path_w = "Path".len();
    let mut status_w = "Status".len();

    for wt in worktrees {
        branch_w = branch_w.max(wt.display_name().chars().count());
        path_w = path_w.max(wt.path.display().to_string().chars().count());
        status_w = status_w.max(wt.status_text().chars().count());
    }
    path_w = path_w.min(MAX_PATH_WIDTH);

    // Pad before styling; ANSI codes would throw off the width math.
    println!(
        "  {}  {}  {}  {}",
        format!("{:<branch_w$}", "Branch").bold(),
        format!("{:<path_w$}", "Path").bold(),
        format!("{:<status_w$}", "Status").bold(),
        "Sync".bold(),
    );
    println!("  {}", "─".repeat(branch_w + path_w + status_w + 20));

    for wt in worktrees {
        let name = wt.display_name();
        let branch_str = if wt.is_current {
            format!("{:<w$}", format!("* {name}"), w = branch_w + 2)
                .style(COLORS.success)
                .to_string()
        } else {
            format!("  {name:<branch_w$}")
        };

        let path = wt.path.display().to_string();
        let path_str = if path.chars().count() > path_w {
            let tail: String = path
                .chars()
                .rev()
                .take(path_w - 3)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            format!("{path:<path_w$}")
        };

        let status = wt.status_text();
        let status_style = if wt.is_clean() {
            COLORS.success
        } else {
            COLORS.warning
        };
        let status_str = format!("{status:<status_w$}").style(status_style).to_string();

        let mut sync = wt.sync_text();
        if wt.is_merged {
            sync.push_str(&format!(" {}", "(merged)".style(COLORS.success)));
        }
        let days = wt.inactive_days();
        if days > STALE_DISPLAY_DAYS {
            sync.push_str(&format!(" {}", format!("({days}d stale)").style(COLORS.fail)));
        }

        println!("  {branch_str}  {path_str}  {status_str}  {sync}");
    }

    println!();
}
