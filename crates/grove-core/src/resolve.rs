//! Branch-name resolution for the switch workflow
//!
//! Matches a query against candidate worktrees in strict priority order:
//! exact, then prefix, then substring. All comparisons are case-insensitive.
//! Candidates must already exclude bare and detached worktrees; those have no
//! stable branch name to match against.

use crate::worktree::Worktree;

/// Resolve `query` against candidate branch short names.
///
/// An exact match returns that single candidate and short-circuits the lower
/// tiers. A tier that yields any result suppresses later tiers; prefix and
/// substring tiers return every match so the caller can disambiguate.
pub fn resolve<'a>(candidates: &'a [Worktree], query: &str) -> Vec<&'a Worktree> {
    let query_lower = query.to_lowercase();

    for wt in candidates {
        if wt.branch_short().to_lowercase() == query_lower {
            return vec![wt];
        }
    }

    let prefix_matches: Vec<&Worktree> = candidates
        .iter()
        .filter(|wt| wt.branch_short().to_lowercase().starts_with(&query_lower))
        .collect();
    if !prefix_matches.is_empty() {
        return prefix_matches;
    }

    candidates
        .iter()
        .filter(|wt| wt.branch_short().to_lowercase().contains(&query_lower))
        .collect()
}
