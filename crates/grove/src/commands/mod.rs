//! CLI command implementations

pub mod add;
pub mod browse;
pub mod clean;
pub mod init;
pub mod ls;
pub mod switch;

pub use add::run_add;
pub use browse::run_browse;
pub use clean::run_clean;
pub use init::run_init;
pub use ls::run_ls;
pub use switch::run_switch;

use std::path::{Path, PathBuf};

use grove_core::error::GroveError;
use grove_core::{git, worktree};
use grove_core::worktree::Worktree;

/// Resolve the repository root for the invoking working directory.
pub(crate) fn repo_root() -> Result<PathBuf, GroveError> {
    let cwd = std::env::current_dir()?;
    git::repo_root(&cwd).map(PathBuf::from)
}

/// List all worktrees and enrich them against the default branch.
pub(crate) fn load_enriched(repo: &Path) -> Result<(Vec<Worktree>, String), GroveError> {
    let mut worktrees = worktree::list_worktrees(repo)?;
    let default_branch = git::default_branch(repo);
    for wt in &mut worktrees {
        worktree::enrich(wt, &default_branch);
    }
    Ok((worktrees, default_branch))
}
