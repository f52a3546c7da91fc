//! Default action - the interactive worktree browser

use grove_core::error::GroveError;
use grove_core::session::{GitRemover, Session};

use crate::tui;

pub fn run_browse() -> Result<i32, GroveError> {
    let repo_root = super::repo_root()?;
    let (worktrees, _) = super::load_enriched(&repo_root)?;

    if worktrees.is_empty() {
        return Err(GroveError::NoWorktrees);
    }

    let mut session = Session::new(worktrees);
    let mut remover = GitRemover {
        repo_dir: repo_root,
    };
    tui::run_browser(&mut session, &mut remover)?;
    Ok(0)
}
