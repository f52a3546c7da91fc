//! Thin wrapper over the git binary
//!
//! Every repository fact grove consumes comes through [`run`], which shells
//! out to git and folds stderr into the error message on failure.

use std::path::Path;
use std::process::Command;

use crate::error::GroveError;

/// Run a git command in `dir` and return trimmed stdout.
pub fn run(dir: &Path, args: &[&str]) -> Result<String, GroveError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GroveError::NotAGitRepository
            } else {
                GroveError::GitCommand {
                    command: args.join(" "),
                    message: e.to_string(),
                }
            }
        })?;

    if !output.status.success() {
        let mut message = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if message.is_empty() {
            message = format!("exited with {}", output.status);
        }
        return Err(GroveError::GitCommand {
            command: args.join(" "),
            message,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Resolve the repository toplevel for `dir`.
pub fn repo_root(dir: &Path) -> Result<String, GroveError> {
    run(dir, &["rev-parse", "--show-toplevel"]).map_err(|_| GroveError::NotAGitRepository)
}

/// Resolve the repository's primary branch.
///
/// Tries origin/HEAD first, then local `main` or `master`, and falls back to
/// `"main"` when nothing is determinable.
pub fn default_branch(dir: &Path) -> String {
    if let Ok(out) = run(dir, &["symbolic-ref", "refs/remotes/origin/HEAD"]) {
        if let Some(name) = out.strip_prefix("refs/remotes/origin/") {
            return name.to_string();
        }
    }
    for name in ["main", "master"] {
        let refname = format!("refs/heads/{name}");
        if run(dir, &["rev-parse", "--verify", &refname]).is_ok() {
            return name.to_string();
        }
    }
    "main".to_string()
}

/// Check if a local branch exists.
pub fn branch_exists(dir: &Path, branch: &str) -> bool {
    let refname = format!("refs/heads/{branch}");
    run(dir, &["rev-parse", "--verify", &refname]).is_ok()
}
