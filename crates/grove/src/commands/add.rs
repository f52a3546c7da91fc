//! `grove add` - create a worktree with config-driven path resolution

use std::process::Command;

use owo_colors::OwoColorize;

use grove_core::config::Config;
use grove_core::error::GroveError;
use grove_core::worktree;

use crate::colors::COLORS;

pub fn run_add(branch: &str, base: Option<&str>) -> Result<i32, GroveError> {
    let repo_root = super::repo_root()?;
    let cfg = Config::load_for_repo(&repo_root);
    let target = cfg.worktree_path(&repo_root, branch);

    if target.exists() {
        return Err(GroveError::PathExists {
            path: target.display().to_string(),
        });
    }

    worktree::add_worktree(&repo_root, &target, branch, base)?;

    println!("  {}", "Created worktree".style(COLORS.success).bold());
    println!("  Branch: {}", branch.style(COLORS.accent));
    println!("  Path:   {}", target.display());

    // Hook failures warn but never fail the add; the worktree exists.
    if !cfg.hooks.post_add.is_empty() {
        println!("  Running: {}", cfg.hooks.post_add.style(COLORS.warning));
        let outcome = Command::new("sh")
            .arg("-c")
            .arg(&cfg.hooks.post_add)
            .current_dir(&target)
            .status();
        match outcome {
            Ok(status) if status.success() => {}
            Ok(status) => println!(
                "  {}",
                format!("Warning: post_add hook exited with {status}").style(COLORS.warning)
            ),
            Err(e) => println!(
                "  {}",
                format!("Warning: post_add hook failed: {e}").style(COLORS.warning)
            ),
        }
    }

    println!("\n  cd {}", target.display());
    Ok(0)
}
