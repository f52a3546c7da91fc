//! Configuration handling for grove
//!
//! Layered TOML config: built-in defaults, then the global file at
//! `~/.config/grove/config.toml`, then `.grove.toml` in the repo root. Each
//! file overrides only the keys it actually sets; keys it omits keep the
//! value from the layer below. A malformed file prints a warning and is
//! otherwise ignored; config loading never fails an invocation.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GroveError;

/// Where new worktrees are placed relative to the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Sibling directory of the repo, named by `pattern`.
    Adjacent,
    /// `.worktrees/<branch>` inside the repo.
    Subdirectory,
}

/// Grove configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub cleanup: CleanupConfig,
    #[serde(default)]
    pub hooks: HooksConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_strategy")]
    pub strategy: LayoutStrategy,
    /// Directory naming pattern for the adjacent strategy; `{repo}` and
    /// `{branch}` are substituted.
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanupConfig {
    /// Days of inactivity before `clean` considers a worktree stale.
    /// Independent of the fixed 30-day display threshold.
    #[serde(default = "default_stale_days")]
    pub stale_days: u64,
    #[serde(default = "default_auto_prune")]
    pub auto_prune: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HooksConfig {
    /// Shell command run in a freshly created worktree after `add`.
    #[serde(default)]
    pub post_add: String,
}

fn default_strategy() -> LayoutStrategy {
    LayoutStrategy::Adjacent
}

fn default_pattern() -> String {
    "{repo}-{branch}".to_string()
}

fn default_stale_days() -> u64 {
    30
}

fn default_auto_prune() -> bool {
    true
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            pattern: default_pattern(),
        }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            stale_days: default_stale_days(),
            auto_prune: default_auto_prune(),
        }
    }
}

impl Config {
    /// Load config for a repository: defaults, global file, local file.
    pub fn load_for_repo(repo_root: &Path) -> Self {
        let mut cfg = Config::default();
        if let Some(home) = dirs::home_dir() {
            cfg.merge_file(&home.join(".config").join("grove").join("config.toml"));
        }
        cfg.merge_file(&repo_root.join(".grove.toml"));
        cfg
    }

    fn merge_file(&mut self, path: &Path) {
        let Ok(text) = std::fs::read_to_string(path) else {
            return;
        };
        match toml::from_str::<ConfigPatch>(&text) {
            Ok(patch) => patch.apply(self),
            Err(e) => {
                eprintln!("warning: failed to parse config {}: {e}", path.display());
            }
        }
    }

    /// Compute the target path for a new worktree.
    pub fn worktree_path(&self, repo_root: &Path, branch: &str) -> PathBuf {
        let safe_branch = sanitize_branch(branch);
        match self.layout.strategy {
            LayoutStrategy::Subdirectory => repo_root.join(".worktrees").join(safe_branch),
            LayoutStrategy::Adjacent => {
                let repo_name = repo_root
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let dir_name = self
                    .layout
                    .pattern
                    .replace("{repo}", &repo_name)
                    .replace("{branch}", &safe_branch);
                repo_root
                    .parent()
                    .unwrap_or(Path::new("."))
                    .join(dir_name)
            }
        }
    }
}

/// One config file's contents, every key optional.
///
/// Files are deserialized into this shape so a layer overrides only the keys
/// it sets; anything absent keeps the value from the layer below.
#[derive(Debug, Deserialize, Default)]
struct ConfigPatch {
    layout: Option<LayoutPatch>,
    cleanup: Option<CleanupPatch>,
    hooks: Option<HooksPatch>,
}

#[derive(Debug, Deserialize)]
struct LayoutPatch {
    strategy: Option<LayoutStrategy>,
    pattern: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CleanupPatch {
    stale_days: Option<u64>,
    auto_prune: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct HooksPatch {
    post_add: Option<String>,
}

impl ConfigPatch {
    fn apply(self, cfg: &mut Config) {
        if let Some(layout) = self.layout {
            if let Some(strategy) = layout.strategy {
                cfg.layout.strategy = strategy;
            }
            if let Some(pattern) = layout.pattern {
                cfg.layout.pattern = pattern;
            }
        }
        if let Some(cleanup) = self.cleanup {
            if let Some(stale_days) = cleanup.stale_days {
                cfg.cleanup.stale_days = stale_days;
            }
            if let Some(auto_prune) = cleanup.auto_prune {
                cfg.cleanup.auto_prune = auto_prune;
            }
        }
        if let Some(hooks) = self.hooks {
            if let Some(post_add) = hooks.post_add {
                cfg.hooks.post_add = post_add;
            }
        }
    }
}

/// Replace characters git allows in branch names but filesystems dislike.
fn sanitize_branch(branch: &str) -> String {
    branch
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '@' | '*' | '?' | '[' | ']' | '~' | '^' | ' ' => '-',
            other => other,
        })
        .collect()
}

/// Default config file contents, commented for hand-editing.
pub fn default_config_text() -> &'static str {
    r#"# grove configuration

[layout]
# "adjacent" places worktrees next to the repo: ../repo-branch/
# "subdirectory" places them inside: .worktrees/branch/
strategy = "adjacent"

# Directory naming pattern. Available variables: {repo}, {branch}
pattern = "{repo}-{branch}"

[cleanup]
# Days of inactivity before a worktree is considered stale
stale_days = 30

# Automatically prune stale worktree references
auto_prune = true

[hooks]
# Command to run after creating a new worktree
# post_add = "npm install"
"#
}

/// Write the default config file, creating parent directories as needed.
pub fn init_config(path: &Path) -> Result<(), GroveError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, default_config_text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.layout.strategy, LayoutStrategy::Adjacent);
        assert_eq!(cfg.layout.pattern, "{repo}-{branch}");
        assert_eq!(cfg.cleanup.stale_days, 30);
        assert!(cfg.cleanup.auto_prune);
        assert!(cfg.hooks.post_add.is_empty());
    }

    #[test]
    fn test_default_config_text_round_trips() {
        let cfg: Config = toml::from_str(default_config_text()).expect("default config parses");
        assert_eq!(cfg.cleanup.stale_days, 30);
        assert_eq!(cfg.layout.strategy, LayoutStrategy::Adjacent);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: Config = toml::from_str("[cleanup]\nstale_days = 14\n").expect("parses");
        assert_eq!(cfg.cleanup.stale_days, 14);
        assert!(cfg.cleanup.auto_prune);
        assert_eq!(cfg.layout.pattern, "{repo}-{branch}");
    }

    #[test]
    fn test_worktree_path_adjacent() {
        let cfg = Config::default();
        let path = cfg.worktree_path(Path::new("/home/dev/myrepo"), "feature/auth");
        assert_eq!(path, PathBuf::from("/home/dev/myrepo-feature-auth"));
    }

    #[test]
    fn test_worktree_path_subdirectory() {
        let mut cfg = Config::default();
        cfg.layout.strategy = LayoutStrategy::Subdirectory;
        let path = cfg.worktree_path(Path::new("/home/dev/myrepo"), "hotfix-1");
        assert_eq!(path, PathBuf::from("/home/dev/myrepo/.worktrees/hotfix-1"));
    }

    #[test]
    fn test_worktree_path_custom_pattern() {
        let mut cfg = Config::default();
        cfg.layout.pattern = "wt-{branch}".to_string();
        let path = cfg.worktree_path(Path::new("/home/dev/myrepo"), "feat");
        assert_eq!(path, PathBuf::from("/home/dev/wt-feat"));
    }

    #[test]
    fn test_sanitize_branch() {
        assert_eq!(sanitize_branch("feature/auth"), "feature-auth");
        assert_eq!(sanitize_branch("a:b@c*d"), "a-b-c-d");
        assert_eq!(sanitize_branch("plain"), "plain");
    }

    #[test]
    fn test_load_for_repo_reads_local_file() {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(
            temp.path().join(".grove.toml"),
            "[layout]\nstrategy = \"subdirectory\"\n",
        )
        .expect("failed to write config");

        let cfg = Config::load_for_repo(temp.path());
        assert_eq!(cfg.layout.strategy, LayoutStrategy::Subdirectory);
    }

    #[test]
    fn test_partial_local_file_keeps_global_overrides() {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let global = temp.path().join("global.toml");
        let local = temp.path().join("local.toml");
        std::fs::write(&global, "[cleanup]\nstale_days = 7\n").expect("failed to write config");
        std::fs::write(&local, "[layout]\nstrategy = \"subdirectory\"\n")
            .expect("failed to write config");

        let mut cfg = Config::default();
        cfg.merge_file(&global);
        cfg.merge_file(&local);

        // The local file only sets [layout]; the global stale_days survives.
        assert_eq!(cfg.layout.strategy, LayoutStrategy::Subdirectory);
        assert_eq!(cfg.cleanup.stale_days, 7);
        assert!(cfg.cleanup.auto_prune);
    }

    #[test]
    fn test_later_layer_overrides_same_key() {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let global = temp.path().join("global.toml");
        let local = temp.path().join("local.toml");
        std::fs::write(&global, "[cleanup]\nstale_days = 7\n").expect("failed to write config");
        std::fs::write(&local, "[cleanup]\nstale_days = 14\n").expect("failed to write config");

        let mut cfg = Config::default();
        cfg.merge_file(&global);
        cfg.merge_file(&local);
        assert_eq!(cfg.cleanup.stale_days, 14);
    }

    #[test]
    fn test_load_for_repo_tolerates_malformed_file() {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        std::fs::write(temp.path().join(".grove.toml"), "not [valid toml")
            .expect("failed to write config");

        let cfg = Config::load_for_repo(temp.path());
        assert_eq!(cfg.cleanup.stale_days, 30);
    }

    #[test]
    fn test_init_config_creates_file() {
        let temp = tempfile::tempdir().expect("failed to create temp dir");
        let path = temp.path().join("nested").join("config.toml");
        init_config(&path).expect("init_config should succeed");
        assert!(path.exists());
    }
}
