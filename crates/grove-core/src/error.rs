//! Error types for grove operations

use thiserror::Error;

/// Core error type for grove operations
#[derive(Error, Debug)]
pub enum GroveError {
    /// Not inside a git repository
    #[error("not a git repository")]
    NotAGitRepository,

    /// A git invocation failed
    #[error("git {command}: {message}")]
    GitCommand { command: String, message: String },

    /// Worktree target path already occupied
    #[error("path already exists: {path}")]
    PathExists { path: String },

    /// No worktrees available for the requested operation
    #[error("no worktrees available")]
    NoWorktrees,

    /// No worktree branch matched the switch query
    #[error("no worktree matching {query:?}")]
    NoMatch { query: String },

    /// Unsupported shell passed to `switch --init`
    #[error("unsupported shell: {shell} (supported: bash, zsh, fish)")]
    UnsupportedShell { shell: String },

    /// Config file already present when running `init`
    #[error("config already exists: {path}")]
    ConfigExists { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GroveError {
    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            GroveError::NotAGitRepository => 2,
            GroveError::GitCommand { .. } => 1,
            GroveError::PathExists { .. } => 3,
            GroveError::NoWorktrees => 4,
            GroveError::NoMatch { .. } => 5,
            GroveError::UnsupportedShell { .. } => 6,
            GroveError::ConfigExists { .. } => 3,
            GroveError::Io(_) => 1,
        }
    }
}
