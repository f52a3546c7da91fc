//! grove-core: worktree listing, classification, and cleanup
//!
//! This crate provides the repository collaborator and the pure models the
//! grove CLI drives: worktree classification, branch resolution, and the
//! interactive selection state machines.

/// Core error types for grove operations
pub mod error;

/// Configuration handling
pub mod config;

/// Git subprocess wrapper
pub mod git;

/// Worktree records, listing, enrichment, and classification
pub mod worktree;

/// Branch-name resolution for the switch workflow
pub mod resolve;

/// Multi-select removal session state machine
pub mod session;

/// Single-select cursor model
pub mod selector;

// Re-exports for convenience
pub use config::{Config, LayoutStrategy};
pub use error::GroveError;
pub use resolve::resolve;
pub use selector::{Selector, SelectorEvent, SelectorOutcome};
pub use session::{Event, GitRemover, Item, Mode, RemoveWorktrees, Session, Signal};
pub use worktree::{STALE_DISPLAY_DAYS, Tag, Worktree, is_ancestor_or_same};
