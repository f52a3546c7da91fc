//! CLI argument parsing with clap derive

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// grove - A smarter way to manage git worktrees
#[derive(Parser)]
#[command(name = "grove")]
#[command(version = VERSION)]
#[command(about = "A smarter way to manage git worktrees")]
#[command(
    long_about = "grove simplifies git worktree management with smart defaults,\nrich status display, and easy cleanup.\n\nRun without arguments to open the interactive worktree browser."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new worktree
    ///
    /// If the branch already exists, it is checked out in the new worktree.
    /// Otherwise a new branch is created from the base branch.
    #[command(
        long_about = "Create a new worktree with automatic path resolution and branch management.\n\nIf the branch already exists, it checks it out in the new worktree.\nIf it doesn't exist, a new branch is created from the base branch.\n\nThe target path comes from the [layout] section of the config:\n  adjacent      ../{repo}-{branch}/\n  subdirectory  .worktrees/{branch}/"
    )]
    Add {
        /// Branch to check out or create
        branch: String,

        /// Base branch to create from (default: current HEAD)
        #[arg(short = 'b', long)]
        base: Option<String>,
    },

    /// List all worktrees with status
    #[command(alias = "list")]
    Ls {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Remove merged or stale worktrees
    ///
    /// By default targets both merged branches and branches past the
    /// configured stale threshold, with a confirmation prompt.
    #[command(
        long_about = "Identify and remove worktrees that are no longer needed.\n\nBy default, shows candidates for confirmation.\nUse --merged to target only branches merged into the default branch.\nUse --stale to target branches inactive for a specified number of days."
    )]
    Clean {
        /// Remove worktrees with merged branches
        #[arg(long)]
        merged: bool,

        /// Remove worktrees inactive for N days
        #[arg(long, value_name = "N")]
        stale: Option<u64>,

        /// Preview candidates without removing
        #[arg(long)]
        dry_run: bool,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print the path of a worktree to switch to
    ///
    /// Matching priority: exact, then prefix, then substring, all
    /// case-insensitive. Without arguments an interactive selector is shown.
    #[command(
        alias = "sw",
        long_about = "Print the worktree path matching the given branch name.\n\nUse this with cd or a shell wrapper to quickly switch between worktrees.\nWithout arguments, an interactive selector is shown.\n\nMatching priority:\n  1. Exact match\n  2. Prefix match\n  3. Substring match (case-insensitive)\n\nShell integration:\n  eval \"$(grove switch --init zsh)\"   # add to .zshrc\n  eval \"$(grove switch --init bash)\"  # add to .bashrc\n  grove switch --init fish | source   # add to config.fish"
    )]
    Switch {
        /// Branch name or fragment to match
        query: Option<String>,

        /// Output shell integration function (bash, zsh, fish)
        #[arg(long, value_name = "SHELL")]
        init: Option<String>,
    },

    /// Create a default configuration file
    ///
    /// By default creates ~/.config/grove/config.toml.
    #[command(
        long_about = "Generate a default grove configuration file.\n\nBy default creates ~/.config/grove/config.toml.\nUse --local to create .grove.toml in the current directory."
    )]
    Init {
        /// Create config in current directory
        #[arg(long)]
        local: bool,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
