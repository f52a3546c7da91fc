//! grove CLI - A smarter way to manage git worktrees

mod cli;
mod colors;
mod commands;
mod tui;

use std::process::ExitCode;

use cli::Commands;

fn main() -> ExitCode {
    let cli = cli::parse();

    let result = match cli.command {
        Some(Commands::Add { branch, base }) => commands::run_add(&branch, base.as_deref()),
        Some(Commands::Ls { json }) => commands::run_ls(json),
        Some(Commands::Clean {
            merged,
            stale,
            dry_run,
            force,
        }) => commands::run_clean(merged, stale, dry_run, force),
        Some(Commands::Switch { query, init }) => {
            commands::run_switch(query.as_deref(), init.as_deref())
        }
        Some(Commands::Init { local }) => commands::run_init(local),
        // No subcommand: open the interactive browser.
        None => commands::run_browse(),
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
