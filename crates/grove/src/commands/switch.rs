//! `grove switch` - print the path of a matching worktree
//!
//! The path goes to stdout so a shell wrapper can `cd` into it; all
//! interactive rendering happens on stderr.

use grove_core::error::GroveError;
use grove_core::resolve;

use crate::tui;

const SHELL_INIT_BASH_ZSH: &str = r#"gw() {
  if [ "$1" = "switch" ] || [ "$1" = "sw" ]; then
    shift
    local dir
    dir=$(command grove switch "$@")
    if [ $? -eq 0 ] && [ -n "$dir" ] && [ -d "$dir" ]; then
      cd "$dir"
    fi
  else
    command grove "$@"
  fi
}
"#;

const SHELL_INIT_FISH: &str = r#"function gw
  if test (count $argv) -ge 1; and test "$argv[1]" = "switch" -o "$argv[1]" = "sw"
    set -l dir (command grove switch $argv[2..])
    if test $status -eq 0; and test -n "$dir"; and test -d "$dir"
      cd "$dir"
    end
  else
    command grove $argv
  end
end
"#;

pub fn run_switch(query: Option<&str>, init: Option<&str>) -> Result<i32, GroveError> {
    if let Some(shell) = init {
        return print_shell_init(shell);
    }

    let repo_root = super::repo_root()?;
    let (worktrees, _) = super::load_enriched(&repo_root)?;

    let candidates: Vec<_> = worktrees
        .into_iter()
        .filter(|wt| !wt.is_bare && !wt.is_detached)
        .collect();

    if candidates.is_empty() {
        return Err(GroveError::NoWorktrees);
    }

    let Some(query) = query else {
        return pick_interactively(candidates);
    };

    let matches = resolve::resolve(&candidates, query);
    match matches.len() {
        0 => Err(GroveError::NoMatch {
            query: query.to_string(),
        }),
        1 => {
            println!("{}", matches[0].path.display());
            Ok(0)
        }
        _ => {
            eprintln!("Multiple worktrees match {query:?}:");
            let filtered: Vec<_> = matches.into_iter().cloned().collect();
            pick_interactively(filtered)
        }
    }
}

/// Run the selector; cancellation prints nothing and succeeds.
fn pick_interactively(
    candidates: Vec<grove_core::worktree::Worktree>,
) -> Result<i32, GroveError> {
    match tui::run_selector(candidates)? {
        Some(wt) => {
            println!("{}", wt.path.display());
            Ok(0)
        }
        None => Ok(0),
    }
}

fn print_shell_init(shell: &str) -> Result<i32, GroveError> {
    match shell.to_lowercase().as_str() {
        "bash" | "zsh" => print!("{SHELL_INIT_BASH_ZSH}"),
        "fish" => print!("{SHELL_INIT_FISH}"),
        _ => {
            return Err(GroveError::UnsupportedShell {
                shell: shell.to_string(),
            });
        }
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_shell() {
        let err = print_shell_init("powershell").unwrap_err();
        assert!(matches!(err, GroveError::UnsupportedShell { .. }));
        assert_eq!(err.exit_code(), 6);
    }

    #[test]
    fn test_shell_init_scripts_reference_switch() {
        assert!(SHELL_INIT_BASH_ZSH.contains("grove switch"));
        assert!(SHELL_INIT_FISH.contains("grove switch"));
    }
}
