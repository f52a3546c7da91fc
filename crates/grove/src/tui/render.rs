//! Pure frame rendering for the interactive views
//!
//! Each view function maps session state plus an immutable [`Theme`] to a
//! frame string, so rendering stays testable without a terminal.

use console::Style;

use grove_core::session::{Mode, Session};
use grove_core::selector::Selector;
use grove_core::worktree::{Tag, Worktree};

/// Shared presentation styles, passed into every render function.
pub struct Theme {
    pub title: Style,
    pub selected: Style,
    pub current: Style,
    pub dim: Style,
    pub dirty: Style,
    pub merged: Style,
    pub stale: Style,
    pub check: Style,
    pub help: Style,
    pub confirm_yes: Style,
    pub confirm_no: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::new().bold().white().on_magenta(),
            selected: Style::new().magenta(),
            current: Style::new().green(),
            dim: Style::new().dim(),
            dirty: Style::new().yellow(),
            merged: Style::new().green(),
            stale: Style::new().red(),
            check: Style::new().magenta(),
            help: Style::new().dim(),
            confirm_yes: Style::new().bold().red(),
            confirm_no: Style::new().bold().green(),
        }
    }
}

/// Render the tag list for a worktree: `[current, 2 modified, merged, ↑1]`.
pub fn render_tags(wt: &Worktree, theme: &Theme) -> String {
    let tags = wt.tags();
    if tags.is_empty() {
        return String::new();
    }
    let rendered: Vec<String> = tags
        .iter()
        .map(|tag| match tag {
            Tag::Current => theme.current.apply_to("current").to_string(),
            Tag::Dirty(text) => theme.dirty.apply_to(text).to_string(),
            Tag::Merged => theme.merged.apply_to("merged").to_string(),
            Tag::Sync(text) => theme.dim.apply_to(text).to_string(),
            Tag::Stale(days) => theme.stale.apply_to(format!("{days}d stale")).to_string(),
        })
        .collect();
    format!(
        "{}{}{}",
        theme.dim.apply_to("["),
        rendered.join(&theme.dim.apply_to(", ").to_string()),
        theme.dim.apply_to("]")
    )
}

/// Dispatch to the view for the session's current mode.
pub fn view(session: &Session, theme: &Theme) -> String {
    match session.mode {
        Mode::List => view_list(session, theme),
        Mode::Confirm => view_confirm(session, theme),
        Mode::Done => view_done(session, theme),
    }
}

fn view_list(session: &Session, theme: &Theme) -> String {
    let mut b = String::new();

    b.push_str(&theme.title.apply_to(" Git Worktrees ").to_string());
    b.push_str("\n\n");

    for (i, item) in session.items.iter().enumerate() {
        let wt = &item.worktree;
        let cursor = if i == session.cursor { "▸ " } else { "  " };

        let check = if wt.is_current {
            theme.current.apply_to("◆").to_string()
        } else if item.checked {
            theme.check.apply_to("●").to_string()
        } else {
            "○".to_string()
        };

        let name = wt.display_name();
        let branch = if i == session.cursor {
            theme.selected.apply_to(&name).to_string()
        } else if wt.is_current {
            theme.current.apply_to(&name).to_string()
        } else {
            name.clone()
        };

        b.push_str(&format!("{cursor}{check} {branch} {}\n", render_tags(wt, theme)));

        if i == session.cursor {
            b.push_str(
                &theme
                    .dim
                    .apply_to(format!("     {}", wt.path.display()))
                    .to_string(),
            );
            b.push('\n');
        }
    }

    b.push('\n');
    let selected = session.checked_count();
    if selected > 0 {
        b.push_str(&format!("  {selected} selected  "));
    }
    b.push_str(
        &theme
            .help
            .apply_to("↑↓/jk move  space select  a merged  n none  d delete  q quit")
            .to_string(),
    );
    b.push('\n');

    b
}

fn view_confirm(session: &Session, theme: &Theme) -> String {
    let mut b = String::new();

    b.push_str(&theme.title.apply_to(" Confirm Removal ").to_string());
    b.push_str("\n\n  Remove the following worktrees?\n\n");

    for item in session.items.iter().filter(|it| it.checked) {
        b.push_str(&format!(
            "    {} {}\n",
            theme.check.apply_to("●"),
            item.worktree.display_name()
        ));
    }

    b.push('\n');
    let (no, yes) = if session.confirm_yes {
        (
            theme.dim.apply_to("  No ").to_string(),
            theme.confirm_yes.apply_to("▸ Yes ").to_string(),
        )
    } else {
        (
            theme.confirm_no.apply_to("▸ No ").to_string(),
            theme.dim.apply_to("  Yes ").to_string(),
        )
    };
    b.push_str(&format!("  {no}  {yes}\n\n"));
    b.push_str(
        &theme
            .help
            .apply_to("  ←→/hl switch  enter confirm  y yes  n no  esc back")
            .to_string(),
    );
    b.push('\n');

    b
}

fn view_done(session: &Session, theme: &Theme) -> String {
    let mut b = String::new();

    b.push_str(&theme.title.apply_to(" Cleanup Complete ").to_string());
    b.push_str("\n\n");

    for name in &session.removed {
        b.push_str(&format!("  {} {name}\n", theme.merged.apply_to("✓")));
    }
    for error in &session.errors {
        b.push_str(&format!("  {} {error}\n", theme.stale.apply_to("✗")));
    }

    b.push_str(&format!(
        "\n  Removed {} worktree(s).\n",
        session.removed.len()
    ));
    b.push_str(&theme.help.apply_to("\n  Press any key to exit.").to_string());
    b.push('\n');

    b
}

/// Render the single-select switch view.
pub fn view_selector(selector: &Selector, theme: &Theme) -> String {
    let mut b = String::new();

    b.push_str(&theme.title.apply_to(" Switch Worktree ").to_string());
    b.push_str("\n\n");

    for (i, wt) in selector.items.iter().enumerate() {
        let cursor = if i == selector.cursor { "▸ " } else { "  " };

        let name = wt.display_name();
        let branch = if i == selector.cursor {
            theme.selected.apply_to(&name).to_string()
        } else if wt.is_current {
            theme.current.apply_to(&name).to_string()
        } else {
            name.clone()
        };

        b.push_str(&format!("{cursor}{branch} {}\n", render_tags(wt, theme)));

        if i == selector.cursor {
            b.push_str(
                &theme
                    .dim
                    .apply_to(format!("    {}", wt.path.display()))
                    .to_string(),
            );
            b.push('\n');
        }
    }

    b.push('\n');
    b.push_str(
        &theme
            .help
            .apply_to("↑↓/jk move  enter select  q/esc cancel")
            .to_string(),
    );
    b.push('\n');

    b
}
