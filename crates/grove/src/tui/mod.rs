//! Interactive terminal front-end
//!
//! A synchronous read-render loop over the core state machines: draw the
//! current frame, block on the next key, decode it into a semantic event,
//! apply it. The browser owns stdout behind an alternate screen; the switch
//! selector renders on stderr so stdout stays clean for the chosen path.

mod render;

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use grove_core::error::GroveError;
use grove_core::selector::{Selector, SelectorEvent, SelectorOutcome};
use grove_core::session::{Event, Mode, RemoveWorktrees, Session, Signal};
use grove_core::worktree::Worktree;

pub use render::Theme;

/// Run the multi-select removal browser to completion.
pub fn run_browser(
    session: &mut Session,
    remover: &mut dyn RemoveWorktrees,
) -> Result<(), GroveError> {
    let theme = Theme::default();
    let mut out = io::stdout();

    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;
    let result = browser_loop(session, remover, &theme, &mut out);
    let _ = execute!(out, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    result
}

fn browser_loop(
    session: &mut Session,
    remover: &mut dyn RemoveWorktrees,
    theme: &Theme,
    out: &mut impl Write,
) -> Result<(), GroveError> {
    loop {
        draw(out, &render::view(session, theme))?;
        let Some(key) = next_key()? else {
            continue;
        };
        if let Some(ev) = decode_browser_key(session.mode, key) {
            if session.apply(ev, remover) == Signal::Quit {
                return Ok(());
            }
        }
    }
}

/// Run the single-select switch selector, returning the chosen worktree.
///
/// Renders on stderr; `None` means the user cancelled.
pub fn run_selector(items: Vec<Worktree>) -> Result<Option<Worktree>, GroveError> {
    let theme = Theme::default();
    let mut selector = Selector::new(items);
    let mut out = io::stderr();

    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;
    let result = selector_loop(&mut selector, &theme, &mut out);
    let _ = execute!(out, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();

    let picked = result?;
    Ok(picked.map(|i| selector.items.swap_remove(i)))
}

fn selector_loop(
    selector: &mut Selector,
    theme: &Theme,
    out: &mut impl Write,
) -> Result<Option<usize>, GroveError> {
    loop {
        draw(out, &render::view_selector(selector, theme))?;
        let Some(key) = next_key()? else {
            continue;
        };
        if let Some(ev) = decode_selector_key(key) {
            match selector.apply(ev) {
                SelectorOutcome::Continue => {}
                SelectorOutcome::Picked(index) => return Ok(Some(index)),
                SelectorOutcome::Cancelled => return Ok(None),
            }
        }
    }
}

/// Block until the next key press, skipping resize and release events.
fn next_key() -> Result<Option<KeyEvent>, GroveError> {
    match event::read().map_err(io::Error::from)? {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Paint a frame from the top-left. Raw mode needs explicit `\r\n`.
fn draw(out: &mut impl Write, frame: &str) -> Result<(), GroveError> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All)).map_err(io::Error::from)?;
    for line in frame.lines() {
        queue!(out, Print(line), Print("\r\n")).map_err(io::Error::from)?;
    }
    out.flush().map_err(GroveError::from)?;
    Ok(())
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a key press to a semantic session event for the given mode.
fn decode_browser_key(mode: Mode, key: KeyEvent) -> Option<Event> {
    if is_ctrl_c(key) {
        return Some(Event::Cancel);
    }
    match mode {
        Mode::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Event::Cancel),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::CursorDown),
            KeyCode::Char(' ') | KeyCode::Char('x') => Some(Event::Toggle),
            KeyCode::Char('a') => Some(Event::SelectMerged),
            KeyCode::Char('n') => Some(Event::DeselectAll),
            KeyCode::Char('d') | KeyCode::Enter => Some(Event::RequestRemoval),
            _ => None,
        },
        Mode::Confirm => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Event::Cancel),
            KeyCode::Left
            | KeyCode::Char('h')
            | KeyCode::Right
            | KeyCode::Char('l')
            | KeyCode::Tab => Some(Event::ToggleConfirm),
            KeyCode::Char('y') => Some(Event::Yes),
            KeyCode::Char('n') => Some(Event::No),
            KeyCode::Enter => Some(Event::Submit),
            _ => None,
        },
        // Any key leaves the report.
        Mode::Done => Some(Event::Cancel),
    }
}

/// Map a key press to a selector event.
fn decode_selector_key(key: KeyEvent) -> Option<SelectorEvent> {
    if is_ctrl_c(key) {
        return Some(SelectorEvent::Cancel);
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(SelectorEvent::Cancel),
        KeyCode::Up | KeyCode::Char('k') => Some(SelectorEvent::CursorUp),
        KeyCode::Down | KeyCode::Char('j') => Some(SelectorEvent::CursorDown),
        KeyCode::Enter => Some(SelectorEvent::Pick),
        _ => None,
    }
}
