//! Semantic color theme for plain (non-interactive) terminal output
//!
//! - `SUCCESS` => green - completed operations, clean status
//! - `WARNING` => yellow - dirty status, hook failures
//! - `FAIL` => red - errors, stale warnings
//! - `ACCENT` => cyan - branch names, highlighted values

use std::sync::LazyLock;

use owo_colors::Style;

/// Semantic color definitions for terminal output
pub struct SemanticColors {
    /// Green - completed operations, clean status
    pub success: Style,
    /// Yellow - dirty status, warnings
    pub warning: Style,
    /// Red - errors, stale warnings
    pub fail: Style,
    /// Cyan - branch names, highlighted values
    pub accent: Style,
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            fail: Style::new().red(),
            accent: Style::new().cyan(),
        }
    }
}

/// Global default theme
pub static COLORS: LazyLock<SemanticColors> = LazyLock::new(SemanticColors::default);
