//! Empty, loading and failure screens.
//!
//! Three full-screen states that replace the grid: the loading indicator
//! shown while fetches are in flight, the fatal error screen, and the
//! message shown when the active filter matches nothing.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// User-facing message for a failed library load.
///
/// The diagnostic detail goes to the trace log only.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load library data. Please try again later.";

/// Renders the empty state message, centered below the toolbar.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, rows: usize, cols: usize) {
    centered_line(
        rows / 2,
        cols,
        &empty.message,
        &Theme::fg(&theme.colors.empty_state_fg),
    );
}

/// Renders the loading indicator shown while the catalog is fetched.
pub fn render_loading(theme: &Theme, rows: usize, cols: usize) {
    centered_line(
        rows / 2,
        cols,
        "Loading library…",
        &Theme::fg(&theme.colors.text_dim),
    );
}

/// Renders the fatal error screen.
pub fn render_load_failure(theme: &Theme, rows: usize, cols: usize) {
    centered_line(
        rows / 2,
        cols,
        LOAD_FAILURE_MESSAGE,
        &Theme::fg(&theme.colors.error_fg),
    );
}

fn centered_line(row: usize, cols: usize, message: &str, style: &str) {
    let len = message.chars().count();
    let padding = (cols.saturating_sub(len)) / 2;

    position_cursor(row.max(1), 1);
    print!("{style}");
    print!("{}", " ".repeat(padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
