//! Composable UI component renderers.
//!
//! Each component renders one part of the interface and returns the next
//! available row, so layouts compose by threading a row counter through.
//!
//! # Components
//!
//! - [`header`]: title bar with the aggregate counters
//! - [`filterbar`]: the status filter toolbar
//! - [`grid`]: the book card list
//! - [`modal`]: the detail overlay
//! - [`footer`]: keybinding hints
//! - [`empty`]: loading, failure and no-match screens

mod empty;
mod filterbar;
mod footer;
pub(crate) mod grid;
mod header;
mod modal;

pub use empty::{render_empty_state, render_load_failure, render_loading, LOAD_FAILURE_MESSAGE};
pub use modal::render_modal;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use filterbar::render_filter_bar;
use footer::render_footer;
use grid::render_grid;
use header::render_header;

/// Renders a horizontal separator line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the ready-phase layout.
///
/// ```text
/// [Header: title + stats]
/// [Filter toolbar]
/// [Border]
/// [Card grid or empty message]
/// [Footer]
/// ```
///
/// The detail overlay, when open, is painted afterwards by the caller so it
/// sits on top of the grid.
pub fn render_ready_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, rows, cols);
    } else {
        render_grid(current_row, &vm.cards, theme, cols);
    }

    render_footer(rows.saturating_sub(1).max(current_row), &vm.footer, theme, cols);
}
