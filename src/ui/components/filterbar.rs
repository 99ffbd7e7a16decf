//! Filter toolbar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

/// Renders the filter toolbar at the specified row.
///
/// Each entry shows its hotkey, label and count, e.g. `[2] Reading (3)`.
/// The active entry is painted with the filter accent colors; the rest are
/// dimmed. Returns the next available row.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for (i, entry) in bar.entries.iter().enumerate() {
        if i > 0 {
            print!("  ");
            used += 2;
        }

        let text = format!("[{}] {} ({})", i + 1, entry.label, entry.count);
        if entry.is_active {
            print!(
                "{}{}{text}{}",
                Theme::fg(&theme.colors.filter_active_fg),
                Theme::bg(&theme.colors.filter_active_bg),
                Theme::reset()
            );
        } else {
            print!(
                "{}{text}{}",
                Theme::fg(&theme.colors.text_dim),
                Theme::reset()
            );
        }
        used += text.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
