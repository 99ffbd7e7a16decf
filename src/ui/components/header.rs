//! Header component renderer.
//!
//! Renders the title bar with the aggregate library counters right-aligned
//! on the same row.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header row: bold title on the left, stats on the right.
///
/// The stats segment reads `Total N · Reading N · Completed N · To Read N`
/// with the numbers in the stat accent color. Returns the next available
/// row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let stats = &header.stats;
    let segments = [
        ("Total", stats.total),
        ("Reading", stats.reading),
        ("Completed", stats.completed),
        ("To Read", stats.to_read),
    ];

    // Plain-text width of the stats block, for right alignment.
    let stats_len: usize = segments
        .iter()
        .map(|(label, count)| label.len() + 1 + count.to_string().len())
        .sum::<usize>()
        + (segments.len() - 1) * 3;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", header.title);

    let used = header.title.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(used + stats_len)));
    print!("{}", Theme::reset());

    for (i, (label, count)) in segments.iter().enumerate() {
        if i > 0 {
            print!("{} · {}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        }
        print!("{}{label} {}", Theme::fg(&theme.colors.text_dim), Theme::reset());
        print!(
            "{}{}{count}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.stat_fg),
            Theme::reset()
        );
    }

    row + 1
}
