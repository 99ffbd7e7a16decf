//! Book grid component renderer.
//!
//! Renders the card list, one book per [`CARD_ROWS`]-row block: a gradient
//! cover band carrying the status badge and title, a line for author and
//! category, one for tags, one for progress or the notes preview, and a
//! blank separator.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::{cover_gradient, Theme};
use crate::ui::viewmodel::CardProjection;

/// Terminal rows one card occupies, separator included.
pub const CARD_ROWS: usize = 5;

/// Left margin reserved for the selection marker.
const MARGIN: usize = 2;

/// Renders all visible cards starting at the given row.
///
/// Returns the next available row position.
pub fn render_grid(row: usize, cards: &[CardProjection], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

/// Renders one card block.
fn render_card(row: usize, card: &CardProjection, theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(MARGIN + 1).max(10);
    let (grad_start, grad_end) = cover_gradient(card.cover);

    // Cover band: badge left, title after it, swept with the cover gradient.
    render_marker(row, card.is_selected, theme);
    position_cursor(row, MARGIN + 1);
    let badge = format!(" {} ", card.status_label);
    let title = helpers::truncate(&card.title, width.saturating_sub(badge.chars().count() + 2));
    let text = format!("{badge} {title}");
    let text_len = text.chars().count();
    for (col, ch) in text.chars().chain(std::iter::repeat(' ')).take(width).enumerate() {
        let t = col as f32 / (width - 1).max(1) as f32;
        print!("{}", Theme::bg(&helpers::blend_hex(grad_start, grad_end, t)));
        if col < badge.chars().count() {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.badge_fg));
        } else if col < text_len {
            print!("{}{}", Theme::bold(), Theme::fg("#ffffff"));
        }
        print!("{ch}{}", Theme::reset());
    }

    // Author and category.
    render_marker(row + 1, card.is_selected, theme);
    position_cursor(row + 1, MARGIN + 1);
    let author = helpers::truncate(&card.author, width / 2);
    print!(
        "{}{author}{}",
        Theme::fg(&theme.colors.text_normal),
        Theme::reset()
    );
    let category = helpers::truncate(&card.category, width.saturating_sub(author.chars().count() + 3));
    print!(
        "{} · {category}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    );

    // Tags, the overflow chip, and the summary indicator.
    render_marker(row + 2, card.is_selected, theme);
    position_cursor(row + 2, MARGIN + 1);
    for tag in &card.tags {
        print!(
            "{}#{}{} ",
            Theme::fg(&theme.colors.tag_fg),
            helpers::truncate(tag, 18),
            Theme::reset()
        );
    }
    if let Some(more) = card.tag_overflow {
        print!(
            "{}+{more}{} ",
            Theme::fg(&theme.colors.tag_fg),
            Theme::reset()
        );
    }
    if card.summary_available {
        print!(
            "{}{}Summary available{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            Theme::reset()
        );
    }

    // Progress when being read, the notes preview otherwise.
    render_marker(row + 3, card.is_selected, theme);
    position_cursor(row + 3, MARGIN + 1);
    if let Some(progress) = &card.progress {
        let bar_width = width.saturating_sub(30).clamp(8, 24);
        print!(
            "{}{}{}{}",
            Theme::fg(&theme.colors.progress_fill),
            helpers::progress_bar(progress.fill_ratio, bar_width),
            Theme::reset(),
            Theme::fg(&theme.colors.text_dim)
        );
        print!(
            " {} / {} pages ({}%){}",
            progress.pages_read,
            progress.total_pages,
            progress.percent,
            Theme::reset()
        );
    } else if !card.notes_preview.is_empty() {
        print!(
            "{}{}{}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            helpers::truncate(&card.notes_preview, width),
            Theme::reset()
        );
    }

    row + CARD_ROWS
}

/// Paints the selection marker column for one card row.
fn render_marker(row: usize, is_selected: bool, theme: &Theme) {
    position_cursor(row, 1);
    if is_selected {
        print!(
            "{}▌{}",
            Theme::fg(&theme.colors.selection_bg),
            Theme::reset()
        );
    } else {
        print!(" ");
    }
}
