//! Detail overlay component renderer.
//!
//! Paints a centered box over the grid with the focused book's full
//! information: a gradient header band (same cover color as the card),
//! status and category badges, the optional progress block, every tag and
//! the complete notes text.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::{cover_gradient, Theme};
use crate::ui::viewmodel::ModalProjection;

const MIN_WIDTH: usize = 30;
const MAX_WIDTH: usize = 64;

/// Renders the detail overlay centered in the terminal.
pub fn render_modal(modal: &ModalProjection, theme: &Theme, rows: usize, cols: usize) {
    let width = cols.saturating_sub(8).clamp(MIN_WIDTH, MAX_WIDTH);
    let inner = width - 4;
    let left = (cols.saturating_sub(width)) / 2 + 1;

    let notes_lines = wrap(&modal.notes, inner);
    // Header band (3) + badges (1) + progress (0 or 2) + tags (1) + blank
    // (1) + notes + hint (1), plus the top and bottom borders.
    let progress_rows = if modal.progress.is_some() { 2 } else { 0 };
    let body_rows = 3 + 1 + progress_rows + 1 + 1 + notes_lines.len().min(6) + 1;
    let height = body_rows + 2;
    let top = (rows.saturating_sub(height)) / 2 + 1;

    let border_fg = Theme::fg(&theme.colors.border);
    let reset = Theme::reset();

    print!("{border_fg}");
    position_cursor(top, left);
    print!("╭{}╮", "─".repeat(width - 2));
    for i in 1..height - 1 {
        position_cursor(top + i, left);
        print!("│{}│", " ".repeat(width - 2));
    }
    position_cursor(top + height - 1, left);
    print!("╰{}╯{reset}", "─".repeat(width - 2));

    // Gradient header band with title and author.
    let (grad_start, grad_end) = cover_gradient(modal.cover);
    let band_left = left + 1;
    let band_width = width - 2;
    for band_row in 0..3 {
        position_cursor(top + 1 + band_row, band_left);
        let text = match band_row {
            1 => helpers::truncate(&modal.title, band_width.saturating_sub(4)),
            2 => helpers::truncate(&modal.author, band_width.saturating_sub(4)),
            _ => String::new(),
        };
        let chars: Vec<char> = text.chars().collect();
        for col in 0..band_width {
            let t = col as f32 / (band_width - 1).max(1) as f32;
            print!("{}", Theme::bg(&helpers::blend_hex(grad_start, grad_end, t)));
            if band_row == 1 {
                print!("{}", Theme::bold());
            }
            print!("{}", Theme::fg("#ffffff"));
            let ch = if col >= 2 { chars.get(col - 2).copied() } else { None };
            print!("{}{reset}", ch.unwrap_or(' '));
        }
    }

    let mut row = top + 4;
    let text_left = left + 2;

    // Status and category badges.
    position_cursor(row, text_left);
    print!(
        "{}{} {} {}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.badge_fg),
        modal.status_label,
        helpers::truncate(&modal.category, inner.saturating_sub(modal.status_label.chars().count() + 2)),
        reset
    );
    row += 1;

    if let Some(progress) = &modal.progress {
        position_cursor(row, text_left);
        print!(
            "{}Reading Progress  {} / {} pages ({}%){reset}",
            Theme::fg(&theme.colors.text_dim),
            progress.pages_read,
            progress.total_pages,
            progress.percent
        );
        position_cursor(row + 1, text_left);
        print!(
            "{}{}{reset}",
            Theme::fg(&theme.colors.progress_fill),
            helpers::progress_bar(progress.fill_ratio, inner)
        );
        row += 2;
    }

    // All tags, unlike the card's two.
    position_cursor(row, text_left);
    let mut used = 0;
    for tag in &modal.tags {
        let chip = format!("#{tag} ");
        let chip_len = chip.chars().count();
        if used + chip_len > inner {
            break;
        }
        print!("{}{chip}{reset}", Theme::fg(&theme.colors.tag_fg));
        used += chip_len;
    }
    row += 2;

    for line in notes_lines.iter().take(6) {
        position_cursor(row, text_left);
        print!("{}{line}{reset}", Theme::fg(&theme.colors.text_normal));
        row += 1;
    }

    position_cursor(row, text_left);
    print!(
        "{}{}esc/q/enter: close{reset}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim)
    );
}

/// Greedy word wrap on character widths.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let word = helpers::truncate(word, width);
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
