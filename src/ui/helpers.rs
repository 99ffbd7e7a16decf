//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning,
//! width-safe truncation, progress bars and the color math behind cover
//! band gradients. Everything here is UTF-8 safe (character counts, not
//! byte counts).

/// Positions the cursor at a 1-indexed row and column using
/// `\u{1b}[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates text to at most `width` characters, appending an ellipsis when
/// anything was cut.
///
/// A width of zero or one leaves no room for the ellipsis; the text is
/// simply cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return text.to_string();
    }
    if width <= 1 {
        return chars.into_iter().take(width).collect();
    }
    let mut out: String = chars.into_iter().take(width - 1).collect();
    out.push('…');
    out
}

/// Builds a progress bar of `width` cells from a fill ratio in `0.0..=1.0`.
///
/// Filled cells are `█`, the remainder `░`. The caller is responsible for
/// clamping; ratios above 1.0 are treated as full here as a last resort.
#[must_use]
pub fn progress_bar(ratio: f32, width: usize) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = ((clamped * width as f32).round() as usize).min(width);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// Linearly interpolates between two hex colors.
///
/// `t` is clamped to `0.0..=1.0`; 0 yields `start`, 1 yields `end`. Used to
/// sweep cover band gradients across the terminal width.
#[must_use]
pub fn blend_hex(start: &str, end: &str, t: f32) -> String {
    fn parse(hex: &str) -> (f32, f32, f32) {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return (255.0, 255.0, 255.0);
        }
        (
            f32::from(u8::from_str_radix(&hex[0..2], 16).unwrap_or(255)),
            f32::from(u8::from_str_radix(&hex[2..4], 16).unwrap_or(255)),
            f32::from(u8::from_str_radix(&hex[4..6], 16).unwrap_or(255)),
        )
    }

    let t = t.clamp(0.0, 1.0);
    let (r1, g1, b1) = parse(start);
    let (r2, g2, b2) = parse(end);
    let r = (r1 + (r2 - r1) * t).round() as u8;
    let g = (g1 + (g2 - g1) * t).round() as u8;
    let b = (b1 + (b2 - b1) * t).round() as u8;
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_based() {
        assert_eq!(truncate("héllo", 10), "héllo");
        assert_eq!(truncate("héllo", 4), "hél…");
        assert_eq!(truncate("héllo", 1), "h");
        assert_eq!(truncate("héllo", 0), "");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "░░░░");
        assert_eq!(progress_bar(0.5, 4), "██░░");
        assert_eq!(progress_bar(1.0, 4), "████");
        // Overshoot saturates instead of overflowing the width.
        assert_eq!(progress_bar(1.2, 4), "████");
    }

    #[test]
    fn blend_hex_endpoints_and_midpoint() {
        assert_eq!(blend_hex("#000000", "#ffffff", 0.0), "#000000");
        assert_eq!(blend_hex("#000000", "#ffffff", 1.0), "#ffffff");
        assert_eq!(blend_hex("#000000", "#fefefe", 0.5), "#7f7f7f");
    }
}
