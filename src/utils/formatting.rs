//! Formatting utilities used for the CLI output.

use unicode_width::UnicodeWidthStr;

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Center plain (uncolored) text in `width` columns.
pub fn pad_center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Wrap `text` to `width` columns and center every line.
pub fn wrap_centered(text: &str, width: usize) -> Vec<String> {
    textwrap::wrap(text, width)
        .iter()
        .map(|line| pad_center(line, width))
        .collect()
}

/// `[██████░░░░░░]` for a ratio in `[0, 1]`.
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(1.0, 4), "[████]");
        assert_eq!(progress_bar(7.0, 4), "[████]");
    }

    #[test]
    fn centering_uses_display_width() {
        assert_eq!(pad_center("ab", 6), "  ab  ");
        assert_eq!(pad_center("日本", 6), " 日本 ");
        assert_eq!(pad_center("too long", 3), "too long");
    }
}
