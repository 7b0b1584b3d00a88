/// ANSI color helper utilities for terminal output.
use crate::models::badge::BadgeColor;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Badge style: the widget's tinted pills become foreground colors, and
/// the final tier gets a magenta background.
pub fn style_for_badge(color: BadgeColor) -> &'static str {
    match color {
        BadgeColor::Blue => "\x1b[1;34m",
        BadgeColor::Green => "\x1b[1;32m",
        BadgeColor::Purple => "\x1b[1;35m",
        BadgeColor::Indigo => "\x1b[1;94m",
        BadgeColor::Pink => "\x1b[1;95m",
        BadgeColor::Gradient => "\x1b[45;97;1m",
    }
}

pub fn paint_badge(label: &str, color: BadgeColor) -> String {
    format!("{} {} {}", style_for_badge(color), label, RESET)
}

/// Progress color: grey when empty, green once the ring is full.
pub fn color_for_progress(ratio: f64) -> &'static str {
    if ratio <= 0.0 {
        GREY
    } else if ratio >= 1.0 {
        GREEN
    } else {
        MAGENTA
    }
}
