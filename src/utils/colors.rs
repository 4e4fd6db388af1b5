//! ANSI colours for terminal listings.

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Zero-hour totals are greyed out so gap days stand out.
pub fn colorize_hours(text: &str, hours: f64) -> String {
    if hours <= 0.0 {
        format!("{GREY}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// IN in green, OUT in red.
pub fn colorize_in_out(text: &str, is_in: bool) -> String {
    let color = if is_in { GREEN } else { RED };
    format!("{color}{text}{RESET}")
}
