//! Formatting utilities used for CLI and report outputs.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Human-readable hours: `0 hours`, `30 minutes`, `1 hour`, `2.5 hours`.
///
/// Values below one hour are shown as whole minutes; larger values keep the
/// decimal hours figure as computed.
pub fn format_hours(hours: f64) -> String {
    if hours <= 0.0 {
        return "0 hours".to_string();
    }

    if hours < 1.0 {
        // rounding can reach either end of the minute range
        return match (hours * 60.0).round() as i64 {
            0 => "0 hours".to_string(),
            60.. => "1 hour".to_string(),
            minutes => pluralize(minutes as f64, "minute"),
        };
    }

    pluralize(hours, "hour")
}

fn pluralize(value: f64, unit: &str) -> String {
    if value == 1.0 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Day header used by list and report output, e.g. `Mon 2024-01-01`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%a %Y-%m-%d").to_string()
}

pub fn week_label(week_start: NaiveDate) -> String {
    format!("Week of {}", week_start.format("%Y-%m-%d"))
}

/// `fmt` when it is a valid strftime pattern, otherwise `%H:%M`.
/// chrono panics while displaying an invalid pattern, so user-supplied
/// formats go through here first.
pub fn checked_time_format(fmt: &str) -> &str {
    let invalid = StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error));
    if invalid || fmt.is_empty() { "%H:%M" } else { fmt }
}
