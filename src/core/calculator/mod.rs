//! Punch-to-duration aggregation.
//!
//! Every function here is pure: it takes the punch set and the evaluation
//! instant `now`, whose time zone defines "local" day and week boundaries.
//! Nothing is cached between calls.

pub mod daily;
pub mod sessions;
pub mod today;
pub mod weekly;

use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// What to do with an IN that arrives while another IN is still open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DanglingInPolicy {
    /// The newer IN replaces the open one; the older IN is discarded.
    #[default]
    Replace,
    /// The open IN is kept; the newer IN is discarded.
    KeepFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    pub dangling_in: DanglingInPolicy,
    /// Split sessions at Sunday midnight when building weekly totals.
    pub split_weeks: bool,
}

/// Milliseconds to hours, rounded to two decimals.
pub fn millis_to_hours(ms: i64) -> f64 {
    ((ms as f64 / MILLIS_PER_HOUR) * 100.0).round() / 100.0
}
