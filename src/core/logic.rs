use crate::core::calculator::daily::daily_totals;
use crate::core::calculator::sessions::pair_punches;
use crate::core::calculator::today::hours_today_from;
use crate::core::calculator::weekly::weekly_totals;
use crate::core::calculator::AggregateOptions;
use crate::models::buckets::{DayBucket, WeekBucket};
use crate::models::punch::Punch;
use chrono::{DateTime, TimeZone};
use tracing::warn;

/// Snapshot of every derived figure at one evaluation instant.
#[derive(Debug, Clone)]
pub struct Summary<Tz: TimeZone> {
    pub open_since: Option<DateTime<Tz>>,
    pub hours_today: f64,
    pub daily: Vec<DayBucket>,
    pub weekly: Vec<WeekBucket>,
    /// Stored timestamps that could not be parsed.
    pub invalid: Vec<String>,
}

impl<Tz: TimeZone> Summary<Tz> {
    pub fn is_clocked_in(&self) -> bool {
        self.open_since.is_some()
    }
}

pub struct Core;

impl Core {
    pub fn summarize<Tz: TimeZone>(punches: &[Punch], now: &DateTime<Tz>, opts: &AggregateOptions) -> Summary<Tz> {
        let pairing = pair_punches(punches, &now.timezone(), opts.dangling_in);

        for raw in &pairing.invalid {
            warn!(timestamp = %raw, "skipping punch with unreadable timestamp");
        }

        Summary {
            open_since: pairing.open.clone(),
            hours_today: hours_today_from(&pairing, now),
            daily: daily_totals(punches, now, opts),
            weekly: weekly_totals(punches, now, opts),
            invalid: pairing.invalid,
        }
    }
}
