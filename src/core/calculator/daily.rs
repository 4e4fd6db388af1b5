use crate::core::calculator::sessions::{pair_resolved, resolve, span_ms};
use crate::core::calculator::{AggregateOptions, millis_to_hours};
use crate::models::buckets::DayBucket;
use crate::models::punch::Punch;
use crate::utils::date::{days_between, next_day_start};
use chrono::{DateTime, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Per-day totals over the full punch history, newest day first.
///
/// The range runs from the earliest punch's day to the latest punch's day
/// (or today while a session is open); days without work are reported as 0.
pub fn daily_totals<Tz: TimeZone>(punches: &[Punch], now: &DateTime<Tz>, opts: &AggregateOptions) -> Vec<DayBucket> {
    let (timeline, _) = resolve(punches, &now.timezone());

    let (Some(first), Some(last)) = (timeline.first(), timeline.last()) else {
        return Vec::new();
    };
    let mut first_day = first.0.date_naive();
    let mut last_day = last.0.date_naive();

    let pairing = pair_resolved(&timeline, opts.dangling_in);
    if pairing.is_clocked_in() {
        last_day = last_day.max(now.date_naive());
    }

    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for session in pairing.sessions_until(now) {
        for (date, ms) in split_by_day(&session.start, &session.end) {
            *by_day.entry(date).or_insert(0) += ms;
        }
    }

    if let Some((&d, _)) = by_day.first_key_value() {
        first_day = first_day.min(d);
    }
    if let Some((&d, _)) = by_day.last_key_value() {
        last_day = last_day.max(d);
    }

    days_between(first_day, last_day)
        .into_iter()
        .rev()
        .map(|date| DayBucket {
            date,
            hours: millis_to_hours(by_day.get(&date).copied().unwrap_or(0)),
        })
        .collect()
}

/// Cut `[start, end)` at every local midnight.
///
/// Returns `(date, milliseconds)` for each non-empty day segment. The cursor
/// moves forward by one calendar day per step, so the walk always ends.
pub(crate) fn split_by_day<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> Vec<(NaiveDate, i64)> {
    let mut out = Vec::new();
    let mut cursor = start.clone();

    while cursor < *end {
        let date = cursor.date_naive();

        let Some(next) = next_day_start(&cursor).filter(|n| *n > cursor) else {
            out.push((date, span_ms(&cursor, end)));
            break;
        };

        let segment_end = std::cmp::min(&next, end);
        let ms = span_ms(&cursor, segment_end);
        if ms > 0 {
            out.push((date, ms));
        }

        cursor = next;
    }

    out
}
