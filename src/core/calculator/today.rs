use crate::core::calculator::sessions::{Pairing, Session, pair_punches, span_ms};
use crate::core::calculator::{AggregateOptions, millis_to_hours};
use crate::models::punch::Punch;
use crate::utils::date::{day_start, next_day_start};
use chrono::{DateTime, TimeZone};

/// Hours worked during the local day containing `now`.
pub fn hours_today<Tz: TimeZone>(punches: &[Punch], now: &DateTime<Tz>, opts: &AggregateOptions) -> f64 {
    let pairing = pair_punches(punches, &now.timezone(), opts.dangling_in);
    hours_today_from(&pairing, now)
}

/// Same as [`hours_today`] for a pairing the caller already holds.
pub fn hours_today_from<Tz: TimeZone>(pairing: &Pairing<Tz>, now: &DateTime<Tz>) -> f64 {
    let window_start = day_start(&now.timezone(), now.date_naive());
    let window_end = next_day_start(now).unwrap_or_else(|| now.clone());

    let total: i64 = pairing
        .sessions_until(now)
        .iter()
        .map(|s| clipped_ms(s, &window_start, &window_end))
        .sum();

    // rounded once, not per session
    millis_to_hours(total)
}

/// Length of the part of `session` inside `[from, to)`; zero when disjoint.
fn clipped_ms<Tz: TimeZone>(session: &Session<Tz>, from: &DateTime<Tz>, to: &DateTime<Tz>) -> i64 {
    let start = std::cmp::max(&session.start, from);
    let end = std::cmp::min(&session.end, to);

    if start < end { span_ms(start, end) } else { 0 }
}
