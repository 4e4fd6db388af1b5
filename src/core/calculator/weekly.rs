use crate::core::calculator::daily::split_by_day;
use crate::core::calculator::sessions::{Resolved, Session, pair_resolved, resolve, span_ms};
use crate::core::calculator::{AggregateOptions, millis_to_hours};
use crate::models::buckets::WeekBucket;
use crate::models::punch::Punch;
use crate::utils::date::week_start;
use chrono::{DateTime, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Per-week totals (Sunday-start, local), newest week first.
///
/// Only weeks holding at least one punch are listed. By default each week's
/// punches are paired on their own, so a session crossing Sunday midnight is
/// lost to both weeks; `split_weeks` switches to exact splitting.
pub fn weekly_totals<Tz: TimeZone>(punches: &[Punch], now: &DateTime<Tz>, opts: &AggregateOptions) -> Vec<WeekBucket> {
    let (timeline, _) = resolve(punches, &now.timezone());
    let global = pair_resolved(&timeline, opts.dangling_in);

    let mut groups: BTreeMap<NaiveDate, Vec<Resolved<Tz>>> = BTreeMap::new();
    for entry in &timeline {
        groups
            .entry(week_start(entry.0.date_naive()))
            .or_default()
            .push(entry.clone());
    }

    let mut by_week: BTreeMap<NaiveDate, i64> = groups.keys().map(|w| (*w, 0)).collect();

    if opts.split_weeks {
        for session in global.sessions_until(now) {
            for (date, ms) in split_by_day(&session.start, &session.end) {
                *by_week.entry(week_start(date)).or_insert(0) += ms;
            }
        }
    } else {
        for (week, group) in &groups {
            let pairing = pair_resolved(group, opts.dangling_in);
            let mut ms: i64 = pairing.closed.iter().map(Session::duration_ms).sum();

            // a trailing IN only runs until now when it is the session still open overall
            if let (Some(open), Some(global_open)) = (&pairing.open, &global.open)
                && open == global_open
                && now > open
            {
                ms += span_ms(open, now);
            }

            *by_week.entry(*week).or_insert(0) += ms;
        }
    }

    by_week
        .into_iter()
        .rev()
        .map(|(week_start, ms)| WeekBucket {
            week_start,
            hours: millis_to_hours(ms),
        })
        .collect()
}
