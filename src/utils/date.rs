//! Local calendar helpers: day boundaries, Sunday-start weeks, date ranges.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};

/// First instant of `date` in `tz`.
///
/// An ambiguous midnight resolves to the earliest instant; a midnight skipped
/// by a DST jump resolves to the first valid local time of that day.
pub fn day_start<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);

    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt;
    }

    (1..=96)
        .find_map(|q| {
            tz.from_local_datetime(&(midnight + Duration::minutes(15 * q)))
                .earliest()
        })
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

/// Start of the local day following the one `instant` falls on.
pub fn next_day_start<Tz: TimeZone>(instant: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let next = instant.date_naive().succ_opt()?;
    Some(day_start(&instant.timezone(), next))
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Every date from `first` to `last`, both inclusive.
pub fn days_between(first: NaiveDate, last: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = first;

    while d <= last {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
