//! Time utilities: parsing stored ISO-8601 instants, parsing user-supplied
//! `--at` values and producing the canonical stored format.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

/// Offset-less layouts accepted for stored timestamps; read as local wall-clock.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Layouts accepted from the command line in addition to RFC 3339.
const USER_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a stored punch timestamp and express it in `tz`.
pub fn parse_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> AppResult<DateTime<Tz>> {
    let s = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(tz));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt)
            && let Some(dt) = tz.from_local_datetime(&naive).earliest()
        {
            return Ok(dt);
        }
    }

    Err(AppError::InvalidTimestamp(raw.to_string()))
}

/// Canonical stored form: UTC, millisecond precision, `Z` suffix.
pub fn format_instant<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Resolve a `--at` argument relative to `now`.
///
/// Accepts `HH:MM` (today), `YYYY-MM-DD HH:MM[:SS]` (local) or any RFC 3339
/// instant.
pub fn parse_user_instant<Tz: TimeZone>(input: &str, now: &DateTime<Tz>) -> AppResult<DateTime<Tz>> {
    let s = input.trim();
    let tz = now.timezone();

    if let Some(t) = parse_time(s) {
        let naive = now.date_naive().and_time(t);
        return tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| AppError::InvalidInput(format!("'{s}' does not exist in local time")));
    }

    for fmt in USER_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
                AppError::InvalidInput(format!("'{s}' does not exist in local time"))
            });
        }
    }

    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&tz))
        .map_err(|_| {
            AppError::InvalidInput(format!(
                "Invalid time '{s}'. Use HH:MM, 'YYYY-MM-DD HH:MM' or an RFC 3339 timestamp."
            ))
        })
}
