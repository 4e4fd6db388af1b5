use super::punch_type::PunchType;
use crate::errors::AppResult;
use crate::utils::time::{format_instant, parse_instant};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// A single clock event as stored: the raw ISO-8601 timestamp string
/// (also the record's key) and the punch direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Punch {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: PunchType,
}

impl Punch {
    pub fn new(timestamp: impl Into<String>, kind: PunchType) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind,
        }
    }

    /// Build a punch for an instant, using the canonical stored format
    /// (UTC, millisecond precision, `Z` suffix).
    pub fn at<Tz: TimeZone>(instant: &DateTime<Tz>, kind: PunchType) -> Self {
        Self::new(format_instant(instant), kind)
    }

    /// Resolve the stored timestamp in the given time zone.
    pub fn instant_in<Tz: TimeZone>(&self, tz: &Tz) -> AppResult<DateTime<Tz>> {
        parse_instant(&self.timestamp, tz)
    }
}
