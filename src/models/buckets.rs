use chrono::NaiveDate;
use serde::Serialize;

/// Hours attributed to one local calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub hours: f64,
}

/// Hours attributed to one Sunday-start local week.
/// `week_start` is the Sunday; the week begins at its local midnight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub hours: f64,
}
