use crate::models::punch::Punch;
use chrono::TimeZone;
use serde::Serialize;

/// Flat punch row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PunchExport {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Local date, empty when the timestamp is unreadable.
    pub date: String,
    /// Local time, empty when the timestamp is unreadable.
    pub time: String,
    pub valid: bool,
}

/// Rows in chronological order; unreadable punches go last, as stored.
pub(crate) fn punches_to_rows<Tz: TimeZone>(punches: &[Punch], tz: &Tz) -> Vec<PunchExport> {
    let mut dated = Vec::new();
    let mut invalid = Vec::new();

    for p in punches {
        match p.instant_in(tz) {
            Ok(instant) => dated.push((instant, p)),
            Err(_) => invalid.push(p),
        }
    }
    dated.sort_by(|a, b| a.0.cmp(&b.0));

    let mut rows: Vec<PunchExport> = dated
        .into_iter()
        .map(|(instant, p)| PunchExport {
            timestamp: p.timestamp.clone(),
            kind: p.kind.to_db_str().to_string(),
            date: instant.date_naive().format("%Y-%m-%d").to_string(),
            time: instant.time().format("%H:%M:%S").to_string(),
            valid: true,
        })
        .collect();

    rows.extend(invalid.into_iter().map(|p| PunchExport {
        timestamp: p.timestamp.clone(),
        kind: p.kind.to_db_str().to_string(),
        date: String::new(),
        time: String::new(),
        valid: false,
    }));

    rows
}
