//! Report assembly: weekly totals, daily totals and the detailed punch
//! history, rendered as plain text in that fixed order.

use crate::core::calculator::sessions::resolve;
use crate::core::calculator::AggregateOptions;
use crate::core::logic::Core;
use crate::models::buckets::{DayBucket, WeekBucket};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use crate::utils::formatting::{checked_time_format, day_label, format_hours, week_label};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::Write;

pub const WEEKLY_TITLE: &str = "Weekly Totals";
pub const DAILY_TITLE: &str = "Daily Totals";
pub const HISTORY_TITLE: &str = "Detailed Punch History";

/// Punches of one local calendar day, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryDay {
    pub date: NaiveDate,
    pub punches: Vec<(NaiveTime, PunchType)>,
}

#[derive(Debug, Clone)]
pub struct Report {
    /// Local wall-clock time of assembly.
    pub generated_at: NaiveDateTime,
    pub hours_today: f64,
    pub weekly: Vec<WeekBucket>,
    pub daily: Vec<DayBucket>,
    pub history: Vec<HistoryDay>,
    /// Raw timestamps left out of every section.
    pub skipped: Vec<String>,
    pub time_format: String,
}

pub struct ReportLogic;

impl ReportLogic {
    pub fn assemble<Tz: TimeZone>(
        punches: &[Punch],
        now: &DateTime<Tz>,
        opts: &AggregateOptions,
        time_format: &str,
    ) -> Report {
        let summary = Core::summarize(punches, now, opts);

        Report {
            generated_at: now.naive_local(),
            hours_today: summary.hours_today,
            weekly: summary.weekly,
            daily: summary.daily,
            history: build_history(punches, &now.timezone()),
            skipped: summary.invalid,
            time_format: checked_time_format(time_format).to_string(),
        }
    }
}

/// Group punches by local day, oldest day first.
pub fn build_history<Tz: TimeZone>(punches: &[Punch], tz: &Tz) -> Vec<HistoryDay> {
    let (timeline, _) = resolve(punches, tz);
    let mut days: Vec<HistoryDay> = Vec::new();

    for (instant, kind) in timeline {
        let date = instant.date_naive();
        let entry = (instant.time(), kind);

        match days.last_mut() {
            Some(day) if day.date == date => day.punches.push(entry),
            _ => days.push(HistoryDay {
                date,
                punches: vec![entry],
            }),
        }
    }

    days
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.len()));
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.skipped.is_empty()
    }

    /// Plain-text body suitable for pasting into a message or e-mail.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "Time Clock Report");
        let _ = writeln!(out, "Generated {}", self.generated_at.format("%Y-%m-%d %H:%M"));
        let _ = writeln!(out, "Hours today: {}", format_hours(self.hours_today));
        out.push('\n');

        section(&mut out, WEEKLY_TITLE);
        if self.weekly.is_empty() {
            out.push_str("(no punches recorded)\n");
        }
        for w in &self.weekly {
            let _ = writeln!(out, "{}: {}", week_label(w.week_start), format_hours(w.hours));
        }
        out.push('\n');

        section(&mut out, DAILY_TITLE);
        if self.daily.is_empty() {
            out.push_str("(no punches recorded)\n");
        }
        for d in &self.daily {
            let _ = writeln!(out, "{}: {}", day_label(d.date), format_hours(d.hours));
        }
        out.push('\n');

        section(&mut out, HISTORY_TITLE);
        if self.history.is_empty() {
            out.push_str("(no punches recorded)\n");
        }
        for (i, day) in self.history.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}", day_label(day.date));
            for (time, kind) in &day.punches {
                let _ = writeln!(out, "  {}  {}", time.format(&self.time_format), kind);
            }
        }

        if !self.skipped.is_empty() {
            out.push('\n');
            let _ = writeln!(out, "Skipped punches (unreadable timestamp):");
            for raw in &self.skipped {
                let _ = writeln!(out, "  - {raw}");
            }
        }

        out
    }
}
