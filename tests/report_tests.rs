use chrono::{NaiveDate, NaiveTime, Utc};
use punchclock::core::calculator::AggregateOptions;
use punchclock::core::report::{DAILY_TITLE, HISTORY_TITLE, HistoryDay, ReportLogic, WEEKLY_TITLE, build_history};
use punchclock::models::punch_type::PunchType;

mod common;
use common::{punch_in, punch_out, utc};

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn sections_come_in_fixed_order() {
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T17:00:00Z"),
    ];
    let now = utc("2024-01-01T20:00:00Z");

    let report = ReportLogic::assemble(&punches, &now, &AggregateOptions::default(), "%H:%M");
    let text = report.render_text();

    let weekly = text.find(WEEKLY_TITLE).expect("weekly section");
    let daily = text.find(DAILY_TITLE).expect("daily section");
    let history = text.find(HISTORY_TITLE).expect("history section");
    assert!(weekly < daily && daily < history);

    assert!(text.contains("Generated 2024-01-01 20:00"));
    assert!(text.contains("Hours today: 8 hours"));
    assert!(text.contains("Week of 2023-12-31: 8 hours"));
    assert!(text.contains("Mon 2024-01-01: 8 hours"));
    assert!(text.contains("  09:00  IN"));
    assert!(text.contains("  17:00  OUT"));
    assert!(!text.contains("Skipped punches"));
}

#[test]
fn history_groups_by_day_in_order() {
    let punches = vec![
        punch_out("2024-01-02T12:00:00Z"),
        punch_in("2024-01-01T09:00:00Z"),
        punch_in("2024-01-02T08:00:00Z"),
        punch_out("2024-01-01T17:30:00Z"),
    ];

    let history = build_history(&punches, &Utc);

    assert_eq!(
        history,
        vec![
            HistoryDay {
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                punches: vec![(hm(9, 0), PunchType::In), (hm(17, 30), PunchType::Out)],
            },
            HistoryDay {
                date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                punches: vec![(hm(8, 0), PunchType::In), (hm(12, 0), PunchType::Out)],
            },
        ]
    );
}

#[test]
fn unreadable_punches_are_listed_as_skipped() {
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("yesterday-ish"),
    ];
    let now = utc("2024-01-01T10:00:00Z");

    let report = ReportLogic::assemble(&punches, &now, &AggregateOptions::default(), "%H:%M");
    assert_eq!(report.skipped, vec!["yesterday-ish".to_string()]);

    let text = report.render_text();
    assert!(text.contains("Skipped punches (unreadable timestamp):"));
    assert!(text.contains("  - yesterday-ish"));
    // the open session still counts
    assert!(text.contains("Hours today: 1 hour"));
}

#[test]
fn empty_report_has_every_section() {
    let now = utc("2024-01-01T10:00:00Z");
    let report = ReportLogic::assemble(&[], &now, &AggregateOptions::default(), "%H:%M");

    assert!(report.is_empty());
    let text = report.render_text();
    assert!(text.contains(WEEKLY_TITLE));
    assert!(text.contains(DAILY_TITLE));
    assert!(text.contains(HISTORY_TITLE));
    assert_eq!(text.matches("(no punches recorded)").count(), 3);
}

#[test]
fn bad_time_format_does_not_break_rendering() {
    let punches = vec![punch_in("2024-01-01T09:05:00Z")];
    let now = utc("2024-01-01T10:00:00Z");

    let report = ReportLogic::assemble(&punches, &now, &AggregateOptions::default(), "%Q");
    assert!(report.render_text().contains("  09:05  IN"));
}
