use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use punchclock::core::calculator::daily::daily_totals;
use punchclock::core::calculator::sessions::pair_punches;
use punchclock::core::calculator::today::hours_today;
use punchclock::core::calculator::weekly::weekly_totals;
use punchclock::core::calculator::{AggregateOptions, DanglingInPolicy};
use punchclock::models::buckets::{DayBucket, WeekBucket};

mod common;
use common::{punch_in, punch_out, utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day(y: i32, m: u32, d: u32, hours: f64) -> DayBucket {
    DayBucket {
        date: date(y, m, d),
        hours,
    }
}

fn opts() -> AggregateOptions {
    AggregateOptions::default()
}

#[test]
fn single_shift_counts_today_and_one_day_bucket() {
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T17:00:00Z"),
    ];
    let now = utc("2024-01-01T20:00:00Z");

    assert_eq!(hours_today(&punches, &now, &opts()), 8.0);
    assert_eq!(daily_totals(&punches, &now, &opts()), vec![day(2024, 1, 1, 8.0)]);
}

#[test]
fn overnight_shift_is_split_at_midnight() {
    let punches = vec![
        punch_in("2024-01-01T22:00:00Z"),
        punch_out("2024-01-02T02:00:00Z"),
    ];
    let now = utc("2024-01-03T12:00:00Z");

    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        vec![day(2024, 1, 2, 2.0), day(2024, 1, 1, 2.0)]
    );
    assert_eq!(hours_today(&punches, &now, &opts()), 0.0);
}

#[test]
fn open_session_runs_until_now() {
    let now = utc("2024-03-10T12:00:00Z");
    let punches = vec![punch_in("2024-03-10T10:30:00Z")];

    assert_eq!(hours_today(&punches, &now, &opts()), 1.5);
    assert_eq!(daily_totals(&punches, &now, &opts()), vec![day(2024, 3, 10, 1.5)]);

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert!(pairing.is_clocked_in());
    assert!(pairing.closed.is_empty());
}

#[test]
fn open_session_started_yesterday_only_counts_today_part() {
    let now = utc("2024-03-10T00:30:00Z");
    let punches = vec![punch_in("2024-03-09T23:00:00Z")];

    assert_eq!(hours_today(&punches, &now, &opts()), 0.5);
    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        vec![day(2024, 3, 10, 0.5), day(2024, 3, 9, 1.0)]
    );
}

#[test]
fn open_session_over_several_days_fills_every_day() {
    let now = utc("2024-01-03T06:00:00Z");
    let punches = vec![
        punch_out("2024-01-01T08:00:00Z"),
        punch_in("2024-01-01T20:00:00Z"),
    ];

    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        vec![day(2024, 1, 3, 6.0), day(2024, 1, 2, 24.0), day(2024, 1, 1, 4.0)]
    );
    assert_eq!(hours_today(&punches, &now, &opts()), 6.0);
}

#[test]
fn earlier_out_is_orphaned_and_the_in_stays_open() {
    let now = utc("2024-01-01T20:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T10:00:00Z"),
        punch_out("2024-01-01T09:00:00Z"),
    ];

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert!(pairing.closed.is_empty());
    assert_eq!(pairing.orphan_outs, 1);
    assert_eq!(pairing.discarded_outs, 0);
    assert_eq!(pairing.open, Some(utc("2024-01-01T10:00:00Z")));

    // the hours are the open IN running until now, not the pair
    assert_eq!(hours_today(&punches, &now, &opts()), 10.0);
    assert_eq!(daily_totals(&punches, &now, &opts()), vec![day(2024, 1, 1, 10.0)]);
}

#[test]
fn orphan_out_then_replaced_in_leaves_only_the_later_pair() {
    let now = utc("2024-01-01T20:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T10:00:00Z"),
        punch_out("2024-01-01T09:00:00Z"),
        punch_in("2024-01-01T13:00:00Z"),
        punch_out("2024-01-01T14:00:00Z"),
    ];

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert_eq!(pairing.closed.len(), 1);
    assert_eq!(pairing.orphan_outs, 1);
    assert_eq!(pairing.discarded_ins, 1);
    assert!(pairing.open.is_none());

    assert_eq!(hours_today(&punches, &now, &opts()), 1.0);
}

#[test]
fn zero_length_pair_is_discarded_but_consumed() {
    let now = utc("2024-01-01T20:00:00Z");
    // same instant: stable sort keeps the IN first
    let punches = vec![
        punch_in("2024-01-01T10:00:00Z"),
        punch_out("2024-01-01T10:00:00.000Z"),
        punch_out("2024-01-01T11:00:00Z"),
        punch_in("2024-01-01T12:00:00Z"),
        punch_out("2024-01-01T13:00:00Z"),
    ];

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert_eq!(pairing.discarded_outs, 1);
    // the slot was cleared, so the 11:00 OUT closes nothing
    assert_eq!(pairing.orphan_outs, 1);
    assert_eq!(pairing.closed.len(), 1);
    assert_eq!(hours_today(&punches, &now, &opts()), 1.0);
}

#[test]
fn second_in_replaces_the_dangling_one() {
    let now = utc("2024-01-01T12:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_in("2024-01-01T10:00:00Z"),
    ];

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert_eq!(pairing.open, Some(utc("2024-01-01T10:00:00Z")));
    assert_eq!(pairing.discarded_ins, 1);
    assert_eq!(hours_today(&punches, &now, &opts()), 2.0);
}

#[test]
fn keep_first_policy_keeps_the_earliest_in() {
    let now = utc("2024-01-01T12:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_in("2024-01-01T10:00:00Z"),
    ];
    let keep_first = AggregateOptions {
        dangling_in: DanglingInPolicy::KeepFirst,
        ..AggregateOptions::default()
    };

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::KeepFirst);
    assert_eq!(pairing.open, Some(utc("2024-01-01T09:00:00Z")));
    assert_eq!(hours_today(&punches, &now, &keep_first), 3.0);
}

#[test]
fn storage_order_does_not_matter() {
    let now = utc("2024-01-05T00:00:00Z");
    let ordered = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T12:00:00Z"),
        punch_in("2024-01-02T09:00:00Z"),
        punch_out("2024-01-02T10:30:00Z"),
    ];
    let mut shuffled = ordered.clone();
    shuffled.reverse();
    shuffled.swap(0, 2);

    assert_eq!(
        daily_totals(&ordered, &now, &opts()),
        daily_totals(&shuffled, &now, &opts())
    );
}

#[test]
fn unreadable_timestamps_are_reported_and_excluded() {
    let now = utc("2024-01-01T20:00:00Z");
    let punches = vec![
        punch_in("not-a-timestamp"),
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T10:00:00Z"),
        punch_out("2024-13-45T99:00:00Z"),
    ];

    let pairing = pair_punches(&punches, &Utc, DanglingInPolicy::Replace);
    assert_eq!(
        pairing.invalid,
        vec!["not-a-timestamp".to_string(), "2024-13-45T99:00:00Z".to_string()]
    );
    assert_eq!(pairing.closed.len(), 1);
    assert_eq!(hours_today(&punches, &now, &opts()), 1.0);
    assert_eq!(daily_totals(&punches, &now, &opts()), vec![day(2024, 1, 1, 1.0)]);
}

#[test]
fn gap_days_are_filled_with_zero_newest_first() {
    let now = utc("2024-01-10T00:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T11:00:00Z"),
        punch_in("2024-01-04T09:00:00Z"),
        punch_out("2024-01-04T10:00:00Z"),
    ];

    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        vec![
            day(2024, 1, 4, 1.0),
            day(2024, 1, 3, 0.0),
            day(2024, 1, 2, 0.0),
            day(2024, 1, 1, 2.0),
        ]
    );
}

#[test]
fn no_punches_no_buckets() {
    let now = utc("2024-01-10T00:00:00Z");

    assert!(daily_totals(&[], &now, &opts()).is_empty());
    assert!(weekly_totals(&[], &now, &opts()).is_empty());
    assert_eq!(hours_today(&[], &now, &opts()), 0.0);
}

#[test]
fn future_session_does_not_count_today() {
    let now = utc("2024-01-01T12:00:00Z");
    let punches = vec![
        punch_in("2024-01-02T09:00:00Z"),
        punch_out("2024-01-02T10:00:00Z"),
    ];

    assert_eq!(hours_today(&punches, &now, &opts()), 0.0);
}

#[test]
fn day_boundaries_follow_the_evaluation_time_zone() {
    let plus5 = FixedOffset::east_opt(5 * 3600).unwrap();
    let now = plus5.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap();
    // 23:00 → 01:00 local (+05:00)
    let punches = vec![
        punch_in("2024-01-01T18:00:00Z"),
        punch_out("2024-01-01T20:00:00Z"),
    ];

    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        vec![day(2024, 1, 2, 1.0), day(2024, 1, 1, 1.0)]
    );
    assert_eq!(hours_today(&punches, &now, &opts()), 1.0);
}

#[test]
fn offsetless_timestamps_are_local_wall_clock() {
    let plus2 = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = plus2.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
    let punches = vec![
        punch_in("2024-01-01T09:00:00"),
        punch_out("2024-01-01T17:15:00"),
    ];

    assert_eq!(hours_today(&punches, &now, &opts()), 8.25);
}

#[test]
fn weeks_start_on_sunday() {
    // 2024-01-01 is a Monday; 2024-01-07 a Sunday
    let now = utc("2024-01-09T00:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T17:00:00Z"),
        punch_in("2024-01-06T09:00:00Z"),
        punch_out("2024-01-06T10:00:00Z"),
        punch_in("2024-01-07T09:00:00Z"),
        punch_out("2024-01-07T11:30:00Z"),
    ];

    assert_eq!(
        weekly_totals(&punches, &now, &opts()),
        vec![
            WeekBucket {
                week_start: date(2024, 1, 7),
                hours: 2.5
            },
            WeekBucket {
                week_start: date(2023, 12, 31),
                hours: 9.0
            },
        ]
    );
}

#[test]
fn weekly_counts_the_open_session() {
    let now = utc("2024-01-02T12:00:00Z");
    let punches = vec![punch_in("2024-01-02T09:00:00Z")];

    assert_eq!(
        weekly_totals(&punches, &now, &opts()),
        vec![WeekBucket {
            week_start: date(2023, 12, 31),
            hours: 3.0
        }]
    );
}

#[test]
fn cross_week_session_is_dropped_unless_split() {
    let now = utc("2024-01-09T00:00:00Z");
    // Saturday night into Sunday
    let punches = vec![
        punch_in("2024-01-06T22:00:00Z"),
        punch_out("2024-01-07T02:00:00Z"),
    ];

    let unsplit = weekly_totals(&punches, &now, &opts());
    assert_eq!(unsplit.len(), 2);
    assert!(unsplit.iter().all(|w| w.hours == 0.0));

    let split = AggregateOptions {
        split_weeks: true,
        ..AggregateOptions::default()
    };
    assert_eq!(
        weekly_totals(&punches, &now, &split),
        vec![
            WeekBucket {
                week_start: date(2024, 1, 7),
                hours: 2.0
            },
            WeekBucket {
                week_start: date(2023, 12, 31),
                hours: 2.0
            },
        ]
    );

    // daily totals always split
    let daily: f64 = daily_totals(&punches, &now, &opts()).iter().map(|d| d.hours).sum();
    assert_eq!(daily, 4.0);
}

#[test]
fn daily_and_weekly_sums_agree_without_cross_week_sessions() {
    let now = utc("2024-01-20T00:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T17:00:00Z"),
        punch_in("2024-01-03T22:00:00Z"),
        punch_out("2024-01-04T03:00:00Z"),
        punch_in("2024-01-08T08:00:00Z"),
        punch_out("2024-01-08T12:00:00Z"),
        punch_in("2024-01-15T13:00:00Z"),
        punch_out("2024-01-15T14:30:00Z"),
    ];

    let daily: f64 = daily_totals(&punches, &now, &opts()).iter().map(|d| d.hours).sum();
    let weekly: f64 = weekly_totals(&punches, &now, &opts()).iter().map(|w| w.hours).sum();

    assert!((daily - weekly).abs() < 1e-9);
    assert_eq!(weekly, 18.5);
}

#[test]
fn totals_are_stable_for_a_fixed_now() {
    let now = utc("2024-01-02T10:00:00Z");
    let punches = vec![
        punch_in("2024-01-01T09:00:00Z"),
        punch_out("2024-01-01T17:00:00Z"),
        punch_in("2024-01-02T08:20:00Z"),
    ];

    assert_eq!(
        daily_totals(&punches, &now, &opts()),
        daily_totals(&punches, &now, &opts())
    );
    assert_eq!(
        weekly_totals(&punches, &now, &opts()),
        weekly_totals(&punches, &now, &opts())
    );
    assert_eq!(hours_today(&punches, &now, &opts()), 1.67);
}
