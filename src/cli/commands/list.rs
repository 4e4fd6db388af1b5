use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::daily::daily_totals;
use crate::core::calculator::weekly::weekly_totals;
use crate::db::store::{PunchStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::punch::Punch;
use crate::utils::colors::{colorize_hours, colorize_in_out};
use crate::utils::formatting::{checked_time_format, day_label, format_hours, pad_right, week_label};
use chrono::{DateTime, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { daily, weekly } = cmd {
        let store = SqliteStore::open(&cfg.database_path())?;
        let punches = store.list_all();

        if punches.is_empty() {
            println!("No punches recorded.");
            return Ok(());
        }

        let now = Local::now();
        let opts = cfg.aggregate_options();

        if *daily {
            println!("📅 Daily totals:\n");
            for b in daily_totals(&punches, &now, &opts) {
                let hours = format_hours(b.hours);
                println!("{}  {}", pad_right(&day_label(b.date), 16), colorize_hours(&hours, b.hours));
            }
        } else if *weekly {
            println!("📅 Weekly totals:\n");
            for b in weekly_totals(&punches, &now, &opts) {
                let hours = format_hours(b.hours);
                println!(
                    "{}  {}",
                    pad_right(&week_label(b.week_start), 22),
                    colorize_hours(&hours, b.hours)
                );
            }
        } else {
            print_punches(&punches, checked_time_format(&cfg.time_format));
        }
    }
    Ok(())
}

/// Chronological punch list grouped by day, with the stored key of each
/// punch (the value `edit` and `del` expect).
fn print_punches(punches: &[Punch], time_format: &str) {
    let mut dated: Vec<(DateTime<Local>, &Punch)> = Vec::new();
    let mut unreadable: Vec<&Punch> = Vec::new();

    for p in punches {
        match p.instant_in(&Local) {
            Ok(instant) => dated.push((instant, p)),
            Err(_) => unreadable.push(p),
        }
    }
    dated.sort_by(|a, b| a.0.cmp(&b.0));

    let mut current_day = None;
    for (instant, p) in &dated {
        let day = instant.date_naive();
        if current_day != Some(day) {
            println!("\n📅 {}", day_label(day));
            current_day = Some(day);
        }

        let label = colorize_in_out(&pad_right(p.kind.label(), 3), p.kind.is_in());
        println!("  {}  {}  {}", instant.format(time_format), label, p.timestamp);
    }

    if !unreadable.is_empty() {
        println!("\n⚠️  Unreadable timestamps:");
        for p in unreadable {
            println!("  {}  {}", pad_right(p.kind.label(), 3), p.timestamp);
        }
    }
}
