use crate::config::Config;
use crate::core::logic::Core;
use crate::db::store::{PunchStore, SqliteStore};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::formatting::{checked_time_format, day_label, format_hours};
use chrono::Local;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = SqliteStore::open(&cfg.database_path())?;
    let now = Local::now();
    let summary = Core::summarize(&store.list_all(), &now, &cfg.aggregate_options());

    match &summary.open_since {
        Some(since) => println!(
            "🟢 Clocked in since {} ({})",
            since.format(checked_time_format(&cfg.time_format)),
            day_label(since.date_naive())
        ),
        None => println!("⚪ Clocked out"),
    }
    println!("⏱️  Hours today: {}", format_hours(summary.hours_today));

    if store.clock_flag() != summary.is_clocked_in() {
        warning("Stored clock state disagrees with the punch history; the next `punch` follows the stored state.");
    }
    if !summary.invalid.is_empty() {
        warning(format!(
            "{} punch(es) with unreadable timestamps were ignored.",
            summary.invalid.len()
        ));
    }

    Ok(())
}
