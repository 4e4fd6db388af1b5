use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::{checked_time_format, day_label};
use crate::utils::time::parse_user_instant;
use chrono::Local;

/// Handle `in`, `out` and `punch`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (kind, at) = match cmd {
        Commands::In { at } => (Some(PunchType::In), at),
        Commands::Out { at } => (Some(PunchType::Out), at),
        Commands::Punch { at } => (None, at),
        _ => return Ok(()),
    };

    let now = Local::now();
    let instant = match at {
        Some(raw) => parse_user_instant(raw, &now)?,
        None => now,
    };

    let mut store = SqliteStore::open(&cfg.database_path())?;
    let outcome = ClockLogic::punch(&mut store, kind, &instant)?;

    if outcome.replaced_open_in {
        warning("You were already clocked in; the earlier IN will not be counted.");
    }
    if outcome.unmatched_out {
        warning("You were not clocked in; this OUT closes no session.");
    }

    success(format!(
        "Clocked {} at {} on {} ({}).",
        outcome.punch.kind.to_db_str(),
        instant.format(checked_time_format(&cfg.time_format)),
        day_label(instant.date_naive()),
        outcome.punch.timestamp
    ));

    Ok(())
}
