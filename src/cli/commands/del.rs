use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { timestamp, yes } = cmd {
        if !*yes
            && !confirm(format!(
                "Delete punch {}? This action is irreversible.",
                timestamp
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = SqliteStore::open(&cfg.database_path())?;
        let clocked_in = DeleteLogic::apply(&mut store, &Local, timestamp, &cfg.aggregate_options())?;

        success(format!("Punch {} has been deleted.", timestamp));
        if clocked_in {
            info("You are still clocked in.");
        }
    }

    Ok(())
}
