use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm("Delete ALL punches? This action is irreversible.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = SqliteStore::open(&cfg.database_path())?;
        let removed = DeleteLogic::reset(&mut store)?;

        success(format!("All punches deleted ({} removed).", removed));
    }

    Ok(())
}
