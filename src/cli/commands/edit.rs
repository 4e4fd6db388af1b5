use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::parse_user_instant;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        timestamp,
        at,
        kind,
    } = cmd
    {
        let now = Local::now();
        let new_at = at
            .as_deref()
            .map(|raw| parse_user_instant(raw, &now))
            .transpose()?;

        let mut store = SqliteStore::open(&cfg.database_path())?;
        let updated = EditLogic::apply(
            &mut store,
            &Local,
            timestamp,
            new_at.as_ref(),
            *kind,
            &cfg.aggregate_options(),
        )?;

        success(format!(
            "Punch {} updated: {} {}.",
            timestamp,
            updated.kind.label(),
            updated.timestamp
        ));
    }

    Ok(())
}
