use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::Local;
use tracing::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        data,
        force,
    } = cmd
    {
        let store = SqliteStore::open(&cfg.database_path())?;
        let rows = ExportLogic::export(
            &store,
            *format,
            *data,
            file,
            *force,
            &Local::now(),
            &cfg.aggregate_options(),
        )?;
        info!(rows, format = format.as_str(), "export finished");
    }
    Ok(())
}
