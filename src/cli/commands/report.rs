use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::ReportLogic;
use crate::db::store::{PunchStore, SqliteStore};
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::ui::messages::success;
use chrono::Local;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { file, force } = cmd {
        let store = SqliteStore::open(&cfg.database_path())?;
        let report = ReportLogic::assemble(
            &store.list_all(),
            &Local::now(),
            &cfg.aggregate_options(),
            &cfg.time_format,
        );
        let body = report.render_text();

        match file {
            Some(f) => {
                let path = Path::new(f);
                ensure_absolute(path)?;
                ensure_writable(path, *force)?;
                fs::write(path, body)?;
                success(format!("Report written to {}", path.display()));
            }
            None => print!("{body}"),
        }
    }

    Ok(())
}
