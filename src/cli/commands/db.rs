use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::sessions::pair_punches;
use crate::db::migrate::{latest_version, run_pending_migrations, schema_version};
use crate::db::pool::DbPool;
use crate::db::queries::{self, CLOCKED_IN_KEY};
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let db_path = cfg.database_path();
        let mut pool = DbPool::new(&db_path)?;

        if *migrate {
            let applied = run_pending_migrations(&pool.conn)?;
            success(format!("Migrations completed ({applied} applied)."));
        }

        if *show_info {
            stats::print_db_info(&mut pool, &db_path)?;
        }

        if *check {
            check_database(&pool, cfg)?;
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}

/// SQLite integrity, schema level and punch consistency.
fn check_database(pool: &DbPool, cfg: &Config) -> AppResult<()> {
    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("SQLite integrity check passed.");
    } else {
        warning(format!("SQLite integrity check failed: {integrity}"));
    }

    let version = schema_version(&pool.conn)?;
    if version < latest_version() {
        warning(format!(
            "Schema is at v{version}, latest is v{}. Run `db --migrate`.",
            latest_version()
        ));
        return Ok(());
    }

    let punches = queries::load_punches(&pool.conn)?;
    let pairing = pair_punches(&punches, &Local, cfg.dangling_in);

    if !pairing.invalid.is_empty() {
        warning(format!(
            "{} punch(es) have unreadable timestamps and are ignored by every total.",
            pairing.invalid.len()
        ));
    }
    if pairing.discarded_ins + pairing.discarded_outs + pairing.orphan_outs > 0 {
        info(format!(
            "Unpaired punches: {} IN without OUT, {} OUT at or before its IN, {} OUT without IN.",
            pairing.discarded_ins, pairing.discarded_outs, pairing.orphan_outs
        ));
    }

    let flag = queries::get_state(&pool.conn, CLOCKED_IN_KEY)?.as_deref() == Some("1");
    if flag != pairing.is_clocked_in() {
        warning("Stored clock state disagrees with the punch history.");
    } else {
        success(format!("{} punches checked.", punches.len()));
    }

    Ok(())
}
