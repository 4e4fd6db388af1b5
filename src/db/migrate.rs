//! Versioned schema migrations.
//!
//! Each migration runs once, inside its own transaction, and is recorded in
//! `schema_migrations`. Applied migrations are also written to the audit log.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, params};
use std::collections::HashSet;
use tracing::info;

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_log",
        sql: r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 2,
        name: "create_punches",
        sql: r#"
        CREATE TABLE IF NOT EXISTS punches (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp   TEXT NOT NULL UNIQUE,
            kind        TEXT NOT NULL CHECK(kind IN ('in','out')),
            created_at  TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: 3,
        name: "create_app_state",
        sql: r#"
        CREATE TABLE IF NOT EXISTS app_state (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );

        INSERT OR IGNORE INTO app_state (key, value) VALUES ('clocked_in', '0');
        "#,
    },
];

fn ensure_migrations_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn applied_versions(conn: &Connection) -> AppResult<HashSet<u32>> {
    let mut stmt = conn.prepare("SELECT version FROM schema_migrations")?;
    let rows = stmt.query_map([], |row| row.get::<_, u32>(0))?;

    let mut out = HashSet::new();
    for r in rows {
        out.insert(r?);
    }
    Ok(out)
}

/// Latest schema version known to this build.
pub fn latest_version() -> u32 {
    MIGRATIONS.iter().map(|m| m.version).max().unwrap_or(0)
}

/// Highest schema version applied to this database (0 when none).
pub fn schema_version(conn: &Connection) -> AppResult<u32> {
    ensure_migrations_table(conn)?;
    Ok(applied_versions(conn)?.into_iter().max().unwrap_or(0))
}

/// Apply every migration not yet recorded. Returns how many ran.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_migrations_table(conn)?;
    let applied = applied_versions(conn)?;
    let mut count = 0;

    for m in MIGRATIONS.iter().filter(|m| !applied.contains(&m.version)) {
        let tx = conn.unchecked_transaction()?;

        tx.execute_batch(m.sql)
            .map_err(|e| AppError::Migration(format!("{} (v{}): {}", m.name, m.version, e)))?;
        tx.execute(
            "INSERT INTO schema_migrations (version, name, applied_at) VALUES (?1, ?2, ?3)",
            params![m.version, m.name, Local::now().to_rfc3339()],
        )?;
        ttlog(&tx, "migration_applied", m.name, &format!("schema v{}", m.version))?;

        tx.commit()?;
        info!(version = m.version, name = m.name, "migration applied");
        count += 1;
    }

    Ok(count)
}
