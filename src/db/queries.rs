use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::warn;

pub const CLOCKED_IN_KEY: &str = "clocked_in";

pub fn map_row(row: &Row) -> rusqlite::Result<Punch> {
    let timestamp: String = row.get("timestamp")?;
    let kind_str: String = row.get("kind")?;

    let kind = PunchType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidPunchType(kind_str.clone())),
        )
    })?;

    Ok(Punch { timestamp, kind })
}

pub fn insert_punch(conn: &Connection, punch: &Punch) -> AppResult<()> {
    conn.execute(
        "INSERT INTO punches (timestamp, kind, created_at) VALUES (?1, ?2, ?3)",
        params![
            punch.timestamp,
            punch.kind.to_db_str(),
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(())
}

/// Every stored punch, in no particular order.
/// Rows that cannot be mapped are skipped with a warning.
pub fn load_punches(conn: &Connection) -> AppResult<Vec<Punch>> {
    let mut stmt = conn.prepare("SELECT timestamp, kind FROM punches")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        match r {
            Ok(p) => out.push(p),
            Err(e) => warn!(error = %e, "skipping unreadable punch row"),
        }
    }
    Ok(out)
}

pub fn count_punches(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM punches", [], |row| row.get(0))?)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_punch(conn: &Connection, timestamp: &str) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM punches WHERE timestamp = ?1", [timestamp])?)
}

/// Replace the punch keyed by `old_timestamp`. Returns the number of rows changed.
pub fn update_punch(conn: &Connection, old_timestamp: &str, punch: &Punch) -> AppResult<usize> {
    Ok(conn.execute(
        "UPDATE punches SET timestamp = ?1, kind = ?2 WHERE timestamp = ?3",
        params![punch.timestamp, punch.kind.to_db_str(), old_timestamp],
    )?)
}

pub fn get_state(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    Ok(conn
        .query_row("SELECT value FROM app_state WHERE key = ?1", [key], |row| {
            row.get(0)
        })
        .optional()?)
}

pub fn set_state(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO app_state (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Remove all punches and clear the clocked-in flag in one transaction.
pub fn clear_all(conn: &Connection) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM punches", [])?;
    tx.execute(
        "UPDATE app_state SET value = '0' WHERE key = ?1",
        [CLOCKED_IN_KEY],
    )?;
    tx.commit()?;
    Ok(())
}
