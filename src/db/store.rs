//! Punch persistence.
//!
//! [`PunchStore`] is the contract the core logic talks to. Reads fail soft
//! (an unreadable store looks empty, with a warning in the log); writes
//! return [`AppError::StoreWrite`].

use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::queries::{self, CLOCKED_IN_KEY};
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use tracing::warn;

pub trait PunchStore {
    fn append(&mut self, punch: &Punch) -> AppResult<()>;

    /// All punches, order unspecified. Read failures yield an empty list.
    fn list_all(&self) -> Vec<Punch>;

    fn delete_by_timestamp(&mut self, timestamp: &str) -> AppResult<()>;

    fn update_by_timestamp(&mut self, old_timestamp: &str, punch: &Punch) -> AppResult<()>;

    /// Read failures yield `false`.
    fn clock_flag(&self) -> bool;

    fn set_clock_flag(&mut self, clocked_in: bool) -> AppResult<()>;

    /// Remove every punch and clear the flag.
    fn reset_all(&mut self) -> AppResult<()>;

    /// Record a mutating operation in the store's audit trail, if it has one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

fn write_err(e: AppError) -> AppError {
    match e {
        AppError::StoreWrite(_) | AppError::PunchNotFound(_) => e,
        other => AppError::StoreWrite(other.to_string()),
    }
}

// ---------------------------------------------
// SQLite
// ---------------------------------------------

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open the database at `path`, applying pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_pool(DbPool::new(path)?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }
}

impl PunchStore for SqliteStore {
    fn append(&mut self, punch: &Punch) -> AppResult<()> {
        queries::insert_punch(&self.pool.conn, punch).map_err(write_err)
    }

    fn list_all(&self) -> Vec<Punch> {
        match queries::load_punches(&self.pool.conn) {
            Ok(punches) => punches,
            Err(e) => {
                warn!(error = %e, "punch store read failed, treating as empty");
                Vec::new()
            }
        }
    }

    fn delete_by_timestamp(&mut self, timestamp: &str) -> AppResult<()> {
        match queries::delete_punch(&self.pool.conn, timestamp).map_err(write_err)? {
            0 => Err(AppError::PunchNotFound(timestamp.to_string())),
            _ => Ok(()),
        }
    }

    fn update_by_timestamp(&mut self, old_timestamp: &str, punch: &Punch) -> AppResult<()> {
        match queries::update_punch(&self.pool.conn, old_timestamp, punch).map_err(write_err)? {
            0 => Err(AppError::PunchNotFound(old_timestamp.to_string())),
            _ => Ok(()),
        }
    }

    fn clock_flag(&self) -> bool {
        match queries::get_state(&self.pool.conn, CLOCKED_IN_KEY) {
            Ok(value) => value.as_deref() == Some("1"),
            Err(e) => {
                warn!(error = %e, "clock flag read failed, assuming clocked out");
                false
            }
        }
    }

    fn set_clock_flag(&mut self, clocked_in: bool) -> AppResult<()> {
        let value = if clocked_in { "1" } else { "0" };
        queries::set_state(&self.pool.conn, CLOCKED_IN_KEY, value).map_err(write_err)
    }

    fn reset_all(&mut self) -> AppResult<()> {
        queries::clear_all(&self.pool.conn).map_err(write_err)
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) {
        // audit is best effort; the operation itself already succeeded
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warn!(error = %e, operation, "failed to write internal log");
        }
    }
}

// ---------------------------------------------
// In-memory
// ---------------------------------------------

/// Volatile store with the same key semantics as [`SqliteStore`].
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    punches: Vec<Punch>,
    clocked_in: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_punches(punches: Vec<Punch>) -> Self {
        Self {
            punches,
            clocked_in: false,
        }
    }

    fn position(&self, timestamp: &str) -> Option<usize> {
        self.punches.iter().position(|p| p.timestamp == timestamp)
    }
}

impl PunchStore for MemoryStore {
    fn append(&mut self, punch: &Punch) -> AppResult<()> {
        if self.position(&punch.timestamp).is_some() {
            return Err(AppError::StoreWrite(format!(
                "duplicate timestamp {}",
                punch.timestamp
            )));
        }
        self.punches.push(punch.clone());
        Ok(())
    }

    fn list_all(&self) -> Vec<Punch> {
        self.punches.clone()
    }

    fn delete_by_timestamp(&mut self, timestamp: &str) -> AppResult<()> {
        let idx = self
            .position(timestamp)
            .ok_or_else(|| AppError::PunchNotFound(timestamp.to_string()))?;
        self.punches.remove(idx);
        Ok(())
    }

    fn update_by_timestamp(&mut self, old_timestamp: &str, punch: &Punch) -> AppResult<()> {
        let idx = self
            .position(old_timestamp)
            .ok_or_else(|| AppError::PunchNotFound(old_timestamp.to_string()))?;

        if punch.timestamp != old_timestamp && self.position(&punch.timestamp).is_some() {
            return Err(AppError::StoreWrite(format!(
                "duplicate timestamp {}",
                punch.timestamp
            )));
        }

        self.punches[idx] = punch.clone();
        Ok(())
    }

    fn clock_flag(&self) -> bool {
        self.clocked_in
    }

    fn set_clock_flag(&mut self, clocked_in: bool) -> AppResult<()> {
        self.clocked_in = clocked_in;
        Ok(())
    }

    fn reset_all(&mut self) -> AppResult<()> {
        self.punches.clear();
        self.clocked_in = false;
        Ok(())
    }
}
