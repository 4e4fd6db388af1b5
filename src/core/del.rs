use crate::core::calculator::AggregateOptions;
use crate::core::clock::ClockLogic;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use chrono::TimeZone;
use tracing::info;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the punch keyed by `timestamp`.
    /// Returns whether the user is still clocked in afterwards.
    pub fn apply<S: PunchStore, Tz: TimeZone>(
        store: &mut S,
        tz: &Tz,
        timestamp: &str,
        opts: &AggregateOptions,
    ) -> AppResult<bool> {
        store.delete_by_timestamp(timestamp)?;
        let clocked_in = ClockLogic::sync_clock_flag(store, tz, opts)?;

        store.audit("del", timestamp, "punch deleted");
        info!(timestamp, "punch deleted");

        Ok(clocked_in)
    }

    /// Remove every punch and clear the clocked-in flag.
    pub fn reset<S: PunchStore>(store: &mut S) -> AppResult<usize> {
        let removed = store.list_all().len();
        store.reset_all()?;

        store.audit("reset", "", &format!("{removed} punches removed"));
        info!(removed, "store reset");

        Ok(removed)
    }
}
