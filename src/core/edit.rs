use crate::core::calculator::AggregateOptions;
use crate::core::clock::ClockLogic;
use crate::db::store::PunchStore;
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::{DateTime, TimeZone};
use tracing::info;

pub struct EditLogic;

impl EditLogic {
    /// Change the instant and/or type of the punch keyed by `timestamp`.
    /// Returns the punch as stored after the edit.
    pub fn apply<S: PunchStore, Tz: TimeZone>(
        store: &mut S,
        tz: &Tz,
        timestamp: &str,
        new_at: Option<&DateTime<Tz>>,
        new_kind: Option<PunchType>,
        opts: &AggregateOptions,
    ) -> AppResult<Punch> {
        let old = store
            .list_all()
            .into_iter()
            .find(|p| p.timestamp == timestamp)
            .ok_or_else(|| AppError::PunchNotFound(timestamp.to_string()))?;

        let updated = Punch {
            timestamp: new_at
                .map(|at| Punch::at(at, old.kind).timestamp)
                .unwrap_or_else(|| old.timestamp.clone()),
            kind: new_kind.unwrap_or(old.kind),
        };

        if updated == old {
            return Err(AppError::InvalidInput(
                "Nothing to change: specify a different --at or --kind.".into(),
            ));
        }

        store.update_by_timestamp(timestamp, &updated)?;

        ClockLogic::sync_clock_flag(store, tz, opts)?;

        store.audit(
            "edit",
            timestamp,
            &format!("{} {}", updated.kind.to_db_str(), updated.timestamp),
        );
        info!(old = %timestamp, new = %updated.timestamp, kind = %updated.kind, "punch edited");

        Ok(updated)
    }
}
