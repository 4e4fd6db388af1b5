use crate::core::calculator::AggregateOptions;
use crate::core::calculator::sessions::pair_punches;
use crate::db::store::PunchStore;
use crate::errors::AppResult;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::{DateTime, TimeZone};
use tracing::{debug, info};

/// What a clock action did, for the caller to report.
#[derive(Debug, Clone)]
pub struct PunchOutcome {
    pub punch: Punch,
    /// An IN was recorded while already clocked in; the earlier IN will not count.
    pub replaced_open_in: bool,
    /// An OUT was recorded while clocked out; it closes nothing.
    pub unmatched_out: bool,
}

pub struct ClockLogic;

impl ClockLogic {
    /// Record a punch at `at`. With no explicit `kind` the punch toggles the
    /// clocked-in flag: IN when clocked out, OUT when clocked in.
    pub fn punch<S: PunchStore, Tz: TimeZone>(
        store: &mut S,
        kind: Option<PunchType>,
        at: &DateTime<Tz>,
    ) -> AppResult<PunchOutcome> {
        let clocked_in = store.clock_flag();
        let kind = kind.unwrap_or(if clocked_in { PunchType::Out } else { PunchType::In });

        let punch = Punch::at(at, kind);
        store.append(&punch)?;
        store.set_clock_flag(kind.is_in())?;
        store.audit("punch", kind.to_db_str(), &punch.timestamp);

        info!(timestamp = %punch.timestamp, kind = %kind, "punch recorded");

        Ok(PunchOutcome {
            replaced_open_in: kind.is_in() && clocked_in,
            unmatched_out: kind.is_out() && !clocked_in,
            punch,
        })
    }

    /// Re-derive the clocked-in flag from the stored punches.
    /// Used after edits and deletions, which can open or close a session.
    ///
    /// `tz` must be the zone the punches are displayed in: offset-less
    /// timestamps resolve against it, which can change their order.
    pub fn sync_clock_flag<S: PunchStore, Tz: TimeZone>(
        store: &mut S,
        tz: &Tz,
        opts: &AggregateOptions,
    ) -> AppResult<bool> {
        let pairing = pair_punches(&store.list_all(), tz, opts.dangling_in);
        let clocked_in = pairing.is_clocked_in();

        if clocked_in != store.clock_flag() {
            debug!(clocked_in, "clock flag resynchronised");
        }
        store.set_clock_flag(clocked_in)?;

        Ok(clocked_in)
    }
}
