use crate::core::calculator::DanglingInPolicy;
use crate::models::punch::Punch;
use crate::models::punch_type::PunchType;
use chrono::{DateTime, TimeZone};
use tracing::debug;

/// A closed IN → OUT interval.
#[derive(Debug, Clone)]
pub struct Session<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> Session<Tz> {
    pub fn duration_ms(&self) -> i64 {
        span_ms(&self.start, &self.end)
    }
}

/// Result of pairing a punch set.
#[derive(Debug, Clone)]
pub struct Pairing<Tz: TimeZone> {
    /// Closed sessions in ascending start order.
    pub closed: Vec<Session<Tz>>,
    /// Start of the session still running, if any.
    pub open: Option<DateTime<Tz>>,
    /// Raw timestamps that could not be parsed; excluded from pairing.
    pub invalid: Vec<String>,
    /// INs dropped because another IN was already open.
    pub discarded_ins: usize,
    /// OUTs at or before their IN; they close the slot with zero duration.
    pub discarded_outs: usize,
    /// OUTs with no IN to close.
    pub orphan_outs: usize,
}

impl<Tz: TimeZone> Pairing<Tz> {
    pub fn is_clocked_in(&self) -> bool {
        self.open.is_some()
    }

    /// Closed sessions plus the open one ending at `now`.
    /// An open session starting at or after `now` contributes nothing.
    pub fn sessions_until(&self, now: &DateTime<Tz>) -> Vec<Session<Tz>> {
        let mut out = self.closed.clone();

        if let Some(start) = &self.open
            && now > start
        {
            out.push(Session {
                start: start.clone(),
                end: now.clone(),
            });
        }

        out
    }
}

pub(crate) fn span_ms<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> i64 {
    end.clone().signed_duration_since(start).num_milliseconds()
}

/// A punch resolved to an instant in the evaluation time zone.
pub(crate) type Resolved<Tz> = (DateTime<Tz>, PunchType);

/// Parse and sort punches ascending by instant.
/// Returns the resolved timeline and the raw timestamps that failed to parse.
pub(crate) fn resolve<Tz: TimeZone>(punches: &[Punch], tz: &Tz) -> (Vec<Resolved<Tz>>, Vec<String>) {
    let mut timeline = Vec::with_capacity(punches.len());
    let mut invalid = Vec::new();

    for p in punches {
        match p.instant_in(tz) {
            Ok(instant) => timeline.push((instant, p.kind)),
            Err(e) => {
                debug!(timestamp = %p.timestamp, error = %e, "punch excluded from pairing");
                invalid.push(p.timestamp.clone());
            }
        }
    }

    timeline.sort_by(|a, b| a.0.cmp(&b.0));
    (timeline, invalid)
}

/// Pair an already sorted timeline using a single open-IN slot.
pub(crate) fn pair_resolved<Tz: TimeZone>(
    timeline: &[Resolved<Tz>],
    policy: DanglingInPolicy,
) -> Pairing<Tz> {
    let mut closed = Vec::new();
    let mut open_in: Option<DateTime<Tz>> = None;
    let mut discarded_ins = 0;
    let mut discarded_outs = 0;
    let mut orphan_outs = 0;

    for (instant, kind) in timeline {
        match kind {
            PunchType::In => {
                if open_in.is_some() {
                    discarded_ins += 1;
                    if policy == DanglingInPolicy::KeepFirst {
                        continue;
                    }
                }
                open_in = Some(instant.clone());
            }
            PunchType::Out => match open_in.take() {
                Some(start) if *instant > start => closed.push(Session {
                    start,
                    end: instant.clone(),
                }),
                Some(_) => discarded_outs += 1,
                None => orphan_outs += 1,
            },
        }
    }

    Pairing {
        closed,
        open: open_in,
        invalid: Vec::new(),
        discarded_ins,
        discarded_outs,
        orphan_outs,
    }
}

/// Pair an unordered punch set into closed sessions and at most one open
/// session. Unparsable punches are reported in [`Pairing::invalid`].
pub fn pair_punches<Tz: TimeZone>(punches: &[Punch], tz: &Tz, policy: DanglingInPolicy) -> Pairing<Tz> {
    let (timeline, invalid) = resolve(punches, tz);
    let mut pairing = pair_resolved(&timeline, policy);
    pairing.invalid = invalid;
    pairing
}
