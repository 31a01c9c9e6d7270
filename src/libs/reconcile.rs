//! Dual-store session resolution.
//!
//! On sign-in the tracker holds up to two snapshots of the same logical
//! session: the local cache slot and the remote document. This module is the
//! pure decision procedure that picks the authoritative starting state. It
//! performs no I/O, so every branch is unit-testable without store clients
//! or timers.
//!
//! Resolution rules:
//!
//! 1. Neither snapshot exists: start a fresh zero session.
//! 2. Exactly one exists: adopt it.
//! 3. Both exist: the one with the more recent flush wins.
//! 4. If the adopted snapshot was active, add one compensation minute per
//!    full minute elapsed since its last flush. This is a best-effort repair
//!    for the gap a reload or crash leaves between the final flush and the
//!    restart, not an exact replay.
//! 5. A snapshot whose session started on an earlier calendar date is not
//!    carried forward: the day rolled over, so today begins at zero.

use crate::libs::session::SessionRecord;
use chrono::{DateTime, Local};

/// Outcome of resolving the two persistence stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: SessionRecord,
    /// True when a prior same-day session was adopted; false when the
    /// resolved state is a fresh zero session.
    pub resumed: bool,
}

/// Picks the authoritative starting state from the two optional snapshots.
pub fn resolve(
    user_id: &str,
    local: Option<SessionRecord>,
    remote: Option<SessionRecord>,
    now: DateTime<Local>,
) -> Resolution {
    let now_ms = now.timestamp_millis();

    let chosen = match (local, remote) {
        (None, None) => None,
        (Some(local), None) => Some(local),
        (None, Some(remote)) => Some(remote),
        (Some(local), Some(remote)) => {
            if local.last_flush_ms >= remote.last_flush_ms {
                Some(local)
            } else {
                Some(remote)
            }
        }
    };

    let Some(mut record) = chosen else {
        return Resolution {
            record: SessionRecord::started(user_id, now_ms),
            resumed: false,
        };
    };

    if !record.started_on(now.date_naive()) {
        // Day rollover: yesterday's total belongs to yesterday's aggregate.
        return Resolution {
            record: SessionRecord::started(user_id, now_ms),
            resumed: false,
        };
    }

    if record.is_active {
        let gap_minutes = (now_ms - record.last_flush_ms) / 60_000;
        if gap_minutes > 0 {
            record.accumulated_minutes += gap_minutes as u32;
        }
    }

    Resolution {
        record,
        resumed: true,
    }
}
