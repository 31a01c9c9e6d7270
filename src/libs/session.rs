//! Core session-tracking records shared by the cache, the remote store and
//! the session clock.

use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// The live, in-progress measurement of one user's engagement session.
///
/// Serialized field names match the platform's `userSessions` documents, so
/// the same shape round-trips through both the local cache file and the
/// remote document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Minutes counted so far in the current, uncommitted session.
    #[serde(rename = "currentSessionTime", default)]
    pub accumulated_minutes: u32,
    /// Epoch milliseconds marking when the current session began.
    #[serde(rename = "sessionStartTime")]
    pub session_start_ms: i64,
    /// Epoch milliseconds of the most recent successful flush.
    #[serde(rename = "lastUpdated")]
    pub last_flush_ms: i64,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
}

impl SessionRecord {
    /// A fresh zero-minute session starting now.
    pub fn started(user_id: &str, now_ms: i64) -> Self {
        Self {
            user_id: user_id.to_string(),
            accumulated_minutes: 0,
            session_start_ms: now_ms,
            last_flush_ms: now_ms,
            is_active: true,
        }
    }

    /// The local calendar date the session started on, if the timestamp is
    /// representable.
    pub fn start_date(&self) -> Option<NaiveDate> {
        local_date(self.session_start_ms)
    }

    /// True when the session began on the given calendar date.
    pub fn started_on(&self, date: NaiveDate) -> bool {
        self.start_date() == Some(date)
    }
}

/// The committed per-calendar-day total of engaged minutes for a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotal {
    #[serde(rename = "dateKey")]
    pub date: NaiveDate,
    pub minutes: i64,
}

/// Converts epoch milliseconds to a local calendar date.
pub fn local_date(epoch_ms: i64) -> Option<NaiveDate> {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt| dt.date_naive())
}
