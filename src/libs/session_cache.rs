//! Durable single-slot cache for the in-progress session.
//!
//! One JSON file per user in the application data directory. The write path
//! is a plain synchronous file write so a record survives an immediate
//! process teardown; a corrupt or unreadable file is treated as absent, never
//! as a fatal error.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::session::SessionRecord;
use crate::msg_debug;
use anyhow::Result;
use std::fs::{self, File};

/// Cached records whose last flush is older than this are discarded on load.
pub const STALE_SESSION_HOURS: i64 = 24;

pub struct SessionCache {
    storage: DataStorage,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            storage: DataStorage::new(),
        }
    }

    fn file_name(user_id: &str) -> String {
        format!("session_{}.json", user_id)
    }

    /// Stores the record, overwriting any prior value for the same user.
    pub fn save(&self, record: &SessionRecord) -> Result<()> {
        let path = self.storage.get_path(&Self::file_name(&record.user_id))?;
        let file = File::create(path)?;
        serde_json::to_writer(&file, record)?;
        file.sync_all()?;
        Ok(())
    }

    /// Returns the last saved record, or `None` when the slot is empty,
    /// unparseable, or stale beyond [`STALE_SESSION_HOURS`].
    pub fn load(&self, user_id: &str, now_ms: i64) -> Option<SessionRecord> {
        let path = self.storage.get_path(&Self::file_name(user_id)).ok()?;
        if !path.exists() {
            return None;
        }
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) => {
                msg_debug!(Message::CacheReadFailed(e.to_string()));
                return None;
            }
        };
        let record: SessionRecord = match serde_json::from_str(&contents) {
            Ok(record) => record,
            Err(e) => {
                // Corrupt slot: discard rather than repair in place.
                msg_debug!(Message::CacheCorrupt(e.to_string()));
                let _ = fs::remove_file(&path);
                return None;
            }
        };
        let age_ms = now_ms.saturating_sub(record.last_flush_ms);
        if age_ms > STALE_SESSION_HOURS * 60 * 60 * 1000 {
            msg_debug!(Message::CacheStale(user_id.to_string()));
            let _ = fs::remove_file(&path);
            return None;
        }
        Some(record)
    }

    /// Removes the stored record. A missing file is not an error.
    pub fn clear(&self, user_id: &str) -> Result<()> {
        let path = self.storage.get_path(&Self::file_name(user_id))?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
