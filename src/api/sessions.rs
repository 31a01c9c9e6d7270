//! Remote mirror of the live session record, kept in the platform's
//! document store under one document per user.

use crate::api::store::{DocStore, SESSIONS_COLLECTION};
use crate::libs::session::SessionRecord;
use anyhow::Result;
use serde_json::json;

/// Storage for live session records.
///
/// The session clock treats every call as best-effort: failures are logged
/// by the caller and retried implicitly on the next minute tick, never
/// blocking the in-memory counter.
#[allow(async_fn_in_trait)]
pub trait SessionStore {
    /// Returns the stored record for the user, or `None` when absent.
    async fn fetch(&self, user_id: &str) -> Result<Option<SessionRecord>>;

    /// Merges the record's fields into the user's document, creating it if
    /// absent. The caller never needs to have fetched the document first.
    async fn upsert(&self, record: &SessionRecord) -> Result<()>;

    /// Terminal write: marks the session ended with its final total.
    async fn mark_ended(&self, user_id: &str, final_minutes: u32, ended_ms: i64) -> Result<()>;
}

pub struct SessionApi {
    store: DocStore,
}

impl SessionApi {
    pub fn new(store: DocStore) -> Self {
        Self { store }
    }
}

impl SessionStore for SessionApi {
    async fn fetch(&self, user_id: &str) -> Result<Option<SessionRecord>> {
        let Some(value) = self.store.get(SESSIONS_COLLECTION, user_id).await? else {
            return Ok(None);
        };
        // A malformed remote document counts as absent, same as the cache.
        Ok(serde_json::from_value(value).ok())
    }

    async fn upsert(&self, record: &SessionRecord) -> Result<()> {
        self.store
            .merge(SESSIONS_COLLECTION, &record.user_id, &serde_json::to_value(record)?)
            .await
    }

    async fn mark_ended(&self, user_id: &str, final_minutes: u32, ended_ms: i64) -> Result<()> {
        self.store
            .merge(
                SESSIONS_COLLECTION,
                user_id,
                &json!({
                    "isActive": false,
                    "sessionEndTime": ended_ms,
                    "totalSessionTime": final_minutes,
                    "lastUpdated": ended_ms,
                }),
            )
            .await
    }
}
