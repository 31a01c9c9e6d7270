//! Sign-out command.
//!
//! Besides forgetting the cached identity, a surviving active session record
//! gets a best-effort terminal write so the remote store does not keep the
//! user marked active forever.

use crate::api::auth;
use crate::api::sessions::{SessionApi, SessionStore};
use crate::api::store::DocStore;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::session_cache::SessionCache;
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let Some(identity) = auth::current_session()? else {
        msg_print!(Message::NotLoggedIn);
        return Ok(());
    };

    let cache = SessionCache::new();
    let now_ms = Local::now().timestamp_millis();
    if let Some(record) = cache.load(&identity.user_id, now_ms) {
        if record.is_active {
            if let Some(server) = Config::read()?.server {
                let sessions = SessionApi::new(DocStore::new(&server, &identity.token));
                if let Err(e) = sessions
                    .mark_ended(&identity.user_id, record.accumulated_minutes, now_ms)
                    .await
                {
                    msg_warning!(Message::RemoteWriteFailed(e.to_string()));
                }
            }
        }
    }

    cache.clear(&identity.user_id)?;
    auth::clear_session()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
