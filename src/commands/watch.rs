//! Foreground study-time tracking command.
//!
//! Wires the input listener, the session clock and the stores together and
//! runs the tracking loop until Ctrl-C. Requires a configured server and a
//! signed-in identity; everything after startup degrades gracefully instead
//! of failing.

use crate::api::auth;
use crate::api::learning_time::LearningTimeApi;
use crate::api::sessions::SessionApi;
use crate::api::store::DocStore;
use crate::db::daily::DailyTotals;
use crate::libs::activity::ActivityMonitor;
use crate::libs::aggregator::DailyAggregator;
use crate::libs::clock::{SessionClock, WallClock};
use crate::libs::config::Config;
use crate::libs::messages::{macros::is_debug_mode, Message};
use crate::libs::session_cache::SessionCache;
use crate::libs::tracker::SessionTracker;
use crate::msg_bail_anyhow;
use anyhow::Result;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub async fn cmd() -> Result<()> {
    // In debug mode the msg_* macros route into tracing, so a subscriber is
    // needed for them to produce output.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .init();
    }

    let config = Config::read()?;
    let Some(server) = config.server else {
        msg_bail_anyhow!(Message::ServerNotConfigured);
    };
    let Some(identity) = auth::current_session()? else {
        msg_bail_anyhow!(Message::NotLoggedIn);
    };
    let monitor_config = config.monitor.unwrap_or_default();

    let monitor = ActivityMonitor::new(Duration::from_secs(monitor_config.idle_threshold));
    monitor.spawn_listener();

    let store = DocStore::new(&server, &identity.token);
    let sessions = SessionApi::new(store.clone());
    let aggregator = DailyAggregator::new(DailyTotals::new()?, LearningTimeApi::new(store));

    let clock = SessionClock::new(
        &identity.user_id,
        monitor,
        SessionCache::new(),
        sessions,
        aggregator,
        WallClock,
    );
    SessionTracker::new(clock, Duration::from_secs(monitor_config.tick_interval))
        .run()
        .await
}
