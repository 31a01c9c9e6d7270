//! Top-level session tracking controller.
//!
//! Owns the session clock and maps process lifecycle onto it: reconcile and
//! begin on startup, one tick per interval while running, and a final
//! deadline-bounded flush on shutdown so teardown cannot hang on a slow
//! network.

use crate::api::learning_time::DailyStore;
use crate::api::sessions::SessionStore;
use crate::libs::clock::{SessionClock, TimeSource};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use std::time::Duration;

/// Upper bound on the shutdown flush.
pub const FLUSH_DEADLINE_SECS: u64 = 5;

pub struct SessionTracker<S: SessionStore, D: DailyStore, T: TimeSource> {
    clock: SessionClock<S, D, T>,
    tick_interval: Duration,
}

impl<S: SessionStore, D: DailyStore, T: TimeSource> SessionTracker<S, D, T> {
    pub fn new(clock: SessionClock<S, D, T>, tick_interval: Duration) -> Self {
        Self {
            clock,
            tick_interval,
        }
    }

    /// Runs the tracking loop until Ctrl-C.
    ///
    /// The interval tick is the only scheduled work; ticks are serialized on
    /// this task, so minute increments within one session are strictly
    /// ordered.
    pub async fn run(mut self) -> Result<()> {
        self.clock.begin().await;
        msg_print!(Message::WatchStarted);

        let mut interval = tokio::time::interval(self.tick_interval);
        // The first tick fires immediately; consume it so minute one is
        // counted a full interval after start.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = interval.tick() => self.clock.tick().await,
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        // Best-effort final flush, bounded so shutdown stays prompt even
        // when the remote store is unreachable.
        let minutes = self.clock.minutes();
        match tokio::time::timeout(
            Duration::from_secs(FLUSH_DEADLINE_SECS),
            self.clock.stop(),
        )
        .await
        {
            Ok(()) => msg_print!(Message::WatchStopped(minutes)),
            Err(_) => msg_warning!(Message::FinalFlushTimedOut),
        }
        Ok(())
    }
}
