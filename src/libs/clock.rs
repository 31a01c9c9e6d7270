//! The per-minute session clock.
//!
//! A `Stopped`/`Running` state machine with a single owner. The activity
//! monitor, both persistence stores and the daily aggregator are injected at
//! construction, and the current time comes through [`TimeSource`], so the
//! whole machine is driven in tests by calling [`SessionClock::tick`] with a
//! manual clock instead of waiting on real timers.
//!
//! The clock itself never schedules anything; the controller owns the
//! recurring tick (see `libs/tracker.rs`). Each engaged tick updates the
//! in-memory record first and then flushes: store failures are logged and
//! implicitly retried on the next tick, so counting never stalls on a
//! degraded store.

use crate::api::learning_time::DailyStore;
use crate::api::sessions::SessionStore;
use crate::libs::activity::ActivityMonitor;
use crate::libs::aggregator::DailyAggregator;
use crate::libs::messages::Message;
use crate::libs::reconcile::resolve;
use crate::libs::session::SessionRecord;
use crate::libs::session_cache::SessionCache;
use crate::{msg_debug, msg_print, msg_warning};
use chrono::{DateTime, Local};

/// Seconds between ticks; one engaged tick commits one minute.
pub const TICK_INTERVAL_SECS: u64 = 60;

/// Injectable source of "now", so tests never sleep.
pub trait TimeSource {
    fn now(&self) -> DateTime<Local>;
}

/// The real wall clock.
pub struct WallClock;

impl TimeSource for WallClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
}

pub struct SessionClock<S: SessionStore, D: DailyStore, T: TimeSource> {
    user_id: String,
    state: ClockState,
    record: SessionRecord,
    monitor: ActivityMonitor,
    cache: SessionCache,
    remote: S,
    aggregator: DailyAggregator<D>,
    time: T,
}

impl<S: SessionStore, D: DailyStore, T: TimeSource> SessionClock<S, D, T> {
    pub fn new(
        user_id: &str,
        monitor: ActivityMonitor,
        cache: SessionCache,
        remote: S,
        aggregator: DailyAggregator<D>,
        time: T,
    ) -> Self {
        let now_ms = time.now().timestamp_millis();
        Self {
            user_id: user_id.to_string(),
            state: ClockState::Stopped,
            record: SessionRecord {
                is_active: false,
                ..SessionRecord::started(user_id, now_ms)
            },
            monitor,
            cache,
            remote,
            aggregator,
            time,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn minutes(&self) -> u32 {
        self.record.accumulated_minutes
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn aggregator(&mut self) -> &mut DailyAggregator<D> {
        &mut self.aggregator
    }

    /// Reconciles the local cache against the remote store and begins
    /// counting, resuming a same-day session when one survives.
    ///
    /// Runs once per sign-in. A read failure from either store counts as
    /// absent for that store; this never fails the sign-in flow.
    pub async fn begin(&mut self) {
        let now = self.time.now();
        let local = self.cache.load(&self.user_id, now.timestamp_millis());
        let remote = match self.remote.fetch(&self.user_id).await {
            Ok(remote) => remote,
            Err(e) => {
                msg_debug!(Message::RemoteFetchFailed(e.to_string()));
                None
            }
        };

        let resolution = resolve(&self.user_id, local, remote, now);
        if resolution.resumed {
            msg_print!(Message::SessionResumed(
                resolution.record.accumulated_minutes
            ));
            self.resume(resolution.record).await;
        } else {
            msg_print!(Message::SessionStarted);
            self.start().await;
        }
    }

    /// `Stopped -> Running` with a fresh zero session.
    pub async fn start(&mut self) {
        let now_ms = self.time.now().timestamp_millis();
        self.record = SessionRecord::started(&self.user_id, now_ms);
        self.state = ClockState::Running;
        self.flush().await;
    }

    /// `Stopped -> Running` adopting a reconciled record without resetting
    /// the counter.
    pub async fn resume(&mut self, mut record: SessionRecord) {
        record.is_active = true;
        record.last_flush_ms = self.time.now().timestamp_millis();
        self.record = record;
        self.state = ClockState::Running;
        self.flush().await;
    }

    /// One clock tick.
    ///
    /// No-op while stopped or while the user is idle. When the calendar date
    /// has changed since the session started, the old session is closed and
    /// a fresh one opened before the increment is processed, so a minute is
    /// never attributed to the wrong date.
    pub async fn tick(&mut self) {
        if self.state != ClockState::Running {
            return;
        }

        let now = self.time.now();
        if !self.record.started_on(now.date_naive()) {
            msg_print!(Message::DayRollover(now.date_naive().to_string()));
            self.stop().await;
            self.start().await;
        }

        if !self.monitor.is_active() {
            return;
        }

        let now = self.time.now();
        self.record.accumulated_minutes += 1;
        self.record.last_flush_ms = now.timestamp_millis();
        self.flush().await;
        self.aggregator
            .add_minutes(&self.user_id, now.date_naive(), 1, now)
            .await;
    }

    /// `Running -> Stopped`: terminal remote write, cleared cache slot,
    /// counter reset. Idempotent.
    pub async fn stop(&mut self) {
        if self.state != ClockState::Running {
            return;
        }
        let now_ms = self.time.now().timestamp_millis();
        self.state = ClockState::Stopped;
        self.record.is_active = false;

        if let Err(e) = self
            .remote
            .mark_ended(&self.user_id, self.record.accumulated_minutes, now_ms)
            .await
        {
            msg_warning!(Message::RemoteWriteFailed(e.to_string()));
        }
        if let Err(e) = self.cache.clear(&self.user_id) {
            msg_warning!(Message::CacheWriteFailed(e.to_string()));
        }
        msg_debug!(Message::SessionEnded(self.record.accumulated_minutes));
        self.record.accumulated_minutes = 0;
    }

    /// Writes the in-memory record through both stores. The cache write is
    /// synchronous; the remote write is best-effort and retried implicitly
    /// on the next tick.
    async fn flush(&mut self) {
        if let Err(e) = self.cache.save(&self.record) {
            msg_warning!(Message::CacheWriteFailed(e.to_string()));
        }
        if let Err(e) = self.remote.upsert(&self.record).await {
            msg_debug!(Message::RemoteWriteFailed(e.to_string()));
        }
    }
}
