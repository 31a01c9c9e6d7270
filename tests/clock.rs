#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
    use pensum::api::learning_time::DailyStore;
    use pensum::api::sessions::SessionStore;
    use pensum::db::daily::DailyTotals;
    use pensum::libs::activity::ActivityMonitor;
    use pensum::libs::aggregator::DailyAggregator;
    use pensum::libs::clock::{ClockState, SessionClock, TimeSource};
    use pensum::libs::session::{DayTotal, SessionRecord};
    use pensum::libs::session_cache::SessionCache;
    use std::sync::{Arc, Mutex};
    use std::time::Duration as StdDuration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    /// Controllable time source shared between the test and the clock.
    #[derive(Clone)]
    struct ManualTime {
        now: Arc<Mutex<DateTime<Local>>>,
    }

    impl ManualTime {
        fn at(now: DateTime<Local>) -> Self {
            Self {
                now: Arc::new(Mutex::new(now)),
            }
        }

        fn advance(&self, by: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += by;
        }

        fn set(&self, to: DateTime<Local>) {
            *self.now.lock().unwrap() = to;
        }
    }

    impl TimeSource for ManualTime {
        fn now(&self) -> DateTime<Local> {
            *self.now.lock().unwrap()
        }
    }

    /// In-memory session store double recording terminal writes.
    #[derive(Clone, Default)]
    struct MemSessionStore {
        doc: Arc<Mutex<Option<SessionRecord>>>,
        ended: Arc<Mutex<Vec<(String, u32, i64)>>>,
    }

    impl SessionStore for MemSessionStore {
        async fn fetch(&self, user_id: &str) -> Result<Option<SessionRecord>> {
            let doc = self.doc.lock().unwrap();
            Ok(doc.clone().filter(|record| record.user_id == user_id))
        }

        async fn upsert(&self, record: &SessionRecord) -> Result<()> {
            *self.doc.lock().unwrap() = Some(record.clone());
            Ok(())
        }

        async fn mark_ended(&self, user_id: &str, final_minutes: u32, ended_ms: i64) -> Result<()> {
            self.ended
                .lock()
                .unwrap()
                .push((user_id.to_string(), final_minutes, ended_ms));
            if let Some(record) = self.doc.lock().unwrap().as_mut() {
                record.is_active = false;
                record.last_flush_ms = ended_ms;
            }
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct MemDailyStore {
        deltas: Arc<Mutex<Vec<(NaiveDate, i64)>>>,
    }

    impl DailyStore for MemDailyStore {
        async fn add_minutes(
            &self,
            _user_id: &str,
            date: NaiveDate,
            minutes: i64,
            _at: DateTime<Local>,
        ) -> Result<()> {
            self.deltas.lock().unwrap().push((date, minutes));
            Ok(())
        }

        async fn fetch_range(
            &self,
            _user_id: &str,
            _from: NaiveDate,
            _to: NaiveDate,
        ) -> Result<Vec<DayTotal>> {
            Ok(Vec::new())
        }
    }

    struct ClockTestContext {
        _temp_dir: TempDir,
    }

    impl AsyncTestContext for ClockTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ClockTestContext {
                _temp_dir: temp_dir,
            }
        }
    }

    fn at(hour: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 5, hour, min, 0).unwrap()
    }

    /// An hour-long idle threshold keeps the monitor engaged for the whole
    /// test; a zero threshold makes every tick an idle tick.
    fn engaged_monitor() -> ActivityMonitor {
        ActivityMonitor::new(StdDuration::from_secs(3600))
    }

    fn idle_monitor() -> ActivityMonitor {
        ActivityMonitor::new(StdDuration::ZERO)
    }

    fn clock(
        monitor: ActivityMonitor,
        remote: MemSessionStore,
        daily: MemDailyStore,
        time: ManualTime,
    ) -> SessionClock<MemSessionStore, MemDailyStore, ManualTime> {
        SessionClock::new(
            "alice",
            monitor,
            SessionCache::new(),
            remote,
            DailyAggregator::new(DailyTotals::new().unwrap(), daily),
            time,
        )
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_begin_fresh_when_no_prior_session(_ctx: &mut ClockTestContext) {
        let remote = MemSessionStore::default();
        let time = ManualTime::at(at(10, 0));
        let mut clock = clock(engaged_monitor(), remote.clone(), MemDailyStore::default(), time);

        clock.begin().await;

        assert_eq!(clock.state(), ClockState::Running);
        assert_eq!(clock.minutes(), 0);
        // The fresh record was flushed to both stores.
        let doc = remote.doc.lock().unwrap().clone().unwrap();
        assert!(doc.is_active);
        assert_eq!(doc.accumulated_minutes, 0);
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_engaged_ticks_count_minutes(_ctx: &mut ClockTestContext) {
        let remote = MemSessionStore::default();
        let daily = MemDailyStore::default();
        let time = ManualTime::at(at(10, 0));
        let mut clock = clock(engaged_monitor(), remote.clone(), daily.clone(), time.clone());

        clock.begin().await;
        for _ in 0..3 {
            time.advance(Duration::seconds(60));
            clock.tick().await;
        }

        assert_eq!(clock.minutes(), 3);
        let doc = remote.doc.lock().unwrap().clone().unwrap();
        assert_eq!(doc.accumulated_minutes, 3);
        // One single-minute delta per engaged tick.
        let deltas = daily.deltas.lock().unwrap();
        assert_eq!(deltas.len(), 3);
        assert!(deltas.iter().all(|(date, minutes)| {
            *date == at(10, 0).date_naive() && *minutes == 1
        }));
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_idle_tick_is_a_no_op(_ctx: &mut ClockTestContext) {
        let daily = MemDailyStore::default();
        let time = ManualTime::at(at(10, 0));
        let mut clock = clock(idle_monitor(), MemSessionStore::default(), daily.clone(), time.clone());

        clock.begin().await;
        time.advance(Duration::seconds(60));
        clock.tick().await;

        assert_eq!(clock.minutes(), 0);
        assert!(daily.deltas.lock().unwrap().is_empty());
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_tick_while_stopped_is_a_no_op(_ctx: &mut ClockTestContext) {
        let daily = MemDailyStore::default();
        let time = ManualTime::at(at(10, 0));
        let mut clock = clock(engaged_monitor(), MemSessionStore::default(), daily.clone(), time.clone());

        // Never begun: state is Stopped.
        time.advance(Duration::seconds(60));
        clock.tick().await;

        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.minutes(), 0);
        assert!(daily.deltas.lock().unwrap().is_empty());
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_day_rollover_closes_and_reopens(_ctx: &mut ClockTestContext) {
        let remote = MemSessionStore::default();
        let daily = MemDailyStore::default();
        let time = ManualTime::at(at(22, 0));
        let mut clock = clock(engaged_monitor(), remote.clone(), daily.clone(), time.clone());

        clock.begin().await;
        time.advance(Duration::seconds(60));
        clock.tick().await;
        assert_eq!(clock.minutes(), 1);

        // Jump past midnight: the old session ends at its committed total
        // and a fresh one starts before the minute is counted.
        let next_day = at(22, 0) + Duration::days(1) - Duration::hours(21);
        time.set(next_day);
        clock.tick().await;

        let ended = remote.ended.lock().unwrap().clone();
        assert_eq!(ended.len(), 1);
        assert_eq!(ended[0].1, 1);

        assert_eq!(clock.state(), ClockState::Running);
        assert_eq!(clock.minutes(), 1);
        assert_eq!(
            clock.record().start_date().unwrap(),
            next_day.date_naive()
        );
        // The post-rollover minute lands on the new date.
        let deltas = daily.deltas.lock().unwrap();
        assert_eq!(deltas.last().unwrap().0, next_day.date_naive());
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_stop_is_terminal_and_idempotent(_ctx: &mut ClockTestContext) {
        let remote = MemSessionStore::default();
        let time = ManualTime::at(at(10, 0));
        let mut clock = clock(engaged_monitor(), remote.clone(), MemDailyStore::default(), time.clone());

        clock.begin().await;
        time.advance(Duration::seconds(60));
        clock.tick().await;

        clock.stop().await;
        clock.stop().await;

        assert_eq!(clock.state(), ClockState::Stopped);
        assert_eq!(clock.minutes(), 0);
        // Exactly one terminal write with the final total.
        let ended = remote.ended.lock().unwrap().clone();
        assert_eq!(ended.len(), 1);
        assert_eq!(ended[0], ("alice".to_string(), 1, time.now().timestamp_millis()));
        // The cache slot was cleared.
        assert!(SessionCache::new()
            .load("alice", time.now().timestamp_millis())
            .is_none());
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_begin_resumes_cached_session_with_compensation(_ctx: &mut ClockTestContext) {
        let now = at(10, 0);
        let cache = SessionCache::new();
        let mut record = SessionRecord::started("alice", at(9, 0).timestamp_millis());
        record.accumulated_minutes = 12;
        record.last_flush_ms = (now - Duration::minutes(3)).timestamp_millis();
        cache.save(&record).unwrap();

        let time = ManualTime::at(now);
        let mut clock = clock(
            engaged_monitor(),
            MemSessionStore::default(),
            MemDailyStore::default(),
            time,
        );
        clock.begin().await;

        assert_eq!(clock.state(), ClockState::Running);
        assert_eq!(clock.minutes(), 15);
        assert_eq!(
            clock.record().session_start_ms,
            at(9, 0).timestamp_millis()
        );
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_begin_adopts_remote_session_on_new_machine(_ctx: &mut ClockTestContext) {
        let now = at(10, 0);
        let remote = MemSessionStore::default();
        let mut record = SessionRecord::started("alice", at(9, 30).timestamp_millis());
        record.accumulated_minutes = 25;
        record.last_flush_ms = now.timestamp_millis();
        *remote.doc.lock().unwrap() = Some(record);

        let time = ManualTime::at(now);
        let mut clock = clock(
            engaged_monitor(),
            remote,
            MemDailyStore::default(),
            time,
        );
        clock.begin().await;

        assert_eq!(clock.minutes(), 25);
    }

    #[test_context(ClockTestContext)]
    #[tokio::test]
    async fn test_begin_prefers_fresher_remote_over_cache(_ctx: &mut ClockTestContext) {
        let now = at(10, 0);

        let cache = SessionCache::new();
        let mut local = SessionRecord::started("alice", at(9, 0).timestamp_millis());
        local.accumulated_minutes = 5;
        local.last_flush_ms = (now - Duration::minutes(30)).timestamp_millis();
        cache.save(&local).unwrap();

        let remote = MemSessionStore::default();
        let mut newer = SessionRecord::started("alice", at(9, 0).timestamp_millis());
        newer.accumulated_minutes = 20;
        newer.last_flush_ms = now.timestamp_millis();
        *remote.doc.lock().unwrap() = Some(newer);

        let time = ManualTime::at(now);
        let mut clock = clock(engaged_monitor(), remote, MemDailyStore::default(), time);
        clock.begin().await;

        assert_eq!(clock.minutes(), 20);
    }
}
