#[cfg(test)]
mod tests {
    use pensum::libs::data_storage::DataStorage;
    use pensum::libs::session::SessionRecord;
    use pensum::libs::session_cache::{SessionCache, STALE_SESSION_HOURS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct CacheTestContext {
        _temp_dir: TempDir,
        now_ms: i64,
    }

    impl TestContext for CacheTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CacheTestContext {
                _temp_dir: temp_dir,
                now_ms: chrono::Local::now().timestamp_millis(),
            }
        }
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_load_empty_slot(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        assert!(cache.load("alice", ctx.now_ms).is_none());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        let mut record = SessionRecord::started("alice", ctx.now_ms);
        record.accumulated_minutes = 42;
        cache.save(&record).unwrap();

        let loaded = cache.load("alice", ctx.now_ms).unwrap();
        assert_eq!(loaded, record);
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_slots_are_per_user(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        cache.save(&SessionRecord::started("alice", ctx.now_ms)).unwrap();

        assert!(cache.load("alice", ctx.now_ms).is_some());
        assert!(cache.load("bob", ctx.now_ms).is_none());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_corrupt_slot_is_discarded(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        let path = DataStorage::new().get_path("session_alice.json").unwrap();
        std::fs::write(&path, "{not json").unwrap();

        assert!(cache.load("alice", ctx.now_ms).is_none());
        // The corrupt file was removed, not left in place.
        assert!(!path.exists());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_stale_slot_is_discarded(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        let stale_ms = ctx.now_ms - (STALE_SESSION_HOURS + 1) * 60 * 60 * 1000;
        cache.save(&SessionRecord::started("alice", stale_ms)).unwrap();

        assert!(cache.load("alice", ctx.now_ms).is_none());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_slot_just_inside_staleness_window_survives(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        let recent_ms = ctx.now_ms - (STALE_SESSION_HOURS - 1) * 60 * 60 * 1000;
        cache.save(&SessionRecord::started("alice", recent_ms)).unwrap();

        assert!(cache.load("alice", ctx.now_ms).is_some());
    }

    #[test_context(CacheTestContext)]
    #[test]
    fn test_clear_is_idempotent(ctx: &mut CacheTestContext) {
        let cache = SessionCache::new();
        cache.save(&SessionRecord::started("alice", ctx.now_ms)).unwrap();

        cache.clear("alice").unwrap();
        assert!(cache.load("alice", ctx.now_ms).is_none());
        // Clearing an already empty slot succeeds.
        cache.clear("alice").unwrap();
    }
}
