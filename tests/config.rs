#[cfg(test)]
mod tests {
    use pensum::libs::config::{Config, MonitorConfig, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Redirects the application data directory into a temp dir so each test
    /// starts from a clean slate.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        idle_threshold: u64,
        tick_interval: u64,
        api_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                idle_threshold: 120,
                tick_interval: 30,
                api_url: "https://api.cogito.example".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.monitor.is_none());
        assert!(config.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());
        assert!(config.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            monitor: Some(MonitorConfig {
                idle_threshold: ctx.idle_threshold,
                tick_interval: ctx.tick_interval,
            }),
            server: Some(ServerConfig {
                api_url: ctx.api_url.clone(),
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        let monitor_config = read_config.monitor.unwrap();
        let server_config = read_config.server.unwrap();

        assert_eq!(monitor_config.idle_threshold, ctx.idle_threshold);
        assert_eq!(monitor_config.tick_interval, ctx.tick_interval);
        assert_eq!(server_config.api_url, ctx.api_url);
    }

    #[test]
    fn test_default_monitor_config() {
        let monitor_config = MonitorConfig::default();
        assert_eq!(monitor_config.idle_threshold, 300);
        assert_eq!(monitor_config.tick_interval, 60);
    }
}
