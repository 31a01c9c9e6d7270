use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Idle window after which a user no longer counts as engaged.
pub const DEFAULT_IDLE_THRESHOLD_SECS: u64 = 300;

/// Tracks whether the user is currently engaged, derived from a rolling
/// idle window over observed input events.
///
/// Purely in-memory; state is reset when the process starts. Cloning shares
/// the underlying last-activity timestamp, so the input listener thread and
/// the session clock observe the same state.
#[derive(Clone)]
pub struct ActivityMonitor {
    last_activity: Arc<Mutex<Instant>>,
    idle_threshold: Duration,
}

impl ActivityMonitor {
    pub fn new(idle_threshold: Duration) -> Self {
        Self {
            last_activity: Arc::new(Mutex::new(Instant::now())),
            idle_threshold,
        }
    }

    /// Records a qualifying input event. Fire-and-forget.
    pub fn record_activity(&self) {
        *self.last_activity.lock() = Instant::now();
    }

    /// True iff activity was observed within the idle window.
    pub fn is_active(&self) -> bool {
        self.last_activity.lock().elapsed() < self.idle_threshold
    }

    /// Time since the last observed input event.
    pub fn idle_for(&self) -> Duration {
        self.last_activity.lock().elapsed()
    }

    /// Spawns a background thread listening for keyboard, mouse and scroll
    /// events and feeding them into this monitor.
    ///
    /// The rdev listener blocks its thread; on error it is restarted so
    /// monitoring stays continuous for the life of the process.
    pub fn spawn_listener(&self) {
        let last_activity = self.last_activity.clone();
        std::thread::spawn(move || loop {
            let last_activity_for_listener = last_activity.clone();
            if let Err(e) = listen(move |event: Event| match event.event_type {
                EventType::KeyPress(_)
                | EventType::ButtonPress(_)
                | EventType::MouseMove { .. }
                | EventType::Wheel { .. } => {
                    *last_activity_for_listener.lock() = Instant::now();
                }
                _ => {}
            }) {
                tracing::warn!("input listener failed: {:?}, retrying in 1 second", e);
                std::thread::sleep(Duration::from_secs(1));
            } else {
                break;
            }
        });
    }
}

impl Default for ActivityMonitor {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_IDLE_THRESHOLD_SECS))
    }
}
