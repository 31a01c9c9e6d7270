//! Human-readable text for every application message.
//!
//! All user-facing strings live here, so wording stays consistent and the
//! call sites deal only in typed [`Message`] values.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION TRACKING MESSAGES ===
            Message::SessionStarted => "Started a fresh study session".to_string(),
            Message::SessionResumed(minutes) => {
                format!("Resumed today's session with {} minute(s) already counted", minutes)
            }
            Message::SessionEnded(minutes) => {
                format!("Session ended with {} minute(s) counted", minutes)
            }
            Message::DayRollover(date) => {
                format!("Day changed, starting a fresh session for {}", date)
            }
            Message::WatchStarted => "Tracking study time. Press Ctrl-C to stop.".to_string(),
            Message::WatchStopped(minutes) => {
                format!("Tracking stopped, {} minute(s) in the final session", minutes)
            }
            Message::FinalFlushTimedOut => {
                "Final flush did not complete before shutdown; the local cache holds the last state".to_string()
            }

            // === STORE MESSAGES ===
            Message::CacheReadFailed(e) => format!("Could not read the session cache: {}", e),
            Message::CacheWriteFailed(e) => format!("Could not write the session cache: {}", e),
            Message::CacheCorrupt(e) => {
                format!("Discarding corrupt session cache entry: {}", e)
            }
            Message::CacheStale(user_id) => {
                format!("Discarding stale session cache entry for {}", user_id)
            }
            Message::RemoteFetchFailed(e) => {
                format!("Could not fetch the remote session record: {}", e)
            }
            Message::RemoteWriteFailed(e) => {
                format!("Could not write the remote session record: {}", e)
            }
            Message::RemoteRangeFailed(e) => {
                format!("Could not fetch remote daily totals, using the local mirror: {}", e)
            }
            Message::LocalAggregateFailed(e) => {
                format!("Could not update the local daily total: {}", e)
            }
            Message::RemoteAggregateFailed(e) => {
                format!("Could not update the remote daily total: {}", e)
            }

            // === AUTH MESSAGES ===
            Message::LoginSucceeded(user_id) => format!("Signed in as {}", user_id),
            Message::LoggedOut => "Signed out".to_string(),
            Message::NotLoggedIn => "Not signed in. Run 'pensum login' first.".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::ConfigModuleServer => "Server configuration".to_string(),
            Message::ServerNotConfigured => {
                "Server is not configured. Run 'pensum init' first.".to_string()
            }
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptIdleThreshold => "Idle threshold in seconds".to_string(),
            Message::PromptTickInterval => "Tick interval in seconds".to_string(),
            Message::PromptServerApiUrl => "Platform API base URL".to_string(),

            // === REPORT MESSAGES ===
            Message::SumHeader(date) => format!("Study time as of {}", date),
            Message::ReportHeader(range) => format!("Daily study time for {}", range),
            Message::NoMinutesRecorded => "No study time recorded yet".to_string(),
        };
        write!(f, "{}", text)
    }
}
