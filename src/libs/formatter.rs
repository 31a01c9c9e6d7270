//! Duration formatting for reports and console output.
//!
//! All study-time durations are displayed in the same "HH:MM" shape so the
//! summary and report tables line up. Negative values are clamped to zero.

use chrono::Duration;

/// Formats a duration as a zero-padded "HH:MM" string.
///
/// # Examples
///
/// ```rust
/// use pensum::libs::formatter::format_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
/// assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
/// assert_eq!(format_duration(&Duration::zero()), "00:00");
/// assert_eq!(format_duration(&Duration::minutes(-5)), "00:00");
/// ```
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;
    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats a raw minute count as "HH:MM".
pub fn format_minutes(minutes: i64) -> String {
    format_duration(&Duration::minutes(minutes))
}
