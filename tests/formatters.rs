#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pensum::libs::formatter::{format_duration, format_minutes};

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
        assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_negative_duration_clamps_to_zero() {
        assert_eq!(format_duration(&Duration::minutes(-10)), "00:00");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(61), "01:01");
        assert_eq!(format_minutes(1440), "24:00");
    }
}
