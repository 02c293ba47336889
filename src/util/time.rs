//! Timing and rate helpers for the completion report

use std::time::Duration;

/// Elapsed time in seconds, as printed in the report
pub fn seconds(duration: Duration) -> f64 {
    duration.as_secs_f64()
}

/// Calculate a rate (events per second) from a count and a duration
///
/// # Returns
///
/// Events per second, or 0.0 for a zero duration
pub fn calculate_rate(count: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        count as f64 / seconds
    } else {
        0.0
    }
}

/// Format a rate in human-readable form
///
/// # Examples
///
/// ```
/// use magicsquare::util::time::format_rate;
///
/// assert_eq!(format_rate(500.0), "500");
/// assert_eq!(format_rate(1500.0), "1.50K");
/// assert_eq!(format_rate(2_500_000.0), "2.50M");
/// ```
pub fn format_rate(rate: f64) -> String {
    if rate < 1_000.0 {
        format!("{:.0}", rate)
    } else if rate < 1_000_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else if rate < 1_000_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else {
        format!("{:.2}G", rate / 1_000_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds() {
        assert_eq!(seconds(Duration::from_millis(1500)), 1.5);
        assert_eq!(seconds(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_calculate_rate() {
        let rate = calculate_rate(1000, Duration::from_secs(10));
        assert_eq!(rate, 100.0);
    }

    #[test]
    fn test_calculate_rate_zero_duration() {
        let rate = calculate_rate(1000, Duration::from_secs(0));
        assert_eq!(rate, 0.0);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(500.0), "500");
        assert_eq!(format_rate(1500.0), "1.50K");
        assert_eq!(format_rate(1_500_000.0), "1.50M");
        assert_eq!(format_rate(1_500_000_000.0), "1.50G");
    }
}
