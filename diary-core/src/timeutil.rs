//! Clock-time helpers for delay entries.

use chrono::NaiveTime;

/// Parse a form clock-time value ("HH:MM").
pub fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()
}

/// Signed hours from start to end, by naive wall-clock subtraction.
///
/// Day wraparound is NOT corrected: an overnight range ("22:00" to
/// "06:00") comes back negative. Returns None unless both times parse.
pub fn duration_hours(start: &str, end: &str) -> Option<f64> {
    let start = parse_clock_time(start)?;
    let end = parse_clock_time(end)?;
    let minutes = (end - start).num_minutes();
    Some(minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_time() {
        assert!(parse_clock_time("08:00").is_some());
        assert!(parse_clock_time(" 13:45 ").is_some());
        assert!(parse_clock_time("7:30").is_some());
        assert!(parse_clock_time("").is_none());
        assert!(parse_clock_time("25:00").is_none());
        assert!(parse_clock_time("soon").is_none());
    }

    #[test]
    fn test_duration_hours_same_day() {
        assert_eq!(duration_hours("08:00", "12:30"), Some(4.5));
        assert_eq!(duration_hours("13:00", "13:00"), Some(0.0));
    }

    #[test]
    fn test_duration_hours_overnight_stays_negative() {
        // End before start is not wrapped to the next day; the raw
        // subtraction is kept, matching what the server receives today.
        assert_eq!(duration_hours("22:00", "06:00"), Some(-16.0));
    }

    #[test]
    fn test_duration_hours_requires_both_times() {
        assert_eq!(duration_hours("", "12:00"), None);
        assert_eq!(duration_hours("08:00", ""), None);
        assert_eq!(duration_hours("", ""), None);
    }
}
