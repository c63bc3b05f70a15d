/// Utilities for date and time formatting
///
/// The API exchanges timestamps as epoch millis; pages show them as
/// `YYYY-MM-DD HH:MM:SS` in the browser's zone.
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::fmt::Display;

pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format epoch millis in the given zone; `-` when absent or out of range
pub fn format_millis<Tz>(millis: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|dt| dt.with_timezone(tz).format(DATETIME_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn format_local(millis: Option<i64>) -> String {
    format_millis(millis, &Local)
}

/// Inclusive day range `[from 00:00:00.000, to 23:59:59.999]` as epoch millis.
/// Dates come from `<input type="date">` (`YYYY-MM-DD`).
pub fn day_range_millis<Tz: TimeZone>(from: &str, to: &str, tz: &Tz) -> Option<(i64, i64)> {
    let from = NaiveDate::parse_from_str(from.trim(), "%Y-%m-%d").ok()?;
    let to = NaiveDate::parse_from_str(to.trim(), "%Y-%m-%d").ok()?;
    if to < from {
        return None;
    }
    let start = tz
        .from_local_datetime(&from.and_hms_opt(0, 0, 0)?)
        .earliest()?;
    let end = tz
        .from_local_datetime(&to.and_hms_milli_opt(23, 59, 59, 999)?)
        .latest()?;
    Some((start.timestamp_millis(), end.timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        assert_eq!(
            format_millis(Some(1_700_000_000_000), &Utc),
            "2023-11-14 22:13:20"
        );
        assert_eq!(format_millis(None, &Utc), "-");
    }

    #[test]
    fn test_day_range_millis() {
        assert_eq!(
            day_range_millis("2023-11-14", "2023-11-14", &Utc),
            Some((1_699_920_000_000, 1_700_006_399_999))
        );
    }

    #[test]
    fn test_invalid_day_range() {
        assert_eq!(day_range_millis("2023-11-15", "2023-11-14", &Utc), None);
        assert_eq!(day_range_millis("invalid", "2023-11-14", &Utc), None);
    }
}
