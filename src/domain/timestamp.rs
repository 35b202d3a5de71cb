//! Date parsing for date-valued sort keys.
//!
//! Records arrive from the fetch layer with dates as strings in whatever shape
//! the backend produced (`createdAt`, `appliedAt`, ...). This module turns them
//! into comparable epoch milliseconds. Anything that cannot be parsed ranks as
//! the earliest possible instant so it sorts last under "newest" and first
//! under "oldest".

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Sort key used for missing or unparsable dates.
pub const EARLIEST: i64 = i64::MIN;

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a date string into epoch milliseconds.
///
/// Accepted shapes, in order:
/// - RFC 3339 (`2024-03-01T09:30:00Z`, `2024-03-01T09:30:00.120+02:00`)
/// - naive date-times, interpreted as UTC (`2024-03-01 09:30:00`,
///   `2024-03-01T09:30:00`)
/// - plain dates at midnight UTC (`2024-03-01`)
/// - integer epoch milliseconds (`1709285400000`)
///
/// Returns `None` for anything else, including the empty string.
///
/// # Examples
///
/// ```
/// use rosterview::domain::timestamp::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-01-02"), Some(86_400_000));
/// assert_eq!(parse_timestamp("1970-01-01T00:00:01Z"), Some(1_000));
/// assert_eq!(parse_timestamp("yesterday"), None);
/// ```
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }

    raw.parse::<i64>().ok()
}

/// Returns the sort key for an optional date string.
///
/// Missing and unparsable values collapse to [`EARLIEST`].
#[must_use]
pub fn sort_key(raw: Option<&str>) -> i64 {
    raw.and_then(parse_timestamp).unwrap_or(EARLIEST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc3339_with_offset() {
        assert_eq!(
            parse_timestamp("1970-01-01T01:00:00+01:00"),
            Some(0)
        );
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(60_000));
        assert_eq!(parse_timestamp("1970-01-01T00:01:00"), Some(60_000));
        assert_eq!(parse_timestamp("1970-01-01T00:01:00.500"), Some(60_500));
    }

    #[test]
    fn test_epoch_millis() {
        assert_eq!(parse_timestamp("1709285400000"), Some(1_709_285_400_000));
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("   "), None);
        assert_eq!(parse_timestamp("2024-13-45"), None);
        assert_eq!(parse_timestamp("not a date"), None);
    }

    #[test]
    fn test_sort_key_defaults_to_earliest() {
        assert_eq!(sort_key(None), EARLIEST);
        assert_eq!(sort_key(Some("nope")), EARLIEST);
        assert!(sort_key(Some("1999-12-31")) > EARLIEST);
    }
}
