//! Date parsing helpers

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a manifest date string into a calendar date
///
/// Accepts plain dates, datetimes, and RFC 3339 timestamps; timestamps are
/// reduced to their date component.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date(" 2024-01-15 "), Some(expected));
    }

    #[test]
    fn test_parse_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15 10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T10:30:00+02:00"), Some(expected));
    }

    #[test]
    fn test_reject_garbage() {
        assert_eq!(parse_date("someday"), None);
        assert_eq!(parse_date("2024-13-99"), None);
        assert_eq!(parse_date(""), None);
    }
}
