//! Validation helpers for note and birthday date strings
//!
//! Validation happens in two stages: a shape check against a fixed pattern,
//! then a calendar check (month range, time range, legal day for the month).
//! Both stages are total: malformed input yields `false` / `None`, never a panic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Earliest calendar year accepted; year 0 does not exist
pub const MIN_YEAR: i32 = 1;

/// Latest calendar year accepted
pub const MAX_YEAR: i32 = 9999;

/// `YYYY-M[M]-D[D] HH:MM`
static NOTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2}) (?P<hour>[0-9]{2}):(?P<minute>[0-9]{2})$",
    )
    .expect("note pattern is a valid regex")
});

/// `YYYY-MM-DD`
static BIRTHDAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<year>[0-9]{4})-(?P<month>[0-9]{2})-(?P<day>[0-9]{2})$")
        .expect("birthday pattern is a valid regex")
});

/// Check whether the input has the shape of a note datetime
///
/// Only the shape is checked; `2024-13-40 99:99` matches.
pub fn matches_note_shape(input: &str) -> bool {
    NOTE_PATTERN.is_match(input)
}

/// Check whether the input has the shape of a birthday date
pub fn matches_birthday_shape(input: &str) -> bool {
    BIRTHDAY_PATTERN.is_match(input)
}

/// Parse a note datetime string into a local calendar timestamp
///
/// # Arguments
/// * `input` - String in `YYYY-M[M]-D[D] HH:MM` format
///
/// # Returns
/// The timestamp, or `None` when the shape or any calendar value is illegal
pub fn parse_note_datetime(input: &str) -> Option<NaiveDateTime> {
    let caps = NOTE_PATTERN.captures(input)?;
    let year: i32 = caps["year"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;
    let hour: u32 = caps["hour"].parse().ok()?;
    let minute: u32 = caps["minute"].parse().ok()?;

    if year < MIN_YEAR || !(1..=12).contains(&month) || hour >= 24 || minute >= 60 {
        return None;
    }

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(date.and_time(time))
}

/// Parse a birthday string into a calendar date
///
/// # Arguments
/// * `input` - String in `YYYY-MM-DD` format
///
/// # Returns
/// The date of birth, or `None` when the shape or the date is illegal
pub fn parse_birthday(input: &str) -> Option<NaiveDate> {
    let caps = BIRTHDAY_PATTERN.captures(input)?;
    let year: i32 = caps["year"].parse().ok()?;
    let month: u32 = caps["month"].parse().ok()?;
    let day: u32 = caps["day"].parse().ok()?;

    if year < MIN_YEAR || !(1..=12).contains(&month) {
        return None;
    }

    // Catches Feb 30, Apr 31 and Feb 29 outside leap years
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Validate a note datetime string (shape and calendar values)
pub fn is_valid_note_datetime(input: &str) -> bool {
    parse_note_datetime(input).is_some()
}

/// Validate a birthday string (shape and calendar values)
pub fn is_valid_birthday(input: &str) -> bool {
    parse_birthday(input).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_accepts_legal_values() {
        assert!(is_valid_note_datetime("2025-03-15 09:30"));
        assert!(is_valid_note_datetime("2025-3-5 00:00"));
        assert!(is_valid_note_datetime("2024-02-29 23:59"));
    }

    #[test]
    fn test_note_rejects_out_of_range_values() {
        assert!(!is_valid_note_datetime("2025-13-01 10:00"));
        assert!(!is_valid_note_datetime("2025-00-01 10:00"));
        assert!(!is_valid_note_datetime("2025-01-01 24:00"));
        assert!(!is_valid_note_datetime("2025-01-01 10:60"));
        assert!(is_valid_note_datetime("2025-04-30 10:00"));
        assert!(!is_valid_note_datetime("2025-04-31 10:00"));
        assert!(!is_valid_note_datetime("2025-02-29 10:00"));
        assert!(!is_valid_note_datetime("2025-02-30 10:00"));
    }

    #[test]
    fn test_note_shape() {
        assert!(matches_note_shape("2025-13-40 99:99"));
        assert!(!matches_note_shape("2025-01-01 9:30"));
        assert!(!matches_note_shape("25-01-01 09:30"));
        assert!(!matches_note_shape("2025-001-01 09:30"));
        assert!(!matches_note_shape("2025-01-01T09:30"));
        assert!(!matches_note_shape("2025-01-01 09:30 "));
        assert!(!matches_note_shape(""));
        assert!(!is_valid_note_datetime("2025-01-01"));
    }

    #[test]
    fn test_birthday_requires_zero_padding() {
        assert!(is_valid_birthday("1990-03-10"));
        assert!(!is_valid_birthday("1990-3-10"));
        assert!(!is_valid_birthday("1990-03-1"));
        assert!(!is_valid_birthday("1990-03-10 10:00"));
        assert!(matches_birthday_shape("1990-99-99"));
        assert!(!matches_birthday_shape("90-03-10"));
    }

    #[test]
    fn test_birthday_calendar_values() {
        assert!(is_valid_birthday("2000-02-29"));
        assert!(!is_valid_birthday("1900-02-29"));
        assert!(!is_valid_birthday("1990-02-30"));
        assert!(!is_valid_birthday("1990-13-01"));
        assert!(!is_valid_birthday("1990-00-10"));
        assert!(!is_valid_birthday("1990-06-00"));
    }

    #[test]
    fn test_year_zero_is_rejected() {
        assert!(matches_birthday_shape("0000-01-01"));
        assert!(!is_valid_birthday("0000-01-01"));
        assert!(!is_valid_birthday("0000-03-10"));
        assert!(matches_note_shape("0000-01-01 10:00"));
        assert!(!is_valid_note_datetime("0000-01-01 10:00"));
        assert!(is_valid_birthday("0001-01-01"));
        assert!(is_valid_note_datetime("9999-12-31 23:59"));
    }

    #[test]
    fn test_non_ascii_digits_are_a_shape_error() {
        assert!(!matches_note_shape("\u{662}\u{660}\u{662}\u{665}-01-01 10:00"));
        assert!(!matches_birthday_shape("\u{662}\u{660}\u{662}\u{665}-01-01"));
        assert!(!matches_note_shape("2025-01-01 \u{661}\u{660}:00"));
    }

    #[test]
    fn test_parse_note_datetime_components() {
        let parsed = parse_note_datetime("2025-3-5 07:08").unwrap();
        assert_eq!(parsed.to_string(), "2025-03-05 07:08:00");
        assert!(parse_note_datetime("garbage").is_none());
    }
}
