//! Lenient timestamp parsing.
//!
//! Timestamps in the scheduling store are ISO-8601-like but not canonical:
//! some carry a trailing `Z`, some a numeric offset, some use a space instead
//! of `T`, some omit seconds, and a few hold a bare time of day. All of them
//! are interpreted with naive-UTC semantics; the day boundary everywhere in
//! this engine is the UTC calendar date of clock-in, so offset markers are
//! stripped rather than applied.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// A value inside a timesheet entry that could not be interpreted.
///
/// These never escape the engine: the aggregation boundary folds every
/// variant to a zero contribution so a single bad record cannot abort a
/// report ("never crash the report").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIssue {
    /// The field was absent or empty.
    #[error("field is missing")]
    Missing,
    /// The field was present but not interpretable as a timestamp.
    #[error("malformed timestamp: {raw}")]
    MalformedTimestamp {
        /// The raw text that failed to parse.
        raw: String,
    },
}

/// Datetime formats accepted after offset stripping, tried in order.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Time-of-day formats accepted for values with no date portion.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Parses a loosely-formatted timestamp with naive-UTC semantics.
///
/// Trailing `Z` markers and numeric offsets are stripped, not applied. A
/// date-only value parses to midnight; a time-only value is anchored to
/// `fallback_date` (the report's schedule date).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::calculation::parse_timestamp;
///
/// let fallback = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
///
/// let parsed = parse_timestamp("2026-02-09T07:30:00Z", fallback).unwrap();
/// assert_eq!(parsed.to_string(), "2026-02-09 07:30:00");
///
/// // Offsets are stripped, never applied.
/// let parsed = parse_timestamp("2026-02-09T07:30:00-05:00", fallback).unwrap();
/// assert_eq!(parsed.to_string(), "2026-02-09 07:30:00");
///
/// // Bare time of day anchors to the fallback date.
/// let parsed = parse_timestamp("07:30", fallback).unwrap();
/// assert_eq!(parsed.to_string(), "2026-02-09 07:30:00");
/// ```
pub fn parse_timestamp(raw: &str, fallback_date: NaiveDate) -> Result<NaiveDateTime, ParseIssue> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseIssue::Missing);
    }

    let stripped = strip_offset(trimmed);

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&stripped, format) {
            return Ok(parsed);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&stripped, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight);
        }
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(&stripped, format) {
            return Ok(fallback_date.and_time(time));
        }
    }

    Err(ParseIssue::MalformedTimestamp {
        raw: trimmed.to_string(),
    })
}

/// Parses an optional timestamp field, treating `None` as [`ParseIssue::Missing`].
pub fn parse_optional_timestamp(
    raw: Option<&str>,
    fallback_date: NaiveDate,
) -> Result<NaiveDateTime, ParseIssue> {
    match raw {
        Some(value) => parse_timestamp(value, fallback_date),
        None => Err(ParseIssue::Missing),
    }
}

/// Drops a trailing `Z` marker or numeric UTC offset from the time portion.
fn strip_offset(raw: &str) -> String {
    let mut stripped = raw.trim_end_matches(['Z', 'z']).to_string();

    // A '+' or '-' inside the time portion followed only by digits and
    // colons is an offset marker; the date portion's hyphens are before the
    // separator and stay untouched.
    if let Some(separator) = stripped.find(['T', ' ']) {
        let time_portion = &stripped[separator + 1..];
        if let Some(sign) = time_portion.rfind(['+', '-']) {
            let tail = &time_portion[sign + 1..];
            if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit() || c == ':') {
                stripped.truncate(separator + 1 + sign);
            }
        }
    }

    stripped
}
