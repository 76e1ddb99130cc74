//! Timesheet entry model and related types.
//!
//! This module defines the raw [`TimesheetEntry`] record as it arrives from
//! the scheduling store. Field values are kept as the loosely-typed strings
//! the store actually holds (timestamps are not guaranteed canonical, rates
//! arrive as strings or numbers); interpretation happens in the calculation
//! layer, which degrades malformed values to zero contributions.

use serde::{Deserialize, Deserializer, Serialize};

/// The interpreted category of a timesheet entry.
///
/// Entry types are free text in the store; classification is a
/// case-insensitive substring match so that "Site Time", "SITE", "Drive to
/// yard" and similar variants all resolve correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// On-site labor, subject to daily Regular/Overtime/Doubletime bands.
    Site,
    /// Travel time, paid flat at the travel rate.
    Drive,
    /// Unrecognized type; excluded from both site and travel aggregation.
    Other,
}

/// A raw timesheet entry as persisted by the scheduling subsystem.
///
/// Only `employee` and `entry_type` are required; every other field is
/// optional and may hold malformed text. The calculation layer never panics
/// on bad data here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// Identifier of the employee who recorded this entry.
    pub employee: String,
    /// Free-text entry category (matched for "site" / "drive" substrings).
    #[serde(rename = "type")]
    pub entry_type: String,
    /// Clock-in timestamp, ISO-8601-like but not guaranteed canonical.
    #[serde(default)]
    pub clock_in: Option<String>,
    /// Clock-out timestamp; may be absent for an unfinished entry.
    #[serde(default)]
    pub clock_out: Option<String>,
    /// Start of the unpaid lunch window.
    #[serde(default)]
    pub lunch_start: Option<String>,
    /// End of the unpaid lunch window.
    #[serde(default)]
    pub lunch_end: Option<String>,
    /// Position at clock-in: either a "lat,lon" pair or an odometer reading.
    #[serde(default)]
    pub location_in: Option<String>,
    /// Position at clock-out: either a "lat,lon" pair or an odometer reading.
    #[serde(default)]
    pub location_out: Option<String>,
    /// Operator-entered distance override in miles; beats GPS and odometer.
    #[serde(default, deserialize_with = "stringish")]
    pub manual_distance: Option<String>,
    /// Per-entry site rate override; arrives as a string or a number.
    #[serde(default, deserialize_with = "stringish")]
    pub hourly_rate_site: Option<String>,
    /// Per-entry travel rate override; arrives as a string or a number.
    #[serde(default, deserialize_with = "stringish")]
    pub hourly_rate_drive: Option<String>,
    /// Dump/washout add-on display string, "<computed> hrs (<qty> qty)".
    #[serde(default)]
    pub dump_washout: Option<String>,
    /// Shop time add-on display string, "<computed> hrs (<qty> qty)".
    #[serde(default)]
    pub shop_time: Option<String>,
}

impl TimesheetEntry {
    /// Classifies this entry as site labor, drive time, or neither.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::{EntryKind, TimesheetEntry};
    ///
    /// let entry = TimesheetEntry::new("emp_001", "Site Time");
    /// assert_eq!(entry.kind(), EntryKind::Site);
    ///
    /// let entry = TimesheetEntry::new("emp_001", "DRIVE to yard");
    /// assert_eq!(entry.kind(), EntryKind::Drive);
    ///
    /// let entry = TimesheetEntry::new("emp_001", "vacation");
    /// assert_eq!(entry.kind(), EntryKind::Other);
    /// ```
    pub fn kind(&self) -> EntryKind {
        let lowered = self.entry_type.to_lowercase();
        if lowered.contains("site") {
            EntryKind::Site
        } else if lowered.contains("drive") {
            EntryKind::Drive
        } else {
            EntryKind::Other
        }
    }

    /// Creates an entry with only the required fields set.
    ///
    /// Primarily a convenience for tests and doc examples; production callers
    /// deserialize full records from the scheduling store.
    pub fn new(employee: impl Into<String>, entry_type: impl Into<String>) -> Self {
        Self {
            employee: employee.into(),
            entry_type: entry_type.into(),
            clock_in: None,
            clock_out: None,
            lunch_start: None,
            lunch_end: None,
            location_in: None,
            location_out: None,
            manual_distance: None,
            hourly_rate_site: None,
            hourly_rate_drive: None,
            dump_washout: None,
            shop_time: None,
        }
    }
}

/// Accepts a JSON string or number and stores it as a string.
///
/// The upstream store is inconsistent about whether rates and distances are
/// quoted; both `"45.50"` and `45.50` must deserialize.
fn stringish<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Text(String),
        Number(f64),
    }

    let value: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        StringOrNumber::Text(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    }))
}
