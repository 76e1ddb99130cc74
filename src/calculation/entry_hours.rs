//! Per-entry hours computation.
//!
//! Turns one raw [`TimesheetEntry`] into a [`ComputedEntry`]: interpreted
//! kind, parsed clock-in, worked hours and (for drive entries) resolved
//! distance. Every malformed field degrades to a zero contribution; this
//! function never fails and never panics on bad data.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::config::{MissingClockOutPolicy, PayPolicy};
use crate::models::{EntryKind, TimesheetEntry};

use super::distance::{ResolvedDistance, resolve_distance};
use super::numeric::{parse_optional_decimal, parse_quantity};
use super::timestamp::parse_optional_timestamp;

/// The interpreted form of a raw timesheet entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedEntry {
    /// Position of the source entry in the input array.
    pub index: usize,
    /// The employee the entry belongs to.
    pub employee: String,
    /// The interpreted category.
    pub kind: EntryKind,
    /// Parsed clock-in, when the raw value was interpretable.
    pub clock_in: Option<NaiveDateTime>,
    /// Worked hours (site) or paid travel hours (drive), never negative.
    pub hours: Decimal,
    /// Resolved drive distance in miles (zero for site entries).
    pub distance: Decimal,
    /// Per-entry site rate override, parsed leniently.
    pub site_rate_override: Option<Decimal>,
    /// Per-entry travel rate override, parsed leniently.
    pub drive_rate_override: Option<Decimal>,
}

impl ComputedEntry {
    /// The UTC calendar date this entry is grouped under.
    ///
    /// The clock-in date when available, otherwise the report's schedule
    /// fallback date.
    pub fn day(&self, fallback_date: NaiveDate) -> NaiveDate {
        self.clock_in.map_or(fallback_date, |ts| ts.date())
    }
}

/// Computes hours (and distance for drive entries) for one raw entry.
///
/// Site entries: clock-out minus clock-in, minus the lunch window when both
/// lunch bounds parse and the end is after the start, floored at zero. A
/// missing clock-out is governed by the policy's named
/// [`MissingClockOutPolicy`] rather than an implicit guess.
///
/// Drive entries: resolved distance divided by the policy's average speed,
/// scaled by the driving factor, plus fixed-hour add-ons (dump/washout and
/// shop time) multiplied by their operator-entered quantities.
///
/// Unknown entry types compute zero hours and are excluded from both site
/// and travel aggregation downstream.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::compute_entry_hours;
/// use timesheet_engine::config::PayPolicy;
/// use timesheet_engine::models::TimesheetEntry;
///
/// let mut entry = TimesheetEntry::new("emp_001", "Site Time");
/// entry.clock_in = Some("2026-02-09T07:00:00Z".to_string());
/// entry.clock_out = Some("2026-02-09T15:30:00Z".to_string());
/// entry.lunch_start = Some("2026-02-09T12:00:00Z".to_string());
/// entry.lunch_end = Some("2026-02-09T12:30:00Z".to_string());
///
/// let fallback = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// let computed = compute_entry_hours(0, &entry, fallback, &PayPolicy::default());
/// assert_eq!(computed.hours, Decimal::new(80, 1)); // 8.5 - 0.5 lunch
/// ```
pub fn compute_entry_hours(
    index: usize,
    entry: &TimesheetEntry,
    fallback_date: NaiveDate,
    policy: &PayPolicy,
) -> ComputedEntry {
    let kind = entry.kind();
    let clock_in = parse_optional_timestamp(entry.clock_in.as_deref(), fallback_date).ok();

    let (hours, distance) = match kind {
        EntryKind::Site => (site_hours(entry, clock_in, fallback_date, policy), Decimal::ZERO),
        EntryKind::Drive => drive_hours(entry, policy),
        EntryKind::Other => (Decimal::ZERO, Decimal::ZERO),
    };

    ComputedEntry {
        index,
        employee: entry.employee.clone(),
        kind,
        clock_in,
        hours: hours.max(Decimal::ZERO),
        distance,
        site_rate_override: parse_optional_decimal(entry.hourly_rate_site.as_deref()),
        drive_rate_override: parse_optional_decimal(entry.hourly_rate_drive.as_deref()),
    }
}

/// Site hours: span minus lunch, floored at zero.
fn site_hours(
    entry: &TimesheetEntry,
    clock_in: Option<NaiveDateTime>,
    fallback_date: NaiveDate,
    policy: &PayPolicy,
) -> Decimal {
    let Some(clock_in) = clock_in else {
        // Unparseable clock-in: nothing to anchor the span on.
        return Decimal::ZERO;
    };

    let clock_out = match parse_optional_timestamp(entry.clock_out.as_deref(), fallback_date) {
        Ok(parsed) => parsed,
        Err(_) => {
            return match policy.missing_clock_out {
                MissingClockOutPolicy::ZeroHours => Decimal::ZERO,
                MissingClockOutPolicy::ScheduledDayHours => policy.scheduled_day_hours,
            };
        }
    };

    let span_minutes = (clock_out - clock_in).num_minutes();
    let lunch_minutes = lunch_minutes(entry, fallback_date);

    minutes_to_hours(span_minutes - lunch_minutes)
}

/// Unpaid lunch duration; zero unless both bounds parse and end > start.
fn lunch_minutes(entry: &TimesheetEntry, fallback_date: NaiveDate) -> i64 {
    let start = parse_optional_timestamp(entry.lunch_start.as_deref(), fallback_date);
    let end = parse_optional_timestamp(entry.lunch_end.as_deref(), fallback_date);
    match (start, end) {
        (Ok(start), Ok(end)) if end > start => (end - start).num_minutes(),
        _ => 0,
    }
}

/// Drive hours: distance over average speed times the driving factor, plus
/// fixed-hour add-ons.
fn drive_hours(entry: &TimesheetEntry, policy: &PayPolicy) -> (Decimal, Decimal) {
    let ResolvedDistance { miles, .. } = resolve_distance(entry);

    let drive = &policy.drive_time;
    let mut hours = if miles > Decimal::ZERO {
        miles / drive.average_speed_mph * drive.driving_factor
    } else {
        Decimal::ZERO
    };

    if let Some(qty) = entry.dump_washout.as_deref().and_then(parse_quantity) {
        hours += qty.max(Decimal::ZERO) * drive.dump_washout_unit_hours;
    }
    if let Some(qty) = entry.shop_time.as_deref().and_then(parse_quantity) {
        hours += qty.max(Decimal::ZERO) * drive.shop_time_unit_hours;
    }

    (hours, miles)
}

fn minutes_to_hours(minutes: i64) -> Decimal {
    if minutes <= 0 {
        return Decimal::ZERO;
    }
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
