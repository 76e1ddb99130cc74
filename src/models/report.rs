//! Pay report models for the Timesheet Pay Engine.
//!
//! This module contains the output types produced by a report calculation:
//! per-entry band attributions, per-day breakdowns, per-employee totals and
//! grand totals. All of these are transient, recomputed from the raw entries
//! on every report run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EntryKind;

/// Hours and pay attributed to a single timesheet entry.
///
/// Site entries carry Regular/Overtime/Doubletime hours filled progressively
/// in chronological order within the employee-day; drive entries carry travel
/// hours paid flat. An entry contributes to exactly one side.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{EntryAttribution, EntryKind};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let attribution = EntryAttribution {
///     entry_index: 0,
///     employee: "emp_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
///     kind: EntryKind::Site,
///     hours: Decimal::new(130, 1),
///     distance: Decimal::ZERO,
///     reg_hours: Decimal::new(80, 1),
///     ot_hours: Decimal::new(40, 1),
///     dt_hours: Decimal::new(10, 1),
///     travel_hours: Decimal::ZERO,
///     reg_pay: Decimal::new(36000, 2),
///     ot_pay: Decimal::new(27000, 2),
///     dt_pay: Decimal::new(9000, 2),
///     travel_pay: Decimal::ZERO,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryAttribution {
    /// Position of the source entry in the request's entry array.
    pub entry_index: usize,
    /// The employee this entry belongs to.
    pub employee: String,
    /// The UTC calendar date the entry was grouped under.
    pub date: NaiveDate,
    /// The interpreted category of the source entry.
    pub kind: EntryKind,
    /// Total hours computed for this entry.
    pub hours: Decimal,
    /// Resolved drive distance in miles (zero for site entries).
    pub distance: Decimal,
    /// Hours attributed to the Regular band (0-8 cumulative daily).
    pub reg_hours: Decimal,
    /// Hours attributed to the Overtime band (8-12 cumulative daily).
    pub ot_hours: Decimal,
    /// Hours attributed to the Doubletime band (12+ cumulative daily).
    pub dt_hours: Decimal,
    /// Travel hours (drive entries only, never thresholded).
    pub travel_hours: Decimal,
    /// Regular pay: `reg_hours` x site rate.
    pub reg_pay: Decimal,
    /// Overtime pay: `ot_hours` x site rate x 1.5.
    pub ot_pay: Decimal,
    /// Doubletime pay: `dt_hours` x site rate x 2.0.
    pub dt_pay: Decimal,
    /// Travel pay: `travel_hours` x travel rate.
    pub travel_pay: Decimal,
}

/// Aggregated hours, rates and pay for one employee on one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    /// The employee this breakdown belongs to.
    pub employee: String,
    /// The UTC calendar date of the breakdown.
    pub date: NaiveDate,
    /// Total site hours for the day.
    pub site_hours: Decimal,
    /// Total travel hours for the day.
    pub travel_hours: Decimal,
    /// Regular hours for the day (capped at the regular threshold).
    pub reg_hours: Decimal,
    /// Overtime hours for the day (capped at the daily overtime cap).
    pub ot_hours: Decimal,
    /// Doubletime hours for the day (uncapped).
    pub dt_hours: Decimal,
    /// The site rate the day's bands were paid at.
    pub site_rate: Decimal,
    /// The travel rate the day's drive entries were paid at.
    pub travel_rate: Decimal,
    /// Total pay for the day across all bands and travel.
    pub total_pay: Decimal,
}

/// Totals for one employee across the whole report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeTotals {
    /// The employee these totals belong to.
    pub employee: String,
    /// Total Regular hours.
    pub reg_hours: Decimal,
    /// Total Overtime hours.
    pub ot_hours: Decimal,
    /// Total Doubletime hours.
    pub dt_hours: Decimal,
    /// Total travel hours.
    pub travel_hours: Decimal,
    /// Total Regular pay.
    pub reg_pay: Decimal,
    /// Total Overtime pay.
    pub ot_pay: Decimal,
    /// Total Doubletime pay.
    pub dt_pay: Decimal,
    /// Total travel pay.
    pub travel_pay: Decimal,
    /// Gross pay across all bands and travel.
    pub total_pay: Decimal,
}

/// Grand totals across all employees in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Total site hours across the report.
    pub site_hours: Decimal,
    /// Total travel hours across the report.
    pub travel_hours: Decimal,
    /// Total Regular hours across the report.
    pub reg_hours: Decimal,
    /// Total Overtime hours across the report.
    pub ot_hours: Decimal,
    /// Total Doubletime hours across the report.
    pub dt_hours: Decimal,
    /// Gross pay across the report.
    pub gross_pay: Decimal,
}

/// The full output of a report calculation.
///
/// The reporting layer (out of scope here) owns rendering, filtering and CSV
/// export; this struct carries everything it needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayReport {
    /// One attribution per input entry, in input order.
    pub entries: Vec<EntryAttribution>,
    /// One breakdown per employee-day, sorted by employee then date.
    pub days: Vec<DayBreakdown>,
    /// One totals row per employee, sorted by employee id.
    pub employees: Vec<EmployeeTotals>,
    /// Grand totals across the report.
    pub totals: ReportTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serialization_round_trip() {
        let report = PayReport {
            entries: vec![],
            days: vec![DayBreakdown {
                employee: "emp_001".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 2, 9).unwrap(),
                site_hours: Decimal::new(80, 1),
                travel_hours: Decimal::ZERO,
                reg_hours: Decimal::new(80, 1),
                ot_hours: Decimal::ZERO,
                dt_hours: Decimal::ZERO,
                site_rate: Decimal::new(4500, 2),
                travel_rate: Decimal::new(3375, 2),
                total_pay: Decimal::new(36000, 2),
            }],
            employees: vec![],
            totals: ReportTotals {
                site_hours: Decimal::new(80, 1),
                travel_hours: Decimal::ZERO,
                reg_hours: Decimal::new(80, 1),
                ot_hours: Decimal::ZERO,
                dt_hours: Decimal::ZERO,
                gross_pay: Decimal::new(36000, 2),
            },
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: PayReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
