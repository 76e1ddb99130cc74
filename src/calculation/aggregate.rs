//! Batch report aggregation.
//!
//! Groups raw entries by employee and UTC calendar date, runs the per-entry
//! hours computation and the daily band attribution, resolves rates through
//! the override cascade and assembles the full [`PayReport`]. The whole pass
//! is pure and synchronous: every report run recomputes from the raw
//! entries, and a malformed record degrades to a zero row without touching
//! any other employee or day.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{
    DayBreakdown, EmployeeProfile, EmployeeTotals, EntryAttribution, EntryKind, PayReport,
    ReportTotals, TimesheetEntry,
};

use super::daily_attribution::attribute_daily_hours;
use super::entry_hours::{ComputedEntry, compute_entry_hours};
use super::rates::{resolve_site_rate, resolve_travel_rate};

/// Ephemeral accumulator for one employee on one UTC calendar date.
///
/// Rate overrides are last-write-wins in input iteration order: a later
/// entry's non-null override replaces an earlier one for the whole day.
#[derive(Debug, Default)]
struct DayAggregate {
    site_hours: Decimal,
    travel_hours: Decimal,
    site_rate_override: Option<Decimal>,
    drive_rate_override: Option<Decimal>,
    /// Indices into the computed-entry vec, input order.
    site_entries: Vec<usize>,
    drive_entries: Vec<usize>,
}

/// Computes the full pay report for a batch of raw entries.
///
/// `from_date` anchors entries whose own timestamps cannot supply a date.
/// Entries whose type matches neither "site" nor "drive" still appear in the
/// output with zero hours and pay, so the report's entry list stays aligned
/// with the input.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::calculate_report;
/// use timesheet_engine::config::PayPolicy;
/// use timesheet_engine::models::TimesheetEntry;
///
/// let mut entry = TimesheetEntry::new("emp_001", "Site Time");
/// entry.clock_in = Some("2026-02-09T07:00:00Z".to_string());
/// entry.clock_out = Some("2026-02-09T15:00:00Z".to_string());
///
/// let from_date = NaiveDate::from_ymd_opt(2026, 2, 9).unwrap();
/// let report = calculate_report(&[entry], &[], from_date, &PayPolicy::default());
///
/// assert_eq!(report.totals.reg_hours, Decimal::new(8, 0));
/// assert_eq!(report.totals.gross_pay, Decimal::new(36000, 2)); // 8h x $45
/// ```
pub fn calculate_report(
    entries: &[TimesheetEntry],
    profiles: &[EmployeeProfile],
    from_date: NaiveDate,
    policy: &PayPolicy,
) -> PayReport {
    let computed: Vec<ComputedEntry> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| compute_entry_hours(index, entry, from_date, policy))
        .collect();

    let profile_rates: HashMap<&str, (Option<Decimal>, Option<Decimal>)> = profiles
        .iter()
        .map(|p| (p.id.as_str(), (p.hourly_rate_site, p.hourly_rate_drive)))
        .collect();

    // Group by employee + UTC date, accumulating hours and overrides in
    // input order (last-seen override wins for the day).
    let mut days: BTreeMap<(String, NaiveDate), DayAggregate> = BTreeMap::new();
    for (index, entry) in computed.iter().enumerate() {
        if entry.kind == EntryKind::Other {
            continue;
        }
        let key = (entry.employee.clone(), entry.day(from_date));
        let aggregate = days.entry(key).or_default();

        if let Some(rate) = entry.site_rate_override {
            aggregate.site_rate_override = Some(rate);
        }
        if let Some(rate) = entry.drive_rate_override {
            aggregate.drive_rate_override = Some(rate);
        }

        match entry.kind {
            EntryKind::Site => {
                aggregate.site_hours += entry.hours;
                aggregate.site_entries.push(index);
            }
            EntryKind::Drive => {
                aggregate.travel_hours += entry.hours;
                aggregate.drive_entries.push(index);
            }
            EntryKind::Other => unreachable!("filtered above"),
        }
    }

    let mut attributions: Vec<EntryAttribution> = computed
        .iter()
        .map(|entry| zero_attribution(entry, from_date))
        .collect();
    let mut day_breakdowns = Vec::with_capacity(days.len());

    for ((employee, date), aggregate) in &days {
        let (profile_site, profile_drive) = profile_rates
            .get(employee.as_str())
            .copied()
            .unwrap_or((None, None));

        // Chronological order is load-bearing: it decides which entry
        // receives Regular versus Overtime hours. Ties and missing
        // clock-ins fall back to input order.
        let mut site_order = aggregate.site_entries.clone();
        site_order.sort_by_key(|&index| (computed[index].clock_in, index));

        let site_hours: Vec<Decimal> =
            site_order.iter().map(|&index| computed[index].hours).collect();
        let splits = attribute_daily_hours(&site_hours, policy);

        let day_site_rate = resolve_site_rate(
            None,
            aggregate.site_rate_override,
            profile_site,
            policy,
        );
        let day_travel_rate = resolve_travel_rate(
            None,
            aggregate.drive_rate_override,
            profile_drive,
            policy,
        );

        let mut day_total_pay = Decimal::ZERO;
        let mut day_reg = Decimal::ZERO;
        let mut day_ot = Decimal::ZERO;
        let mut day_dt = Decimal::ZERO;

        for (&index, split) in site_order.iter().zip(&splits) {
            let entry = &computed[index];
            let rate = resolve_site_rate(
                entry.site_rate_override,
                aggregate.site_rate_override,
                profile_site,
                policy,
            );

            let row = &mut attributions[index];
            row.reg_hours = split.reg_hours;
            row.ot_hours = split.ot_hours;
            row.dt_hours = split.dt_hours;
            row.reg_pay = (split.reg_hours * rate).round_dp(2);
            row.ot_pay = (split.ot_hours * rate * policy.multipliers.overtime).round_dp(2);
            row.dt_pay = (split.dt_hours * rate * policy.multipliers.doubletime).round_dp(2);

            day_reg += split.reg_hours;
            day_ot += split.ot_hours;
            day_dt += split.dt_hours;
            day_total_pay += row.reg_pay + row.ot_pay + row.dt_pay;
        }

        for &index in &aggregate.drive_entries {
            let entry = &computed[index];
            let rate = resolve_travel_rate(
                entry.drive_rate_override,
                aggregate.drive_rate_override,
                profile_drive,
                policy,
            );

            let row = &mut attributions[index];
            row.travel_hours = entry.hours;
            row.travel_pay = (entry.hours * rate).round_dp(2);
            day_total_pay += row.travel_pay;
        }

        day_breakdowns.push(DayBreakdown {
            employee: employee.clone(),
            date: *date,
            site_hours: aggregate.site_hours,
            travel_hours: aggregate.travel_hours,
            reg_hours: day_reg,
            ot_hours: day_ot,
            dt_hours: day_dt,
            site_rate: day_site_rate,
            travel_rate: day_travel_rate,
            total_pay: day_total_pay,
        });
    }

    let employees = employee_totals(&attributions);
    let totals = report_totals(&day_breakdowns, &employees);

    PayReport {
        entries: attributions,
        days: day_breakdowns,
        employees,
        totals,
    }
}

/// An all-zero attribution row carrying the entry's identity and hours.
fn zero_attribution(entry: &ComputedEntry, from_date: NaiveDate) -> EntryAttribution {
    EntryAttribution {
        entry_index: entry.index,
        employee: entry.employee.clone(),
        date: entry.day(from_date),
        kind: entry.kind,
        hours: entry.hours,
        distance: entry.distance,
        reg_hours: Decimal::ZERO,
        ot_hours: Decimal::ZERO,
        dt_hours: Decimal::ZERO,
        travel_hours: Decimal::ZERO,
        reg_pay: Decimal::ZERO,
        ot_pay: Decimal::ZERO,
        dt_pay: Decimal::ZERO,
        travel_pay: Decimal::ZERO,
    }
}

/// Sums attribution rows into per-employee totals, sorted by employee id.
fn employee_totals(attributions: &[EntryAttribution]) -> Vec<EmployeeTotals> {
    let mut by_employee: BTreeMap<&str, EmployeeTotals> = BTreeMap::new();

    for row in attributions {
        if row.kind == EntryKind::Other {
            continue;
        }
        let totals = by_employee
            .entry(row.employee.as_str())
            .or_insert_with(|| EmployeeTotals {
                employee: row.employee.clone(),
                reg_hours: Decimal::ZERO,
                ot_hours: Decimal::ZERO,
                dt_hours: Decimal::ZERO,
                travel_hours: Decimal::ZERO,
                reg_pay: Decimal::ZERO,
                ot_pay: Decimal::ZERO,
                dt_pay: Decimal::ZERO,
                travel_pay: Decimal::ZERO,
                total_pay: Decimal::ZERO,
            });

        totals.reg_hours += row.reg_hours;
        totals.ot_hours += row.ot_hours;
        totals.dt_hours += row.dt_hours;
        totals.travel_hours += row.travel_hours;
        totals.reg_pay += row.reg_pay;
        totals.ot_pay += row.ot_pay;
        totals.dt_pay += row.dt_pay;
        totals.travel_pay += row.travel_pay;
        totals.total_pay += row.reg_pay + row.ot_pay + row.dt_pay + row.travel_pay;
    }

    by_employee.into_values().collect()
}

/// Grand totals across the report.
fn report_totals(days: &[DayBreakdown], employees: &[EmployeeTotals]) -> ReportTotals {
    ReportTotals {
        site_hours: days.iter().map(|d| d.site_hours).sum(),
        travel_hours: days.iter().map(|d| d.travel_hours).sum(),
        reg_hours: days.iter().map(|d| d.reg_hours).sum(),
        ot_hours: days.iter().map(|d| d.ot_hours).sum(),
        dt_hours: days.iter().map(|d| d.dt_hours).sum(),
        gross_pay: employees.iter().map(|e| e.total_pay).sum(),
    }
}
