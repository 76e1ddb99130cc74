//! Progressive daily band attribution.
//!
//! The core payroll rule: one employee-day's site hours fill the Regular,
//! Overtime and Doubletime bands in chronological order. Certified-payroll
//! reporting attributes overtime onto the specific work segments that pushed
//! the day over a threshold, not onto an undifferentiated daily total, so a
//! split shift's later entry absorbs the overtime even when it is the
//! shorter one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayPolicy;

/// Hours from one entry split across the three daily bands.
///
/// For every entry, `reg_hours + ot_hours + dt_hours` equals the entry's
/// site hours; summed over a day the bands reproduce the day total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandSplit {
    /// Hours in the Regular band (cumulative daily 0-8).
    pub reg_hours: Decimal,
    /// Hours in the Overtime band (cumulative daily 8-12).
    pub ot_hours: Decimal,
    /// Hours in the Doubletime band (cumulative daily 12+).
    pub dt_hours: Decimal,
}

impl BandSplit {
    /// A split with zero hours in every band.
    pub const ZERO: BandSplit = BandSplit {
        reg_hours: Decimal::ZERO,
        ot_hours: Decimal::ZERO,
        dt_hours: Decimal::ZERO,
    };

    /// Total hours across the three bands.
    pub fn total(&self) -> Decimal {
        self.reg_hours + self.ot_hours + self.dt_hours
    }
}

/// Splits a day's site entries across the Regular/Overtime/Doubletime bands.
///
/// `entry_hours` must already be in chronological clock-in order; the caller
/// owns the sort because ordering decides which entry receives Regular
/// versus Overtime hours. A running tally walks the day's cumulative hours
/// and each entry takes the slice of each band its `[start, end)` span
/// covers:
///
/// - Regular: `min(8, end) - min(8, start)`
/// - Overtime: `min(12, end) - min(12, max(8, start))`
/// - Doubletime: `end - max(12, start)`
///
/// each floored at zero. The `min(12, ...)` terms are what cap Overtime at
/// 4 hours per day; Doubletime is uncapped.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::attribute_daily_hours;
/// use timesheet_engine::config::PayPolicy;
///
/// // A 13-hour day: 8 Regular, 4 Overtime, 1 Doubletime.
/// let splits = attribute_daily_hours(&[Decimal::new(13, 0)], &PayPolicy::default());
/// assert_eq!(splits[0].reg_hours, Decimal::new(8, 0));
/// assert_eq!(splits[0].ot_hours, Decimal::new(4, 0));
/// assert_eq!(splits[0].dt_hours, Decimal::new(1, 0));
/// ```
pub fn attribute_daily_hours(entry_hours: &[Decimal], policy: &PayPolicy) -> Vec<BandSplit> {
    let reg_threshold = policy.regular_daily_hours;
    let dt_threshold = policy.doubletime_threshold();

    let mut tally = Decimal::ZERO;
    entry_hours
        .iter()
        .map(|&hours| {
            let start = tally;
            let end = start + hours.max(Decimal::ZERO);
            tally = end;

            BandSplit {
                reg_hours: (end.min(reg_threshold) - start.min(reg_threshold)).max(Decimal::ZERO),
                ot_hours: (end.min(dt_threshold) - start.max(reg_threshold).min(dt_threshold))
                    .max(Decimal::ZERO),
                dt_hours: (end - start.max(dt_threshold)).max(Decimal::ZERO),
            }
        })
        .collect()
}
