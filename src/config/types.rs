//! Policy configuration types for the Timesheet Pay Engine.
//!
//! This module contains the strongly-typed pay policy structure that is
//! deserialized from the YAML policy file. The policy carries every
//! tunable constant the calculation uses: daily band thresholds, band
//! multipliers, default rates, drive-time constants and add-on unit hours.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Named policy for site entries that have a clock-in but no clock-out.
///
/// The upstream system's behavior here was ambiguous, so the engine makes
/// the choice explicit and configurable rather than replicating an accident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingClockOutPolicy {
    /// The entry contributes zero hours (still-clocked-in treated as unpaid
    /// until the record is completed).
    ZeroHours,
    /// The entry contributes the policy's `scheduled_day_hours`.
    ScheduledDayHours,
}

/// Multipliers applied to the resolved site rate per pay band.
#[derive(Debug, Clone, Deserialize)]
pub struct BandMultipliers {
    /// Multiplier for Overtime hours (8-12 cumulative daily).
    pub overtime: Decimal,
    /// Multiplier for Doubletime hours (12+ cumulative daily).
    pub doubletime: Decimal,
}

/// Constants for converting drive distance into paid drive time.
#[derive(Debug, Clone, Deserialize)]
pub struct DriveTimeConfig {
    /// Assumed average travel speed in miles per hour.
    pub average_speed_mph: Decimal,
    /// Traffic/loading overhead multiplier applied to raw travel time.
    pub driving_factor: Decimal,
    /// Paid hours per dump/washout unit.
    pub dump_washout_unit_hours: Decimal,
    /// Paid hours per shop-time unit.
    pub shop_time_unit_hours: Decimal,
}

/// Fallback rates used when neither an entry override nor an employee
/// profile rate is available.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultRates {
    /// Hardcoded fallback site rate in dollars per hour.
    pub site: Decimal,
    /// Travel rate as a fraction of the site rate default.
    pub travel_factor: Decimal,
}

/// The complete pay policy for a report calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPolicy {
    /// Daily Regular band width in hours (site hours 0 to this threshold).
    pub regular_daily_hours: Decimal,
    /// Maximum Overtime hours per day (the Overtime band width).
    pub overtime_daily_cap: Decimal,
    /// Band pay multipliers.
    pub multipliers: BandMultipliers,
    /// Fallback rates.
    pub default_rates: DefaultRates,
    /// Drive-time conversion constants.
    pub drive_time: DriveTimeConfig,
    /// Behavior for site entries missing a clock-out.
    pub missing_clock_out: MissingClockOutPolicy,
    /// Hours credited for a missing clock-out under `ScheduledDayHours`.
    pub scheduled_day_hours: Decimal,
}

impl PayPolicy {
    /// The cumulative daily threshold above which Doubletime accrues.
    ///
    /// Derived as the Regular band width plus the Overtime cap, so the
    /// Overtime band can never exceed its cap.
    pub fn doubletime_threshold(&self) -> Decimal {
        self.regular_daily_hours + self.overtime_daily_cap
    }

    /// The fallback travel rate: the default site rate scaled by the travel
    /// factor (45.00 x 0.75 = 33.75 under the default policy).
    pub fn default_travel_rate(&self) -> Decimal {
        self.default_rates.site * self.default_rates.travel_factor
    }
}

impl Default for PayPolicy {
    /// The shipped policy: 8h Regular, 4h Overtime cap, 1.5x/2.0x
    /// multipliers, $45.00 default site rate, 0.75 travel factor, 50 mph at
    /// a 1.2 driving factor, 0.5h/0.25h add-on units, missing clock-out
    /// treated as zero hours.
    fn default() -> Self {
        Self {
            regular_daily_hours: Decimal::new(8, 0),
            overtime_daily_cap: Decimal::new(4, 0),
            multipliers: BandMultipliers {
                overtime: Decimal::new(15, 1),
                doubletime: Decimal::new(2, 0),
            },
            default_rates: DefaultRates {
                site: Decimal::new(4500, 2),
                travel_factor: Decimal::new(75, 2),
            },
            drive_time: DriveTimeConfig {
                average_speed_mph: Decimal::new(50, 0),
                driving_factor: Decimal::new(12, 1),
                dump_washout_unit_hours: Decimal::new(5, 1),
                shop_time_unit_hours: Decimal::new(25, 2),
            },
            missing_clock_out: MissingClockOutPolicy::ZeroHours,
            scheduled_day_hours: Decimal::new(8, 0),
        }
    }
}
