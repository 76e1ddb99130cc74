//! Calculation logic for the Timesheet Pay Engine.
//!
//! This module contains the full computation pipeline: lenient timestamp and
//! numeric parsing, drive distance resolution, per-entry hours computation,
//! the hourly-rate override cascade, progressive daily Regular/Overtime/
//! Doubletime band attribution, and the batch aggregation that assembles a
//! complete pay report.

mod aggregate;
mod daily_attribution;
mod distance;
mod entry_hours;
mod numeric;
mod rates;
mod timestamp;

pub use aggregate::calculate_report;
pub use daily_attribution::{BandSplit, attribute_daily_hours};
pub use distance::{
    DistanceSource, EARTH_RADIUS_MILES, ResolvedDistance, haversine_miles, resolve_distance,
};
pub use entry_hours::{ComputedEntry, compute_entry_hours};
pub use numeric::{parse_decimal, parse_lat_lon, parse_optional_decimal, parse_quantity};
pub use rates::{resolve_rate, resolve_site_rate, resolve_travel_rate};
pub use timestamp::{ParseIssue, parse_optional_timestamp, parse_timestamp};
