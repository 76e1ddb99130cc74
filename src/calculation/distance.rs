//! Drive distance resolution.
//!
//! A drive entry's distance comes from the first usable source in priority
//! order: the operator-entered manual override, a GPS haversine between the
//! clock-in and clock-out fixes, or the difference between two odometer
//! readings. Anything unusable resolves to zero miles.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::models::TimesheetEntry;

use super::numeric::{parse_decimal, parse_lat_lon, parse_optional_decimal};

/// Mean Earth radius in miles, used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Which source produced a resolved distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceSource {
    /// Operator-entered manual override.
    Manual,
    /// Haversine between two GPS fixes.
    Gps,
    /// Difference between two odometer readings.
    Odometer,
    /// No usable source; distance is zero.
    None,
}

/// A resolved drive distance and its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDistance {
    /// Distance in miles, never negative.
    pub miles: Decimal,
    /// The source tier that produced it.
    pub source: DistanceSource,
}

impl ResolvedDistance {
    fn none() -> Self {
        Self {
            miles: Decimal::ZERO,
            source: DistanceSource::None,
        }
    }
}

/// Resolves the distance for a drive entry.
///
/// Priority: positive manual override, then GPS haversine when both
/// locations parse as "lat,lon" pairs, then odometer difference when both
/// parse as plain numbers, then zero. A manual override that is present but
/// non-positive or non-numeric falls through to the next tier.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::{resolve_distance, DistanceSource};
/// use timesheet_engine::models::TimesheetEntry;
///
/// let mut entry = TimesheetEntry::new("emp_001", "Drive Time");
/// entry.manual_distance = Some("50".to_string());
/// entry.location_in = Some("35.1495,-90.0490".to_string());
/// entry.location_out = Some("36.1627,-86.7816".to_string());
///
/// let resolved = resolve_distance(&entry);
/// assert_eq!(resolved.source, DistanceSource::Manual);
/// assert_eq!(resolved.miles, Decimal::new(50, 0));
/// ```
pub fn resolve_distance(entry: &TimesheetEntry) -> ResolvedDistance {
    if let Some(manual) = parse_optional_decimal(entry.manual_distance.as_deref()) {
        if manual > Decimal::ZERO {
            return ResolvedDistance {
                miles: manual,
                source: DistanceSource::Manual,
            };
        }
    }

    let location_in = entry.location_in.as_deref().unwrap_or("");
    let location_out = entry.location_out.as_deref().unwrap_or("");
    if location_in.is_empty() || location_out.is_empty() {
        return ResolvedDistance::none();
    }

    if let (Some(from), Some(to)) = (parse_lat_lon(location_in), parse_lat_lon(location_out)) {
        let miles = haversine_miles(from, to);
        return ResolvedDistance {
            miles: Decimal::from_f64(miles).unwrap_or_default(),
            source: DistanceSource::Gps,
        };
    }

    if let (Some(start), Some(end)) = (parse_decimal(location_in), parse_decimal(location_out)) {
        let difference = (end - start).max(Decimal::ZERO);
        return ResolvedDistance {
            miles: difference,
            source: DistanceSource::Odometer,
        };
    }

    ResolvedDistance::none()
}

/// Great-circle distance in miles between two (lat, lon) points.
pub fn haversine_miles(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}
