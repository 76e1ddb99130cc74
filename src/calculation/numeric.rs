//! Lenient numeric field parsing.
//!
//! Rates, distances and odometer readings arrive as free text. Anything that
//! cannot be interpreted parses to `None`, which the rate cascade and the
//! distance resolver treat as "fall through to the next tier".

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

/// Parses a loosely-formatted decimal value.
///
/// Accepts an optional leading `$` and surrounding whitespace. Returns
/// `None` for anything non-numeric.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::parse_decimal;
///
/// assert_eq!(parse_decimal(" $45.50 "), Some(Decimal::new(4550, 2)));
/// assert_eq!(parse_decimal("45"), Some(Decimal::new(45, 0)));
/// assert_eq!(parse_decimal("n/a"), None);
/// ```
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim().trim_start_matches('$').trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| f64::from_str(trimmed).ok().and_then(Decimal::from_f64))
}

/// Parses an optional field with [`parse_decimal`].
pub fn parse_optional_decimal(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(parse_decimal)
}

/// Parses a "lat,lon" position descriptor.
///
/// Both components must parse as floats and fall inside valid coordinate
/// ranges; otherwise the descriptor is treated as an odometer reading
/// elsewhere, not a GPS fix.
pub fn parse_lat_lon(raw: &str) -> Option<(f64, f64)> {
    let (lat_text, lon_text) = raw.trim().split_once(',')?;
    let lat = f64::from_str(lat_text.trim()).ok()?;
    let lon = f64::from_str(lon_text.trim()).ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return None;
    }
    Some((lat, lon))
}

/// Extracts the operator-entered quantity from an add-on display string.
///
/// The scheduling UI stores add-ons as `"<computed> hrs (<qty> qty)"`; only
/// the quantity inside the parentheses is authoritative. A plain number is
/// accepted as a bare quantity.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::parse_quantity;
///
/// assert_eq!(parse_quantity("1.5 hrs (3 qty)"), Some(Decimal::new(3, 0)));
/// assert_eq!(parse_quantity("2"), Some(Decimal::new(2, 0)));
/// assert_eq!(parse_quantity("pending"), None);
/// ```
pub fn parse_quantity(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if let (Some(open), Some(close)) = (trimmed.rfind('('), trimmed.rfind(')')) {
        if open < close {
            let inner = trimmed[open + 1..close]
                .trim()
                .trim_end_matches("qty")
                .trim();
            return parse_decimal(inner);
        }
    }
    parse_decimal(trimmed)
}
