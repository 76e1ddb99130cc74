//! Hourly rate resolution.
//!
//! Rates cascade through four tiers, highest precedence first: the entry's
//! own override, the day-level last-seen override, the employee profile
//! rate, and finally the hardcoded policy default. The cascade is an
//! explicit ordered-candidate scan so the precedence order is independently
//! testable.

use rust_decimal::Decimal;

use crate::config::PayPolicy;

/// Returns the first present candidate, or the fallback when none is.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::resolve_rate;
///
/// let entry_override = None;
/// let day_override = Some(Decimal::new(5000, 2));
/// let profile = Some(Decimal::new(4800, 2));
///
/// let rate = resolve_rate(&[entry_override, day_override, profile], Decimal::new(4500, 2));
/// assert_eq!(rate, Decimal::new(5000, 2));
/// ```
pub fn resolve_rate(candidates: &[Option<Decimal>], fallback: Decimal) -> Decimal {
    candidates
        .iter()
        .find_map(|candidate| *candidate)
        .unwrap_or(fallback)
}

/// Resolves the site rate for a cascade of overrides.
///
/// `entry_override` beats `day_override` beats `profile_rate` beats the
/// policy default of 45.00.
pub fn resolve_site_rate(
    entry_override: Option<Decimal>,
    day_override: Option<Decimal>,
    profile_rate: Option<Decimal>,
    policy: &PayPolicy,
) -> Decimal {
    resolve_rate(
        &[entry_override, day_override, profile_rate],
        policy.default_rates.site,
    )
}

/// Resolves the travel rate for a cascade of overrides.
///
/// Same cascade as site, but the hardcoded fallback is the site default
/// scaled by the travel factor (33.75 under the default policy).
pub fn resolve_travel_rate(
    entry_override: Option<Decimal>,
    day_override: Option<Decimal>,
    profile_rate: Option<Decimal>,
    policy: &PayPolicy,
) -> Decimal {
    resolve_rate(
        &[entry_override, day_override, profile_rate],
        policy.default_travel_rate(),
    )
}
