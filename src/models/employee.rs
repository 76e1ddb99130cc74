//! Employee profile model.
//!
//! This module defines the [`EmployeeProfile`] struct carrying the default
//! rates used when a timesheet entry has no rate override of its own.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-employee default rates from the employee records subsystem.
///
/// Both rates are optional; the rate-resolution cascade falls through to the
/// policy defaults when a profile rate is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee, matching `TimesheetEntry::employee`.
    pub id: String,
    /// Default hourly rate for site labor.
    #[serde(default)]
    pub hourly_rate_site: Option<Decimal>,
    /// Default hourly rate for drive time.
    #[serde(default)]
    pub hourly_rate_drive: Option<Decimal>,
}

impl EmployeeProfile {
    /// Creates a profile with no default rates.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hourly_rate_site: None,
            hourly_rate_drive: None,
        }
    }
}
