//! Request types for the Timesheet Pay Engine API.
//!
//! This module defines the JSON request structure for the `/report`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeProfile, TimesheetEntry};

/// Request body for the `/report` endpoint.
///
/// Carries the raw timesheet entries to aggregate, the employee profiles
/// providing default rates, and the schedule date used as a fallback anchor
/// for entries with ambiguous timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Fallback date for entries whose timestamps cannot supply one.
    pub from_date: NaiveDate,
    /// Employee profiles with default rates; may be empty.
    #[serde(default)]
    pub employees: Vec<EmployeeProfile>,
    /// The raw timesheet entries to aggregate.
    pub entries: Vec<TimesheetEntry>,
}
