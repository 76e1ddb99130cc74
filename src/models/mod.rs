//! Core data models for the Timesheet Pay Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod entry;
mod report;

pub use employee::EmployeeProfile;
pub use entry::{EntryKind, TimesheetEntry};
pub use report::{DayBreakdown, EmployeeTotals, EntryAttribution, PayReport, ReportTotals};
