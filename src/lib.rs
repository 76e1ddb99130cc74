//! Timesheet Pay Engine for construction-operations payroll.
//!
//! This crate turns raw timesheet entries (clock-in/out, lunch windows, drive
//! distances) into per-entry hours and attributes each employee-day's site
//! hours into Regular, Overtime and Doubletime pay bands for payroll and
//! workers-compensation reporting.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
