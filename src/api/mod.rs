//! HTTP API module for the Timesheet Pay Engine.
//!
//! This module provides the REST API endpoint for calculating pay reports
//! from raw timesheet entries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::ReportRequest;
pub use response::{ApiError, ReportResponse};
pub use state::AppState;
