//! HTTP request handlers for the Timesheet Pay Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_report;

use super::request::ReportRequest;
use super::response::{ApiError, ReportResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .with_state(state)
}

/// Handler for POST /report endpoint.
///
/// Accepts a batch of raw timesheet entries plus employee profiles and
/// returns the calculated pay report.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let entry_count = request.entries.len();
    let report = calculate_report(
        &request.entries,
        &request.employees,
        request.from_date,
        state.policy(),
    );

    info!(
        correlation_id = %correlation_id,
        entries = entry_count,
        employees = report.employees.len(),
        gross_pay = %report.totals.gross_pay,
        "Report calculated"
    );

    (
        StatusCode::OK,
        Json(ReportResponse {
            correlation_id,
            calculated_at: Utc::now(),
            report,
        }),
    )
        .into_response()
}
