//! Comprehensive integration tests for the Timesheet Pay Engine.
//!
//! This test suite drives the HTTP surface end to end and covers:
//! - Single-entry site hours and pay
//! - Split-shift chronological band attribution
//! - Regular/Overtime/Doubletime thresholds
//! - Drive distance resolution priority (manual, GPS, odometer)
//! - Rate cascade defaults
//! - Malformed-record isolation ("never crash the report")
//! - Idempotence
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::config::{PayPolicy, PolicyLoader};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    create_router(AppState::new(PayPolicy::default()))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Reads a decimal field from a JSON response value regardless of whether it
/// serialized as a string or a number.
fn field_decimal(value: &Value, field: &str) -> Decimal {
    let raw = &value[field];
    if let Some(text) = raw.as_str() {
        Decimal::from_str(text).unwrap()
    } else {
        Decimal::from_str(&raw.to_string()).unwrap()
    }
}

async fn post_report(router: Router, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn site_entry(employee: &str, clock_in: &str, clock_out: &str) -> Value {
    json!({
        "employee": employee,
        "type": "Site Time",
        "clock_in": clock_in,
        "clock_out": clock_out
    })
}

fn request_body(entries: Vec<Value>) -> Value {
    json!({
        "from_date": "2026-02-09",
        "entries": entries
    })
}

// =============================================================================
// Site hours and band attribution
// =============================================================================

#[tokio::test]
async fn test_single_site_entry_regular_hours() {
    let body = request_body(vec![site_entry(
        "emp_001",
        "2026-02-09T07:00:00Z",
        "2026-02-09T15:00:00Z",
    )]);

    let (status, response) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let entry = &response["report"]["entries"][0];
    assert_eq!(field_decimal(entry, "reg_hours"), decimal("8"));
    assert_eq!(field_decimal(entry, "ot_hours"), decimal("0"));
    assert_eq!(field_decimal(entry, "reg_pay"), decimal("360.00"));

    let totals = &response["report"]["totals"];
    assert_eq!(field_decimal(totals, "gross_pay"), decimal("360.00"));
}

#[tokio::test]
async fn test_split_shift_attribution_is_chronological() {
    // 6h + 5h: the first entry by clock-in owns the Regular hours, the
    // second takes 2 Regular and 3 Overtime. Input order is reversed to
    // prove sorting by clock-in.
    let body = request_body(vec![
        site_entry("emp_001", "2026-02-09T13:00:00Z", "2026-02-09T18:00:00Z"),
        site_entry("emp_001", "2026-02-09T06:00:00Z", "2026-02-09T12:00:00Z"),
    ]);

    let (status, response) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let entries = &response["report"]["entries"];
    assert_eq!(field_decimal(&entries[1], "reg_hours"), decimal("6"));
    assert_eq!(field_decimal(&entries[1], "ot_hours"), decimal("0"));
    assert_eq!(field_decimal(&entries[0], "reg_hours"), decimal("2"));
    assert_eq!(field_decimal(&entries[0], "ot_hours"), decimal("3"));

    let day = &response["report"]["days"][0];
    assert_eq!(field_decimal(day, "reg_hours"), decimal("8"));
    assert_eq!(field_decimal(day, "ot_hours"), decimal("3"));
    assert_eq!(field_decimal(day, "site_hours"), decimal("11"));
}

#[tokio::test]
async fn test_thirteen_hour_day_hits_doubletime() {
    let body = request_body(vec![site_entry(
        "emp_001",
        "2026-02-09T05:00:00Z",
        "2026-02-09T18:00:00Z",
    )]);

    let (_, response) = post_report(create_router_for_test(), body).await;

    let entry = &response["report"]["entries"][0];
    assert_eq!(field_decimal(entry, "reg_hours"), decimal("8"));
    assert_eq!(field_decimal(entry, "ot_hours"), decimal("4"));
    assert_eq!(field_decimal(entry, "dt_hours"), decimal("1"));

    // 8x45 + 4x67.50 + 1x90
    let totals = &response["report"]["totals"];
    assert_eq!(field_decimal(totals, "gross_pay"), decimal("720.00"));
}

#[tokio::test]
async fn test_lunch_window_is_unpaid() {
    let mut entry = site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T15:30:00Z");
    entry["lunch_start"] = json!("2026-02-09T12:00:00Z");
    entry["lunch_end"] = json!("2026-02-09T12:30:00Z");

    let (_, response) = post_report(create_router_for_test(), request_body(vec![entry])).await;

    let row = &response["report"]["entries"][0];
    assert_eq!(field_decimal(row, "hours"), decimal("8"));
}

// =============================================================================
// Drive entries
// =============================================================================

#[tokio::test]
async fn test_manual_distance_beats_gps() {
    let entry = json!({
        "employee": "emp_001",
        "type": "Drive Time",
        "clock_in": "2026-02-09T06:00:00Z",
        "manual_distance": "50",
        "location_in": "35.1495,-90.0490",
        "location_out": "36.1627,-86.7816"
    });

    let (_, response) = post_report(create_router_for_test(), request_body(vec![entry])).await;

    let row = &response["report"]["entries"][0];
    // 50 miles / 50 mph x 1.2 driving factor.
    assert_eq!(field_decimal(row, "distance"), decimal("50"));
    assert_eq!(field_decimal(row, "travel_hours"), decimal("1.2"));
    // 1.2h x 33.75 default travel rate.
    assert_eq!(field_decimal(row, "travel_pay"), decimal("40.50"));
}

#[tokio::test]
async fn test_odometer_difference_distance() {
    let entry = json!({
        "employee": "emp_001",
        "type": "Drive Time",
        "clock_in": "2026-02-09T06:00:00Z",
        "location_in": "100233",
        "location_out": "100283"
    });

    let (_, response) = post_report(create_router_for_test(), request_body(vec![entry])).await;

    let row = &response["report"]["entries"][0];
    assert_eq!(field_decimal(row, "distance"), decimal("50"));
    assert_eq!(field_decimal(row, "travel_hours"), decimal("1.2"));
}

#[tokio::test]
async fn test_travel_hours_do_not_trigger_overtime() {
    let drive = json!({
        "employee": "emp_001",
        "type": "Drive Time",
        "clock_in": "2026-02-09T04:00:00Z",
        "manual_distance": "500"
    });
    let body = request_body(vec![
        drive,
        site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T15:00:00Z"),
    ]);

    let (_, response) = post_report(create_router_for_test(), body).await;

    let entries = &response["report"]["entries"];
    assert_eq!(field_decimal(&entries[0], "travel_hours"), decimal("12"));
    assert_eq!(field_decimal(&entries[0], "ot_hours"), decimal("0"));
    assert_eq!(field_decimal(&entries[1], "reg_hours"), decimal("8"));
    assert_eq!(field_decimal(&entries[1], "ot_hours"), decimal("0"));
}

// =============================================================================
// Rate cascade
// =============================================================================

#[tokio::test]
async fn test_default_rates_45_and_33_75() {
    let drive = json!({
        "employee": "emp_001",
        "type": "Drive Time",
        "clock_in": "2026-02-09T06:00:00Z",
        "manual_distance": "50"
    });
    let body = request_body(vec![
        site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T15:00:00Z"),
        drive,
    ]);

    let (_, response) = post_report(create_router_for_test(), body).await;

    let day = &response["report"]["days"][0];
    assert_eq!(field_decimal(day, "site_rate"), decimal("45.00"));
    assert_eq!(field_decimal(day, "travel_rate"), decimal("33.75"));
}

#[tokio::test]
async fn test_profile_rate_applies_when_no_override() {
    let body = json!({
        "from_date": "2026-02-09",
        "employees": [
            {"id": "emp_001", "hourly_rate_site": "48.00"}
        ],
        "entries": [
            site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T15:00:00Z")
        ]
    });

    let (_, response) = post_report(create_router_for_test(), body).await;

    let row = &response["report"]["entries"][0];
    assert_eq!(field_decimal(row, "reg_pay"), decimal("384.00"));
}

#[tokio::test]
async fn test_entry_rate_override_accepts_number_or_string() {
    let mut first = site_entry("emp_001", "2026-02-09T06:00:00Z", "2026-02-09T10:00:00Z");
    first["hourly_rate_site"] = json!(50);
    let mut second = site_entry("emp_001", "2026-02-09T10:00:00Z", "2026-02-09T14:00:00Z");
    second["hourly_rate_site"] = json!("55.00");

    let (_, response) =
        post_report(create_router_for_test(), request_body(vec![first, second])).await;

    let entries = &response["report"]["entries"];
    assert_eq!(field_decimal(&entries[0], "reg_pay"), decimal("200.00"));
    assert_eq!(field_decimal(&entries[1], "reg_pay"), decimal("220.00"));

    // Day rate reflects the last-seen override.
    let day = &response["report"]["days"][0];
    assert_eq!(field_decimal(day, "site_rate"), decimal("55.00"));
}

// =============================================================================
// Degraded records
// =============================================================================

#[tokio::test]
async fn test_missing_clock_out_does_not_corrupt_batch() {
    let broken = json!({
        "employee": "emp_002",
        "type": "Site Time",
        "clock_in": "2026-02-09T07:00:00Z"
    });
    let body = request_body(vec![
        site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T16:00:00Z"),
        broken,
        site_entry("emp_002", "2026-02-10T07:00:00Z", "2026-02-10T13:00:00Z"),
    ]);

    let (status, response) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let employees = response["report"]["employees"].as_array().unwrap();
    let emp_001 = employees
        .iter()
        .find(|e| e["employee"] == "emp_001")
        .unwrap();
    assert_eq!(field_decimal(emp_001, "reg_hours"), decimal("8"));
    assert_eq!(field_decimal(emp_001, "ot_hours"), decimal("1"));

    let emp_002 = employees
        .iter()
        .find(|e| e["employee"] == "emp_002")
        .unwrap();
    assert_eq!(field_decimal(emp_002, "reg_hours"), decimal("6"));
    assert_eq!(field_decimal(emp_002, "ot_hours"), decimal("0"));
}

#[tokio::test]
async fn test_malformed_timestamps_degrade_to_zero() {
    let body = request_body(vec![site_entry("emp_001", "garbage", "also garbage")]);

    let (status, response) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::OK);

    let row = &response["report"]["entries"][0];
    assert_eq!(field_decimal(row, "hours"), decimal("0"));
    assert_eq!(
        field_decimal(&response["report"]["totals"], "gross_pay"),
        decimal("0")
    );
}

#[tokio::test]
async fn test_unknown_type_is_silently_excluded() {
    let vacation = json!({
        "employee": "emp_001",
        "type": "vacation",
        "clock_in": "2026-02-09T07:00:00Z",
        "clock_out": "2026-02-09T15:00:00Z"
    });
    let body = request_body(vec![
        vacation,
        site_entry("emp_001", "2026-02-09T07:00:00Z", "2026-02-09T15:00:00Z"),
    ]);

    let (_, response) = post_report(create_router_for_test(), body).await;

    let day = &response["report"]["days"][0];
    assert_eq!(field_decimal(day, "site_hours"), decimal("8"));
    let entries = &response["report"]["entries"];
    assert_eq!(field_decimal(&entries[0], "hours"), decimal("0"));
}

#[tokio::test]
async fn test_report_is_idempotent() {
    let body = request_body(vec![
        site_entry("emp_001", "2026-02-09T06:00:00Z", "2026-02-09T12:00:00Z"),
        site_entry("emp_001", "2026-02-09T13:00:00Z", "2026-02-09T18:00:00Z"),
    ]);

    let (_, first) = post_report(create_router_for_test(), body.clone()).await;
    let (_, second) = post_report(create_router_for_test(), body).await;

    assert_eq!(first["report"], second["report"]);
}

// =============================================================================
// Policy file
// =============================================================================

#[tokio::test]
async fn test_shipped_policy_file_matches_defaults() {
    let loader = PolicyLoader::load("./config/policy.yaml").expect("Failed to load policy");
    let router = create_router(AppState::new(loader.policy().clone()));

    let body = request_body(vec![site_entry(
        "emp_001",
        "2026-02-09T05:00:00Z",
        "2026-02-09T18:00:00Z",
    )]);
    let (_, response) = post_report(router, body).await;

    let totals = &response["report"]["totals"];
    assert_eq!(field_decimal(totals, "gross_pay"), decimal("720.00"));
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_missing_from_date_is_validation_error() {
    let body = json!({
        "entries": []
    });

    let (status, response) = post_report(create_router_for_test(), body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/report")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
