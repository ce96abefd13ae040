//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll;
use crate::config::PayrollConfig;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, PayrollReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a payroll calculation request and returns the computed
/// payroll report.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
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

    // A request-supplied configuration overrides the server's for this
    // request only.
    let config: &PayrollConfig = match &request.config {
        Some(override_config) => {
            info!(
                correlation_id = %correlation_id,
                year = override_config.year,
                "Using request-supplied configuration override"
            );
            override_config
        }
        None => state.config().config(),
    };

    // Perform the calculation
    let start_time = Instant::now();
    match compute_payroll(config, &request.input) {
        Ok(result) => {
            let duration = start_time.elapsed();
            let report = PayrollReport::new(result);
            info!(
                correlation_id = %correlation_id,
                calculation_id = %report.calculation_id,
                gross = report.result.gross_before_deductions,
                net_pay = report.result.net_pay,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config =
            ConfigLoader::from_config(PayrollConfig::bundled_1404()).expect("valid config");
        AppState::new(config)
    }

    fn create_valid_body() -> String {
        json!({
            "input": {
                "mode": "daily",
                "baseWage": 3_000_000,
                "days": 30
            }
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_api_001_valid_request_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(create_valid_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        // Verify Content-Type header
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        // Verify response body is a valid PayrollReport
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: PayrollReport = serde_json::from_slice(&body).unwrap();

        assert_eq!(report.result.base_monthly, 90_000_000);
        assert!(report.result.net_pay > 0);
    }

    #[tokio::test]
    async fn test_api_002_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_api_003_missing_mode_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({ "input": { "baseWage": 3_000_000 } }).to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert!(
            error.message.contains("missing field")
                || error.message.to_lowercase().contains("mode"),
            "Expected error message to mention missing field or mode, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_api_004_negative_base_wage_returns_400() {
        let router = create_router(create_test_state());

        let body = json!({
            "input": { "mode": "monthly", "baseWage": -1 }
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();

        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_config_override_is_used_for_the_request() {
        let router = create_router(create_test_state());

        let body = json!({
            "input": { "mode": "hourly", "baseWage": 100_000 },
            "config": {
                "year": 1404,
                "workHoursMonthly": "220",
                "insurance": { "worker": "0.07", "employer": "0.20", "unemployment": "0.03" },
                "allowances": { "housing": 0, "food": 0, "childPerKid": 0 },
                "tax": { "exemptionMonthly": 0, "brackets": [] }
            }
        })
        .to_string();

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/calculate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let report: PayrollReport = serde_json::from_slice(&body).unwrap();

        // Override zeroes the allowances the server config would add.
        assert_eq!(report.result.gross_before_deductions, 22_000_000);
        assert_eq!(report.result.net_pay, 20_460_000);
        assert_eq!(report.result.employer_cost, 27_060_000);
    }
}
