//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_payslip_with, top_by_average_hours};
use crate::models::EmployeeRecord;

use super::request::TopEmployeesQuery;
use super::response::{ApiError, ApiErrorResponse, TopEmployee};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/top-employees", get(top_employees_handler))
        .route("/payslip", post(payslip_handler))
        .with_state(state)
}

/// Handler for GET /top-employees.
///
/// Returns the busiest employees whose average daily hours exceed `min_avg`.
async fn top_employees_handler(
    State(state): State<AppState>,
    query: Result<Query<TopEmployeesQuery>, QueryRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Invalid top-employees query"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::invalid_query(body_text)),
            )
                .into_response();
        }
    };

    let top: Vec<TopEmployee> = top_by_average_hours(state.timesheets(), query.min_avg, query.limit)
        .into_iter()
        .map(Into::into)
        .collect();

    info!(
        correlation_id = %correlation_id,
        min_avg = query.min_avg,
        limit = query.limit,
        returned = top.len(),
        "Served top employees"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(top),
    )
        .into_response()
}

/// Handler for POST /payslip.
///
/// Computes the payslip for a single employee record without writing any
/// files.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRecord>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let record = match payload {
        Ok(Json(record)) => record,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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

    let start_time = Instant::now();
    match compute_payslip_with(&record, state.rates()) {
        Ok(payslip) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %record.id,
                gross_pay = %payslip.gross_pay,
                net_pay = %payslip.net_pay,
                duration_us = duration.as_micros(),
                "Payslip computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payslip),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip calculation failed"
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
