//! HTTP request handlers for the roster API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use crate::models::TransportEmployee;

use super::auth::{CREATE_ROLES, Caller, READ_ROLES};
use super::request::DROPPED_DETAILS_HEADER;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route("/employees/excel", get(export_employees_handler))
        .with_state(state)
}

/// Handler for POST /employees. Requires `ADMIN`.
///
/// Stores the employee and returns it as saved. The `x-dropped-details`
/// response header carries the number of detail tokens that could not be
/// decoded.
async fn create_employee_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<TransportEmployee>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let caller = Caller::from_headers(&headers);
    info!(
        correlation_id = %correlation_id,
        principal = %caller.principal(),
        "Processing create employee request"
    );

    if let Err(denied) = caller.authorize(CREATE_ROLES) {
        warn!(
            correlation_id = %correlation_id,
            principal = %caller.principal(),
            "Create employee forbidden"
        );
        return denied.into_response();
    }

    let employee = match payload {
        Ok(Json(employee)) => employee,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    info!(
        correlation_id = %correlation_id,
        employee = %employee.name,
        "Creating employee"
    );

    match state.service().create(caller.principal(), employee) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = ?outcome.employee.id,
                details_count = outcome.employee.details.len(),
                dropped = outcome.dropped,
                "Employee created"
            );
            (
                StatusCode::OK,
                [(
                    HeaderName::from_static(DROPPED_DETAILS_HEADER),
                    outcome.dropped.to_string(),
                )],
                Json(outcome.employee),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Create employee failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees. Requires `USER` or `ADMIN`.
async fn list_employees_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let caller = Caller::from_headers(&headers);
    info!(
        correlation_id = %correlation_id,
        principal = %caller.principal(),
        "Fetching all employees"
    );

    if let Err(denied) = caller.authorize(READ_ROLES) {
        return denied.into_response();
    }

    match state.service().list() {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Listing employees failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /employees/excel. Requires `USER` or `ADMIN`.
///
/// Workbook generation is CPU-bound and runs on the blocking pool. The
/// response is either the complete file or a single JSON error.
async fn export_employees_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let caller = Caller::from_headers(&headers);
    info!(
        correlation_id = %correlation_id,
        principal = %caller.principal(),
        "Exporting employees to Excel"
    );

    if let Err(denied) = caller.authorize(READ_ROLES) {
        return denied.into_response();
    }

    let service = state.service_handle();
    let result = tokio::task::spawn_blocking(move || service.export()).await;

    match result {
        Ok(Ok(bytes)) => {
            info!(
                correlation_id = %correlation_id,
                size_bytes = bytes.len(),
                "Excel export completed"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename={}", EXPORT_FILE_NAME),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Excel export failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Excel export task aborted"
            );
            ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::export_failed(join_error.to_string()),
            )
            .into_response()
        }
    }
}

/// Maps a JSON body rejection to a 400 error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed serde error
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

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}
