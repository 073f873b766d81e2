//! Helpers shared by every route group: path id parsing, body rejections,
//! validation messages and the service-error → HTTP mapping.

use crate::response::ApiResponse;
use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use services::service::AppError;
use tracing::error;
use validator::ValidationErrors;

/// Parses a numeric path id as an unsigned 32-bit value, widened to `i64`.
///
/// `entity` is the display name, e.g. `"Event"` or `"Attendance session"`; a
/// non-numeric id yields
/// `400 {"error": "Invalid event ID", "message": "Event ID must be a number"}`.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, Response> {
    raw.parse::<u32>().map(i64::from).map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                format!("Invalid {} ID", entity.to_lowercase()),
                format!("{entity} ID must be a number"),
            )),
        )
            .into_response()
    })
}

/// Joins every field-level validation message with `"; "`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        })
        .collect();
    messages.sort();
    messages.join("; ")
}

pub fn validation_failed(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(
            "Invalid request data",
            format_validation_errors(errors),
        )),
    )
        .into_response()
}

pub fn invalid_body(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("Invalid request body", rejection.body_text())),
    )
        .into_response()
}

pub fn invalid_query(rejection: QueryRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("Invalid query parameters", rejection.body_text())),
    )
        .into_response()
}

/// Maps a service error onto the envelope.
///
/// - `Validation` → 400 `"Invalid request data"`
/// - `NotFound` → 404 with `not_found` as the title
/// - `Database` → 500 with `failure` as the title and the database message echoed
pub fn service_error(err: AppError, failure: &str, not_found: &str) -> Response {
    match err {
        AppError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Invalid request data", msg)),
        )
            .into_response(),
        AppError::NotFound(msg) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(not_found, msg)),
        )
            .into_response(),
        AppError::Database(db_err) => {
            error!(error = %db_err, "{failure}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(failure, db_err.to_string())),
            )
                .into_response()
        }
    }
}
