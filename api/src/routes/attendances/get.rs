use crate::response::ApiResponse;
use crate::routes::common::{parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/attendances
///
/// Each attendance carries its `session` with the session's `class` and `teacher`.
pub async fn list_attendances(State(state): State<AppState>) -> Response {
    match state.attendances().get_all().await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::list(rows, "Attendances retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch attendances", "Attendance not found"),
    }
}

/// GET /api/attendances/{id}
pub async fn get_attendance(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Attendance") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.attendances().get_by_id(id).await {
        Ok(row) => (
            StatusCode::OK,
            Json(ApiResponse::success(row, "Attendance retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch attendance", "Attendance not found"),
    }
}

/// GET /api/sessions/{id}/attendances
///
/// Plain attendance rows of one session; an unknown session yields an empty list.
pub async fn list_session_attendances(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "Session") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.attendances().get_by_session_id(id).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::list(rows, "Attendances retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch attendances", "Attendance not found"),
    }
}
