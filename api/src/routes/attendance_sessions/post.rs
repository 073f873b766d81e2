use super::common::SessionRequest;
use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /api/attendance-sessions
///
/// ### Request Body
/// ```json
/// { "event_id": 1, "class_id": 2, "teacher_id": "3", "session_date": "2025-10-01T09:00:00+07:00" }
/// ```
///
/// ### Errors:
/// - 400 Bad Request: malformed `session_date`
/// - 404 Not Found: referenced event, class or teacher does not exist
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.sessions().create(req.into()).await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                session,
                "Attendance session created successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(
            e,
            "Failed to create attendance session",
            "Referenced resource not found",
        ),
    }
}
