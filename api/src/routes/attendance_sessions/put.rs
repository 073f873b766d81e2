use super::common::SessionRequest;
use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// PUT /api/attendance-sessions/{id}
///
/// Partial update of the session's event, class, teacher and date.
pub async fn update_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id, "Attendance session") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.sessions().update(id, req.into()).await {
        Ok(session) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                session,
                "Attendance session updated successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(
            e,
            "Failed to update attendance session",
            "Attendance session not found",
        ),
    }
}
