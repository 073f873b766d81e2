use super::common::SessionQuery;
use crate::response::ApiResponse;
use crate::routes::common::{invalid_query, parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/attendance-sessions
///
/// ### Query Parameters
/// - `event_id` (optional): only sessions of this event
///
/// Each session carries its `class`, `teacher` and `attendances`.
pub async fn list_sessions(
    State(state): State<AppState>,
    query: Result<Query<SessionQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return invalid_query(rejection),
    };

    match state.sessions().get_all(query.event_id).await {
        Ok(sessions) => (
            StatusCode::OK,
            Json(ApiResponse::list(
                sessions,
                "Attendance sessions retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(
            e,
            "Failed to fetch attendance sessions",
            "Attendance session not found",
        ),
    }
}

/// GET /api/attendance-sessions/{id}
pub async fn get_session(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Attendance session") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.sessions().get_by_id(id).await {
        Ok(session) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                session,
                "Attendance session retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(
            e,
            "Failed to fetch attendance session",
            "Attendance session not found",
        ),
    }
}
