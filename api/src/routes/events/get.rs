use crate::response::ApiResponse;
use crate::routes::common::{parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/events
///
/// ### Response: 200 OK
/// ```json
/// { "success": true, "data": [ { "id": 1, "event_name": "Workshop AI", "is_active": true, ... } ],
///   "count": 1, "message": "Events retrieved successfully" }
/// ```
pub async fn list_events(State(state): State<AppState>) -> Response {
    match state.events().get_all().await {
        Ok(events) => (
            StatusCode::OK,
            Json(ApiResponse::list(events, "Events retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to retrieve events", "Event not found"),
    }
}

/// GET /api/events/active
///
/// Events whose active flag is set.
pub async fn list_active_events(State(state): State<AppState>) -> Response {
    match state.events().get_active().await {
        Ok(events) => (
            StatusCode::OK,
            Json(ApiResponse::list(events, "Active events retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to retrieve active events", "Event not found"),
    }
}

/// GET /api/events/{id}
///
/// ### Errors:
/// - 400 Bad Request: non-numeric id
/// - 404 Not Found: absent or deleted
pub async fn get_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.events().get_by_id(id).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(event, "Event retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to retrieve event", "Event not found"),
    }
}

/// GET /api/events/{id}/sessions
///
/// The event with its sessions; each session carries its `class` and `teacher`.
pub async fn get_event_with_sessions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.events().get_by_id_with_sessions(id).await {
        Ok(graph) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                graph,
                "Event with sessions retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to retrieve event", "Event not found"),
    }
}

/// GET /api/events/{id}/attendances
///
/// Every attendance under any session of the event. Each row carries its
/// `session`, with the session's `class`, `teacher` and `event`.
pub async fn get_event_attendances(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.attendances().get_by_event_id(id).await {
        Ok(rows) => (
            StatusCode::OK,
            Json(ApiResponse::list(rows, "Attendances retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch attendances", "Event not found"),
    }
}
