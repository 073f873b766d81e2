use crate::response::ApiResponse;
use crate::routes::common::{parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// DELETE /api/events/{id}
///
/// Soft delete. Sessions under the event are left untouched.
///
/// ### Errors:
/// - 404 Not Found: absent or already deleted
pub async fn delete_event(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.events().delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::message("Event deleted successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to delete event", "Event not found"),
    }
}
