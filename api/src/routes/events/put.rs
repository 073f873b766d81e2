use super::common::{EventRequest, SetActiveRequest};
use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, parse_id, service_error, validation_failed};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

/// PUT /api/events/{id}
///
/// Partial update: only the fields present in the body are written.
///
/// ### Errors:
/// - 400 Bad Request: non-numeric id or malformed body
/// - 404 Not Found: absent or deleted
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.events().update(id, req.into()).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(event, "Event updated successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to update event", "Event not found"),
    }
}

/// PUT /api/events/{id}/active
///
/// ### Request Body
/// ```json
/// { "active": 0 }
/// ```
/// `active` is required and must be exactly `0` or `1`. The flag is set to the
/// given value, whatever it was before.
pub async fn set_event_active(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SetActiveRequest>, JsonRejection>,
) -> Response {
    let id = match parse_id(&id, "Event") {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }

    match state.events().set_active(id, req.is_active()).await {
        Ok(event) => (
            StatusCode::OK,
            Json(ApiResponse::success(event, "Event status updated successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to update event status", "Event not found"),
    }
}
