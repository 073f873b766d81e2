use super::common::EventRequest;
use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// POST /api/events
///
/// ### Request Body
/// ```json
/// { "event_name": "Workshop AI", "description": "Intro", "start_date": "2025-10-01T09:00:00Z" }
/// ```
///
/// ### Response: 201 Created
/// The new event. `is_active` is always `true` on creation.
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<EventRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    match state.events().create(req.into()).await {
        Ok(event) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(event, "Event created successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to create event", "Event not found"),
    }
}
