use super::common::AttendanceRequest;
use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, service_error, validation_failed};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::Validate;

/// POST /api/attendances
///
/// ### Request Body
/// ```json
/// {
///   "session_id": 1,
///   "student_name": "Nguyen Van A",
///   "email": "a@example.com",
///   "phone": "0123456789",
///   "work_unit": "Phong IT",
///   "work_unit_address": "123 Nguyen Trai"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with `checked_in_at` stamped by the server
/// - `400 Bad Request` when any field is missing or empty; nothing is written
/// - `404 Not Found` when the session does not exist
pub async fn create_attendance(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }

    match state.attendances().create(req.into_params()).await {
        Ok(attendance) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                attendance,
                "Attendance created successfully",
            )),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to create attendance", "Session not found"),
    }
}
