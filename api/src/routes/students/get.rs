use crate::response::ApiResponse;
use crate::routes::common::service_error;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn list_students(State(state): State<AppState>) -> Response {
    match state.students().get_all().await {
        Ok(students) => (
            StatusCode::OK,
            Json(ApiResponse::list(students, "Students retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch students", "Student not found"),
    }
}
