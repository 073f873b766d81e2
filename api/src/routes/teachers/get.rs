use crate::response::ApiResponse;
use crate::routes::common::{parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn list_teachers(State(state): State<AppState>) -> Response {
    match state.teachers().get_all().await {
        Ok(teachers) => (
            StatusCode::OK,
            Json(ApiResponse::list(teachers, "Teachers retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch teachers", "Teacher not found"),
    }
}

/// GET /api/teachers/{id}
///
/// The teacher with `sessions`, each carrying its `class`.
pub async fn get_teacher(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Teacher") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.teachers().get_by_id(id).await {
        Ok(teacher) => (
            StatusCode::OK,
            Json(ApiResponse::success(teacher, "Teacher retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch teacher", "Teacher not found"),
    }
}
