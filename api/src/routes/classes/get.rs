use crate::response::ApiResponse;
use crate::routes::common::{parse_id, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /api/classes
pub async fn list_classes(State(state): State<AppState>) -> Response {
    match state.classes().get_all().await {
        Ok(classes) => (
            StatusCode::OK,
            Json(ApiResponse::list(classes, "Classes retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch classes", "Class not found"),
    }
}

/// GET /api/classes/{id}
///
/// The class with its `students` and `sessions`.
pub async fn get_class(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = match parse_id(&id, "Class") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.classes().get_by_id(id).await {
        Ok(class) => (
            StatusCode::OK,
            Json(ApiResponse::success(class, "Class retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to fetch class", "Class not found"),
    }
}
