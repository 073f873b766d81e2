use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, service_error};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use services::teacher::CreateTeacher;

#[derive(Debug, Default, Deserialize)]
pub struct TeacherRequest {
    pub teacher_code: Option<String>,
    pub teacher_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub work_unit: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

/// POST /api/teachers
///
/// No field is required.
pub async fn create_teacher(
    State(state): State<AppState>,
    payload: Result<Json<TeacherRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let params = CreateTeacher {
        teacher_code: req.teacher_code,
        teacher_name: req.teacher_name,
        phone: req.phone,
        email: req.email,
        work_unit: req.work_unit,
        date_of_birth: req.date_of_birth,
    };

    match state.teachers().create(params).await {
        Ok(teacher) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(teacher, "Teacher created successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to create teacher", "Teacher not found"),
    }
}
