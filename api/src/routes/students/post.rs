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
use services::student::CreateStudent;

#[derive(Debug, Default, Deserialize)]
pub struct StudentRequest {
    pub student_code: Option<String>,
    pub student_name: Option<String>,
    pub class_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub work_unit: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

/// POST /api/students
///
/// ### Errors:
/// - 404 Not Found: `class_id` given but the class does not exist
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };

    let params = CreateStudent {
        student_code: req.student_code,
        student_name: req.student_name,
        class_id: req.class_id,
        phone: req.phone,
        email: req.email,
        work_unit: req.work_unit,
        date_of_birth: req.date_of_birth,
    };

    match state.students().create(params).await {
        Ok(student) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(student, "Student created successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to create student", "Class not found"),
    }
}
