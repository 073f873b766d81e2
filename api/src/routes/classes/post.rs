use crate::response::ApiResponse;
use crate::routes::common::{invalid_body, service_error, validation_failed};
use crate::state::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use services::class::CreateClass;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ClassRequest {
    #[validate(
        required(message = "class_code is required"),
        length(min = 1, message = "class_code is required")
    )]
    pub class_code: Option<String>,

    #[validate(
        required(message = "class_name is required"),
        length(min = 1, message = "class_name is required")
    )]
    pub class_name: Option<String>,
}

/// POST /api/classes
///
/// ### Request Body
/// ```json
/// { "class_code": "IT001", "class_name": "Cong nghe thong tin" }
/// ```
pub async fn create_class(
    State(state): State<AppState>,
    payload: Result<Json<ClassRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(body) => body,
        Err(rejection) => return invalid_body(rejection),
    };
    if let Err(e) = req.validate() {
        return validation_failed(&e);
    }

    let params = CreateClass {
        class_code: req.class_code.unwrap_or_default(),
        class_name: req.class_name.unwrap_or_default(),
    };

    match state.classes().create(params).await {
        Ok(class) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(class, "Class created successfully")),
        )
            .into_response(),
        Err(e) => service_error(e, "Failed to create class", "Class not found"),
    }
}
