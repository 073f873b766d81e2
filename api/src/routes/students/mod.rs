use crate::state::AppState;
use axum::{Router, routing::get};
use get::list_students;
use post::create_student;

pub mod get;
pub mod post;

/// `/api/students`: list and create.
pub fn students_routes() -> Router<AppState> {
    Router::new().route("/", get(list_students).post(create_student))
}
