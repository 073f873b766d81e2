use crate::state::AppState;
use axum::{Router, routing::get};
use get::{get_teacher, list_teachers};
use post::create_teacher;

pub mod get;
pub mod post;

/// `/api/teachers`: list, create and fetch one with its sessions.
pub fn teachers_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers).post(create_teacher))
        .route("/{id}", get(get_teacher))
}
