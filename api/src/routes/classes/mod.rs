//! Routes for `/api/classes`.
//!
//! - `GET /classes` → `list_classes`
//! - `POST /classes` → `create_class`
//! - `GET /classes/{id}` → `get_class`

use crate::state::AppState;
use axum::{Router, routing::get};
use get::{get_class, list_classes};
use post::create_class;

pub mod get;
pub mod post;

pub fn classes_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_classes).post(create_class))
        .route("/{id}", get(get_class))
}
