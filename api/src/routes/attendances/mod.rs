//! Routes for walk-in attendances.
//!
//! Mounted at `/api/attendances`:
//! - `GET /attendances` → `list_attendances`
//! - `POST /attendances` → `create_attendance`
//! - `GET /attendances/{id}` → `get_attendance`
//!
//! Mounted at `/api/sessions`:
//! - `GET /sessions/{id}/attendances` → `list_session_attendances`

use crate::state::AppState;
use axum::{Router, routing::get};
use get::{get_attendance, list_attendances, list_session_attendances};
use post::create_attendance;

pub mod common;
pub mod get;
pub mod post;

pub fn attendances_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_attendances).post(create_attendance))
        .route("/{id}", get(get_attendance))
}

pub fn session_attendances_routes() -> Router<AppState> {
    Router::new().route("/{id}/attendances", get(list_session_attendances))
}
