//! Routes for `/api/attendance-sessions`.
//!
//! - `GET /attendance-sessions[?event_id=N]` → `list_sessions`
//! - `POST /attendance-sessions` → `create_session`
//! - `GET /attendance-sessions/{id}` → `get_session`
//! - `PUT /attendance-sessions/{id}` → `update_session`

use crate::state::AppState;
use axum::{Router, routing::get};
use get::{get_session, list_sessions};
use post::create_session;
use put::update_session;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

pub fn attendance_sessions_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_sessions).post(create_session))
        .route("/{id}", get(get_session).put(update_session))
}
