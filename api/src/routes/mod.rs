//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → Persistence health check
//! - `/events` → Events, their sessions and attendances, the active flag
//! - `/attendance-sessions` → Sessions with class, teacher and attendances
//! - `/attendances` → Walk-in sign-ins
//! - `/sessions/{id}/attendances` → Attendances of one session
//! - `/classes`, `/teachers`, `/students` → Reference data

use crate::routes::{
    attendance_sessions::attendance_sessions_routes,
    attendances::{attendances_routes, session_attendances_routes},
    classes::classes_routes,
    events::events_routes,
    health::health_routes,
    students::students_routes,
    teachers::teachers_routes,
};
use crate::state::AppState;
use axum::Router;

pub mod attendance_sessions;
pub mod attendances;
pub mod classes;
pub mod common;
pub mod events;
pub mod health;
pub mod students;
pub mod teachers;

/// Builds the complete application router for all HTTP endpoints.
///
/// The state is attached here, so the result can be nested under `/api` and
/// served or driven with `oneshot` directly.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/events", events_routes())
        .nest("/attendance-sessions", attendance_sessions_routes())
        .nest("/attendances", attendances_routes())
        .nest("/sessions", session_attendances_routes())
        .nest("/classes", classes_routes())
        .nest("/teachers", teachers_routes())
        .nest("/students", students_routes())
        .with_state(app_state)
}
