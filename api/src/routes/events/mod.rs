//! # Events Routes Module
//!
//! Routes for the `/api/events` group.
//!
//! - `GET /events` → `list_events`
//! - `POST /events` → `create_event`
//! - `GET /events/active` → `list_active_events`
//! - `GET /events/{id}` → `get_event`
//! - `PUT /events/{id}` → `update_event`
//! - `DELETE /events/{id}` → `delete_event`
//! - `GET /events/{id}/sessions` → `get_event_with_sessions`
//! - `GET /events/{id}/attendances` → `get_event_attendances`
//! - `PUT /events/{id}/active` → `set_event_active`

use crate::state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use delete::delete_event;
use get::{
    get_event, get_event_attendances, get_event_with_sessions, list_active_events, list_events,
};
use post::create_event;
use put::{set_event_active, update_event};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn events_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/active", get(list_active_events))
        .route(
            "/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/{id}/sessions", get(get_event_with_sessions))
        .route("/{id}/attendances", get(get_event_attendances))
        .route("/{id}/active", put(set_event_active))
}
