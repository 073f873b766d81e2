use api::{routes::routes, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use db::{Gateway, test_utils::setup_test_db};
use serde_json::Value;
use services::event::EventService;
use std::sync::Arc;
use tower::ServiceExt;

/// Router over a fresh in-memory database, mounted under `/api` as in `main`.
pub async fn make_test_app() -> (Router, AppState) {
    let state = AppState::new(Gateway::new(setup_test_db().await));
    let router = Router::new().nest("/api", routes(state.clone()));
    (router, state)
}

/// Same as `make_test_app` but with the event service replaced.
pub async fn make_test_app_with(events: Arc<dyn EventService>) -> Router {
    let state =
        AppState::new(Gateway::new(setup_test_db().await)).with_event_service(events);
    Router::new().nest("/api", routes(state))
}

/// Sends one request; `body` is serialized as JSON when present.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}
