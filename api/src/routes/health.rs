use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

/// Builds the `/health` route group.
///
/// A single `GET /health` that pings the database, for uptime checks and
/// load-balancer probes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// {
///   "success": true,
///   "data": "OK",
///   "message": "Database connected successfully"
/// }
/// ```
///
/// - `500 Internal Server Error` with `"error": "Database connection failed"`
///   when the ping fails.
async fn health_check(State(state): State<AppState>) -> Response {
    match state.gateway().ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success("OK", "Database connected successfully")),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Database connection failed", e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::health_check;
    use crate::state::AppState;
    use axum::{body::to_bytes, extract::State, http::StatusCode};
    use db::{Gateway, test_utils::setup_test_db};
    use serde_json::Value;

    #[tokio::test]
    async fn health_check_pings_database() {
        let state = AppState::new(Gateway::new(setup_test_db().await));

        let response = health_check(State(state)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
        assert_eq!(json["message"], "Database connected successfully");
    }
}
