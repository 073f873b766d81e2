#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use db::test_utils::TestData;
    use serde_json::{Value, json};
    use serial_test::serial;

    fn ids(list: &Value) -> Vec<i64> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_i64().unwrap())
            .collect()
    }

    /// Create, reject a bad flag, deactivate, and check the active list.
    #[tokio::test]
    #[serial]
    async fn test_active_flag_end_to_end() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(&app, "POST", "/api/events", Some(json!({ "event_name": "Workshop AI" }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Event created successfully");
        assert_eq!(json["data"]["is_active"], true);
        assert_eq!(json["data"]["id"], 1);

        let (status, json) = json_body(
            send(&app, "PUT", "/api/events/1/active", Some(json!({ "active": 2 }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "active must be 0 or 1");

        let (status, json) = json_body(
            send(&app, "PUT", "/api/events/1/active", Some(json!({ "active": 0 }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["is_active"], false);

        let (status, json) = json_body(send(&app, "GET", "/api/events/active", None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert!(!ids(&json["data"]).contains(&1));
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_set_active_requires_the_field() {
        let (app, _) = make_test_app().await;
        send(&app, "POST", "/api/events", Some(json!({}))).await;

        let (status, json) =
            json_body(send(&app, "PUT", "/api/events/1/active", Some(json!({}))).await).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request data");
        assert_eq!(json["message"], "active is required");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_keeps_omitted_fields() {
        let (app, _) = make_test_app().await;
        send(
            &app,
            "POST",
            "/api/events",
            Some(json!({
                "event_name": "Seminar",
                "start_date": "2025-10-01T09:00:00Z"
            })),
        )
        .await;

        let (status, json) = json_body(
            send(&app, "PUT", "/api/events/1", Some(json!({ "description": "x" }))).await,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Event updated successfully");
        assert_eq!(json["data"]["event_name"], "Seminar");
        assert_eq!(json["data"]["description"], "x");
        assert_eq!(json["data"]["start_date"], "2025-10-01T09:00:00Z");
    }

    #[tokio::test]
    #[serial]
    async fn test_delete_then_get_is_not_found() {
        let (app, _) = make_test_app().await;
        send(&app, "POST", "/api/events", Some(json!({ "event_name": "Gone" }))).await;

        let (status, json) = json_body(send(&app, "DELETE", "/api/events/1", None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Event deleted successfully");

        let (status, json) = json_body(send(&app, "GET", "/api/events/1", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Event not found");

        let (_, json) = json_body(send(&app, "GET", "/api/events", None).await).await;
        assert_eq!(json["count"], 0);

        let (status, _) = json_body(send(&app, "DELETE", "/api/events/1", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_non_numeric_id_is_bad_request() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(send(&app, "GET", "/api/events/abc", None).await).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid event ID");
        assert_eq!(json["message"], "Event ID must be a number");
    }

    #[tokio::test]
    #[serial]
    async fn test_negative_id_is_bad_request() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(send(&app, "GET", "/api/events/-1", None).await).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid event ID");
    }

    #[tokio::test]
    #[serial]
    async fn test_malformed_body_is_bad_request() {
        let (app, _) = make_test_app().await;

        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/api/events")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();
        let response = tower::ServiceExt::oneshot(app, req).await.unwrap();
        let (status, json) = json_body(response).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid request body");
    }

    #[tokio::test]
    #[serial]
    async fn test_event_with_sessions_graph() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let event = data.event("Graph").await;
        let class = data.class("IT001").await;
        let teacher = data.teacher("GV01").await;
        data.session(Some(event.id), Some(class.id), Some(teacher.id))
            .await;

        let uri = format!("/api/events/{}/sessions", event.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Event with sessions retrieved successfully");
        let sessions = json["data"]["sessions"].as_array().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0]["class"]["id"], class.id);
        assert_eq!(sessions[0]["teacher"]["id"], teacher.id);
        assert!(sessions[0].get("attendances").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_event_attendances_span_sessions() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let event = data.event("Target").await;
        let other = data.event("Other").await;
        let s1 = data.session(Some(event.id), None, None).await;
        let s2 = data.session(Some(event.id), None, None).await;
        let s3 = data.session(Some(other.id), None, None).await;
        let a = data.attendance(s1.id, "A").await;
        let b = data.attendance(s2.id, "B").await;
        data.attendance(s3.id, "C").await;

        let uri = format!("/api/events/{}/attendances", event.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&json["data"]), vec![a.id, b.id]);
        assert_eq!(json["data"][0]["session"]["event"]["id"], event.id);
    }
}
