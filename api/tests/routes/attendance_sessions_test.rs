#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use db::test_utils::TestData;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_and_fetch_session_with_relations() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let event = data.event("Workshop").await;
        let class = data.class("IT001").await;
        let teacher = data.teacher("GV01").await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/attendance-sessions",
                Some(json!({
                    "event_id": event.id,
                    "class_id": class.id,
                    "teacher_id": teacher.id.to_string(),
                    "session_date": "2025-10-01T09:00:00+07:00"
                })),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Attendance session created successfully");
        assert_eq!(json["data"]["teacher_id"], teacher.id);
        assert_eq!(json["data"]["session_date"], "2025-10-01T02:00:00Z");

        let id = json["data"]["id"].as_i64().unwrap();
        data.attendance(id, "A").await;

        let uri = format!("/api/attendance-sessions/{id}");
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["class"]["class_code"], "IT001");
        assert_eq!(json["data"]["teacher"]["id"], teacher.id);
        assert_eq!(json["data"]["attendances"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_negative_teacher_id_is_dropped() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/attendance-sessions",
                Some(json!({ "teacher_id": "-3" })),
            )
            .await,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(json["data"]["teacher_id"].is_null());
    }

    #[tokio::test]
    #[serial]
    async fn test_bad_session_date_is_rejected() {
        let (app, state) = make_test_app().await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/attendance-sessions",
                Some(json!({ "session_date": "01/10/2025" })),
            )
            .await,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(
            json["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid session date format")
        );
        assert!(state.sessions().get_all(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_event_is_not_found() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/attendance-sessions",
                Some(json!({ "event_id": 99 })),
            )
            .await,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Referenced resource not found");
        assert_eq!(json["message"], "events with id 99 not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_bad_id_and_unknown_id() {
        let (app, _) = make_test_app().await;

        let (status, json) =
            json_body(send(&app, "GET", "/api/attendance-sessions/x1", None).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid attendance session ID");

        let (status, _) =
            json_body(send(&app, "GET", "/api/attendance-sessions/5", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_list_filters_by_event() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let event = data.event("Target").await;
        let other = data.event("Other").await;
        let wanted = data.session(Some(event.id), None, None).await;
        data.session(Some(other.id), None, None).await;

        let (_, json) = json_body(send(&app, "GET", "/api/attendance-sessions", None).await).await;
        assert_eq!(json["count"], 2);

        let uri = format!("/api/attendance-sessions?event_id={}", event.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["id"], wanted.id);

        let (status, json) = json_body(
            send(&app, "GET", "/api/attendance-sessions?event_id=abc", None).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid query parameters");
    }

    #[tokio::test]
    #[serial]
    async fn test_update_rejects_non_numeric_teacher() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let session = data.session(None, None, None).await;
        let uri = format!("/api/attendance-sessions/{}", session.id);

        let (status, json) =
            json_body(send(&app, "PUT", &uri, Some(json!({ "teacher_id": "abc" }))).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Teacher ID must be a number");

        let class = data.class("IT002").await;
        let (status, json) =
            json_body(send(&app, "PUT", &uri, Some(json!({ "class_id": class.id }))).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["class_id"], class.id);
    }
}
