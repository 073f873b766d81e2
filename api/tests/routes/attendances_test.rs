#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use chrono::{DateTime, Duration, Utc};
    use db::test_utils::TestData;
    use serde_json::{Value, json};
    use serial_test::serial;

    fn walk_in(session_id: i64) -> Value {
        json!({
            "session_id": session_id,
            "student_name": "Nguyen Van A",
            "email": "a@example.com",
            "phone": "0123456789",
            "work_unit": "Phong IT",
            "work_unit_address": "123 Nguyen Trai"
        })
    }

    #[tokio::test]
    #[serial]
    async fn test_create_stamps_check_in() {
        let (app, state) = make_test_app().await;
        let session = TestData::new(state.gateway()).session(None, None, None).await;

        let mut body = walk_in(session.id);
        body["checked_in_at"] = json!("2000-01-01T00:00:00Z");
        let (status, json) =
            json_body(send(&app, "POST", "/api/attendances", Some(body)).await).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Attendance created successfully");
        let checked_in: DateTime<Utc> = json["data"]["checked_in_at"]
            .as_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!((Utc::now() - checked_in).abs() < Duration::seconds(5));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_field_writes_nothing() {
        let (app, state) = make_test_app().await;
        let session = TestData::new(state.gateway()).session(None, None, None).await;

        for field in ["student_name", "email", "phone", "work_unit", "work_unit_address"] {
            let mut body = walk_in(session.id);
            body.as_object_mut().unwrap().remove(field);

            let (status, json) =
                json_body(send(&app, "POST", "/api/attendances", Some(body)).await).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(json["message"], format!("{field} is required"));
        }

        let mut body = walk_in(session.id);
        body.as_object_mut().unwrap().remove("session_id");
        let (status, _) = json_body(send(&app, "POST", "/api/attendances", Some(body)).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, json) = json_body(send(&app, "GET", "/api/attendances", None).await).await;
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_session_is_not_found() {
        let (app, _) = make_test_app().await;

        let (status, _) =
            json_body(send(&app, "POST", "/api/attendances", Some(walk_in(42))).await).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_by_id_and_by_session() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let class = data.class("IT001").await;
        let session = data.session(None, Some(class.id), None).await;
        let other = data.session(None, None, None).await;
        let a = data.attendance(session.id, "A").await;
        data.attendance(other.id, "B").await;

        let uri = format!("/api/attendances/{}", a.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["session"]["id"], session.id);
        assert_eq!(json["data"]["session"]["class"]["id"], class.id);

        let uri = format!("/api/sessions/{}/attendances", session.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);
        assert_eq!(json["data"][0]["student_name"], "A");

        let (status, json) =
            json_body(send(&app, "GET", "/api/attendances/nope", None).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Attendance ID must be a number");

        let (status, json) = json_body(send(&app, "GET", "/api/attendances/999", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Attendance not found");
    }
}
