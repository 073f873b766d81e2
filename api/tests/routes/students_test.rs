#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use db::test_utils::TestData;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_student_in_class() {
        let (app, state) = make_test_app().await;
        let class = TestData::new(state.gateway()).class("IT001").await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/students",
                Some(json!({ "student_code": "SV01", "class_id": class.id })),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Student created successfully");
        assert_eq!(json["data"]["class_id"], class.id);

        let (_, json) = json_body(send(&app, "GET", "/api/students", None).await).await;
        assert_eq!(json["count"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_class_is_not_found() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(&app, "POST", "/api/students", Some(json!({ "class_id": 3 }))).await,
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Class not found");

        let (_, json) = json_body(send(&app, "GET", "/api/students", None).await).await;
        assert_eq!(json["count"], 0);
    }
}
