#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use db::test_utils::TestData;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_requires_code_and_name() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(&app, "POST", "/api/classes", Some(json!({ "class_code": "IT001" }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "class_name is required");

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/classes",
                Some(json!({ "class_code": "IT001", "class_name": "CNTT" })),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Class created successfully");

        let (_, json) = json_body(send(&app, "GET", "/api/classes", None).await).await;
        assert_eq!(json["count"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_class_with_students_and_sessions() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let class = data.class("IT001").await;
        data.student("SV01", Some(class.id)).await;
        data.student("SV02", Some(class.id)).await;
        data.session(None, Some(class.id), None).await;

        let uri = format!("/api/classes/{}", class.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["students"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"]["sessions"].as_array().unwrap().len(), 1);

        let (status, json) = json_body(send(&app, "GET", "/api/classes/404", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Class not found");
    }
}
