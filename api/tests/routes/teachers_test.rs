#[cfg(test)]
mod tests {
    use crate::helpers::{json_body, make_test_app, send};
    use axum::http::StatusCode;
    use db::test_utils::TestData;
    use serde_json::json;
    use serial_test::serial;

    #[tokio::test]
    #[serial]
    async fn test_create_and_list_teachers() {
        let (app, _) = make_test_app().await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/teachers",
                Some(json!({ "teacher_code": "GV01", "teacher_name": "Tran Thi B" })),
            )
            .await,
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Teacher created successfully");

        let (status, _) = json_body(send(&app, "POST", "/api/teachers", Some(json!({}))).await).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, json) = json_body(send(&app, "GET", "/api/teachers", None).await).await;
        assert_eq!(json["count"], 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_get_teacher_with_sessions() {
        let (app, state) = make_test_app().await;
        let data = TestData::new(state.gateway());
        let teacher = data.teacher("GV01").await;
        let class = data.class("IT001").await;
        data.session(None, Some(class.id), Some(teacher.id)).await;

        let uri = format!("/api/teachers/{}", teacher.id);
        let (status, json) = json_body(send(&app, "GET", &uri, None).await).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["sessions"][0]["class"]["id"], class.id);

        let (status, json) = json_body(send(&app, "GET", "/api/teachers/t", None).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid teacher ID");
    }
}
