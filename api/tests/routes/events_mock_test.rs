#[cfg(test)]
mod tests {
    use crate::helpers::{
        json_body, make_test_app_with,
        mock_event_service::{Call, MockEventService},
        send,
    };
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use services::event::{CreateEvent, UpdateEvent};
    use std::sync::Arc;

    #[tokio::test]
    #[serial]
    async fn test_create_forwards_body_fields() {
        let mock = Arc::new(MockEventService::default());
        let app = make_test_app_with(mock.clone()).await;

        let (status, json) = json_body(
            send(
                &app,
                "POST",
                "/api/events",
                Some(json!({ "event_name": "Workshop AI", "description": "Intro" })),
            )
            .await,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["event_name"], "Workshop AI");
        assert_eq!(
            mock.calls(),
            vec![Call::Create(CreateEvent {
                event_name: Some("Workshop AI".into()),
                description: Some("Intro".into()),
                start_date: None,
            })]
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_set_active_passes_flag() {
        let mock = Arc::new(MockEventService::default());
        let app = make_test_app_with(mock.clone()).await;

        let (status, json) = json_body(
            send(&app, "PUT", "/api/events/7/active", Some(json!({ "active": 0 }))).await,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Event status updated successfully");
        assert_eq!(json["data"]["is_active"], false);

        send(&app, "PUT", "/api/events/7/active", Some(json!({ "active": 1 }))).await;

        assert_eq!(
            mock.calls(),
            vec![Call::SetActive(7, false), Call::SetActive(7, true)]
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_flag_never_reaches_service() {
        let mock = Arc::new(MockEventService::default());
        let app = make_test_app_with(mock.clone()).await;

        let (status, _) = json_body(
            send(&app, "PUT", "/api/events/7/active", Some(json!({ "active": 2 }))).await,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(mock.calls().is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_update_forwards_only_present_fields() {
        let mock = Arc::new(MockEventService::default());
        let app = make_test_app_with(mock.clone()).await;

        send(&app, "PUT", "/api/events/3", Some(json!({ "description": "x" }))).await;

        assert_eq!(
            mock.calls(),
            vec![Call::Update(
                3,
                UpdateEvent {
                    description: Some("x".into()),
                    ..UpdateEvent::default()
                }
            )]
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_not_found_maps_to_404() {
        let mock = Arc::new(MockEventService::with_missing(&[9]));
        let app = make_test_app_with(mock.clone()).await;

        let (status, json) = json_body(send(&app, "GET", "/api/events/9", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Event not found");

        let (status, _) = json_body(send(&app, "DELETE", "/api/events/9", None).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        assert_eq!(mock.calls(), vec![Call::GetById(9), Call::Delete(9)]);
    }

    #[tokio::test]
    #[serial]
    async fn test_active_route_is_not_an_id() {
        let mock = Arc::new(MockEventService::default());
        let app = make_test_app_with(mock.clone()).await;

        let (status, json) = json_body(send(&app, "GET", "/api/events/active", None).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["count"], 1);

        let (_, json) = json_body(send(&app, "GET", "/api/events", None).await).await;
        assert_eq!(json["count"], 2);
        assert_eq!(json["message"], "Events retrieved successfully");

        send(&app, "GET", "/api/events/4/sessions", None).await;

        assert_eq!(
            mock.calls(),
            vec![Call::GetActive, Call::GetAll, Call::GetByIdWithSessions(4)]
        );
    }
}
