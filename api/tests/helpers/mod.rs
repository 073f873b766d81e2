pub mod app;
pub mod mock_event_service;

pub use app::{json_body, make_test_app, make_test_app_with, send};
