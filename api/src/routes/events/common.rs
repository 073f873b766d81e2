use chrono::{DateTime, Utc};
use serde::Deserialize;
use services::event::{CreateEvent, UpdateEvent};
use validator::Validate;

/// Body for both `POST /events` and `PUT /events/{id}`. Every field is optional;
/// on update an omitted field keeps its stored value.
#[derive(Debug, Default, Deserialize)]
pub struct EventRequest {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

impl From<EventRequest> for CreateEvent {
    fn from(req: EventRequest) -> Self {
        Self {
            event_name: req.event_name,
            description: req.description,
            start_date: req.start_date,
        }
    }
}

impl From<EventRequest> for UpdateEvent {
    fn from(req: EventRequest) -> Self {
        Self {
            event_name: req.event_name,
            description: req.description,
            start_date: req.start_date,
        }
    }
}

/// Body for `PUT /events/{id}/active`: `{"active": 0}` or `{"active": 1}`.
#[derive(Debug, Deserialize, Validate)]
pub struct SetActiveRequest {
    #[validate(
        required(message = "active is required"),
        range(min = 0, max = 1, message = "active must be 0 or 1")
    )]
    pub active: Option<i64>,
}

impl SetActiveRequest {
    /// The validated flag. Only meaningful after `validate()` succeeded.
    pub fn is_active(&self) -> bool {
        self.active == Some(1)
    }
}
