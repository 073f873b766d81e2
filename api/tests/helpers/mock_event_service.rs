use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use db::preload::EventGraph;
use services::{
    event::{CreateEvent, Event, EventService, UpdateEvent},
    service::AppError,
};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    GetAll,
    GetById(i64),
    GetByIdWithSessions(i64),
    Create(CreateEvent),
    Update(i64, UpdateEvent),
    Delete(i64),
    GetActive,
    SetActive(i64, bool),
}

/// Records every call and answers with a fixed event. Ids listed in
/// `missing` answer `NotFound`.
#[derive(Default)]
pub struct MockEventService {
    calls: Mutex<Vec<Call>>,
    missing: Vec<i64>,
}

impl MockEventService {
    pub fn with_missing(ids: &[i64]) -> Self {
        Self {
            missing: ids.to_vec(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn lookup(&self, id: i64) -> Result<Event, AppError> {
        if self.missing.contains(&id) {
            Err(AppError::NotFound(format!("events with id {id} not found")))
        } else {
            Ok(canned_event(id))
        }
    }
}

pub fn canned_event(id: i64) -> Event {
    let at = Utc.with_ymd_and_hms(2025, 10, 1, 9, 0, 0).unwrap();
    Event {
        id,
        event_name: Some(format!("Event {id}")),
        description: None,
        start_date: Some(at),
        is_active: true,
        created_at: at,
        updated_at: at,
        deleted_at: None,
    }
}

#[async_trait]
impl EventService for MockEventService {
    async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        self.record(Call::GetAll);
        Ok(vec![canned_event(1), canned_event(2)])
    }

    async fn get_by_id(&self, id: i64) -> Result<Event, AppError> {
        self.record(Call::GetById(id));
        self.lookup(id)
    }

    async fn get_by_id_with_sessions(&self, id: i64) -> Result<EventGraph, AppError> {
        self.record(Call::GetByIdWithSessions(id));
        Ok(EventGraph {
            event: self.lookup(id)?,
            sessions: Some(Vec::new()),
        })
    }

    async fn create(&self, params: CreateEvent) -> Result<Event, AppError> {
        self.record(Call::Create(params.clone()));
        Ok(Event {
            event_name: params.event_name,
            description: params.description,
            ..canned_event(10)
        })
    }

    async fn update(&self, id: i64, params: UpdateEvent) -> Result<Event, AppError> {
        self.record(Call::Update(id, params));
        self.lookup(id)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.record(Call::Delete(id));
        self.lookup(id).map(|_| ())
    }

    async fn get_active(&self) -> Result<Vec<Event>, AppError> {
        self.record(Call::GetActive);
        Ok(vec![canned_event(1)])
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Event, AppError> {
        self.record(Call::SetActive(id, is_active));
        Ok(Event {
            is_active,
            ..self.lookup(id)?
        })
    }
}
