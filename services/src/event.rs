use crate::service::{AppError, ApplyPatch, ToActiveModel};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use db::{
    Gateway,
    models::event::{ActiveModel, Entity},
    preload::{EventGraph, EventPreload, SessionPreload},
    repositories::EventRepository,
};
use sea_orm::{IntoActiveModel, NotSet, Set};
use tracing::info;

pub use db::models::event::Model as Event;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateEvent {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

/// Partial update. `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEvent {
    pub event_name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
}

impl ToActiveModel<Entity> for CreateEvent {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: NotSet,
            event_name: Set(self.event_name),
            description: Set(self.description),
            start_date: Set(self.start_date),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
    }
}

impl ApplyPatch<Entity> for UpdateEvent {
    fn apply_to(self, active: &mut ActiveModel) -> Result<(), AppError> {
        if let Some(event_name) = self.event_name {
            active.event_name = Set(Some(event_name));
        }
        if let Some(description) = self.description {
            active.description = Set(Some(description));
        }
        if let Some(start_date) = self.start_date {
            active.start_date = Set(Some(start_date));
        }
        Ok(())
    }
}

/// Event operations used by the HTTP layer.
///
/// `DbEventService` is the production implementation; tests swap in a double.
#[async_trait]
pub trait EventService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Event>, AppError>;

    async fn get_by_id(&self, id: i64) -> Result<Event, AppError>;

    /// Event → Sessions → {Class, Teacher}.
    async fn get_by_id_with_sessions(&self, id: i64) -> Result<EventGraph, AppError>;

    async fn create(&self, params: CreateEvent) -> Result<Event, AppError>;

    async fn update(&self, id: i64, params: UpdateEvent) -> Result<Event, AppError>;

    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn get_active(&self) -> Result<Vec<Event>, AppError>;

    /// Overwrites the active flag with `is_active`. Not a toggle.
    async fn set_active(&self, id: i64, is_active: bool) -> Result<Event, AppError>;
}

#[derive(Clone, Debug)]
pub struct DbEventService {
    events: EventRepository,
}

impl DbEventService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            events: EventRepository::new(gateway),
        }
    }
}

#[async_trait]
impl EventService for DbEventService {
    async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.get_all().await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Event, AppError> {
        Ok(self.events.get_by_id(id).await?)
    }

    async fn get_by_id_with_sessions(&self, id: i64) -> Result<EventGraph, AppError> {
        let graph = self
            .events
            .get_by_id_with(
                id,
                &[
                    EventPreload::SessionsWith(SessionPreload::Class),
                    EventPreload::SessionsWith(SessionPreload::Teacher),
                ],
            )
            .await?;
        Ok(graph)
    }

    async fn create(&self, params: CreateEvent) -> Result<Event, AppError> {
        let event = self.events.create(params.into_active_model()?).await?;
        info!(event_id = event.id, "Event created");
        Ok(event)
    }

    async fn update(&self, id: i64, params: UpdateEvent) -> Result<Event, AppError> {
        let mut active = self.events.get_by_id(id).await?.into_active_model();
        params.apply_to(&mut active)?;

        let event = self.events.update(active).await?;
        info!(event_id = event.id, "Event updated");
        Ok(event)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.events.delete(id).await?;
        info!(event_id = id, "Event deleted");
        Ok(())
    }

    async fn get_active(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.events.get_active().await?)
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<Event, AppError> {
        let mut active = self.events.get_by_id(id).await?.into_active_model();
        active.is_active = Set(is_active);

        let event = self.events.update(active).await?;
        info!(event_id = event.id, is_active, "Event active flag set");
        Ok(event)
    }
}
