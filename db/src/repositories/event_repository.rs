use crate::models::{attendance_session, event};
use crate::preload::{EventGraph, EventPreload, group_by_parent};
use crate::repositories::attendance_session_repository::AttendanceSessionRepository;
use crate::repository::Gateway;
use sea_orm::{ColumnTrait, Condition, DbErr};

#[derive(Clone, Debug)]
pub struct EventRepository {
    gateway: Gateway,
    sessions: AttendanceSessionRepository,
}

impl EventRepository {
    pub fn new(gateway: Gateway) -> Self {
        let sessions = AttendanceSessionRepository::new(gateway.clone());
        Self { gateway, sessions }
    }

    pub async fn get_all(&self) -> Result<Vec<event::Model>, DbErr> {
        self.gateway.all::<event::Entity>().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<event::Model, DbErr> {
        self.gateway.first::<event::Entity>(id).await
    }

    /// Loads one event together with the requested relation paths.
    pub async fn get_by_id_with(
        &self,
        id: i64,
        preloads: &[EventPreload],
    ) -> Result<EventGraph, DbErr> {
        let event = self.get_by_id(id).await?;

        let sessions = match EventPreload::sessions(preloads) {
            Some(nested) => Some(
                self.sessions
                    .children_of(attendance_session::Column::EventId, &[event.id], &nested)
                    .await?,
            ),
            None => None,
        };

        let sessions = sessions.map(|rows| {
            group_by_parent(rows, |s| s.session.event_id)
                .remove(&event.id)
                .unwrap_or_default()
        });

        Ok(EventGraph { event, sessions })
    }

    pub async fn get_active(&self) -> Result<Vec<event::Model>, DbErr> {
        self.gateway
            .find::<event::Entity>(Condition::all().add(event::Column::IsActive.eq(true)))
            .await
    }

    pub async fn create(&self, event: event::ActiveModel) -> Result<event::Model, DbErr> {
        self.gateway.create::<event::Entity>(event).await
    }

    pub async fn update(&self, event: event::ActiveModel) -> Result<event::Model, DbErr> {
        self.gateway.update::<event::Entity>(event).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbErr> {
        self.gateway.delete::<event::Entity>(id).await
    }
}
