use crate::models::{attendance_session, class, student};
use crate::preload::{ClassGraph, ClassPreload, group_by_parent};
use crate::repositories::attendance_session_repository::AttendanceSessionRepository;
use crate::repository::Gateway;
use sea_orm::DbErr;

#[derive(Clone, Debug)]
pub struct ClassRepository {
    gateway: Gateway,
    sessions: AttendanceSessionRepository,
}

impl ClassRepository {
    pub fn new(gateway: Gateway) -> Self {
        let sessions = AttendanceSessionRepository::new(gateway.clone());
        Self { gateway, sessions }
    }

    pub async fn get_all(&self) -> Result<Vec<class::Model>, DbErr> {
        self.gateway.all::<class::Entity>().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<class::Model, DbErr> {
        self.gateway.first::<class::Entity>(id).await
    }

    pub async fn get_by_id(&self, id: i64, preloads: &[ClassPreload]) -> Result<ClassGraph, DbErr> {
        let class = self.find_by_id(id).await?;

        let students = if preloads.contains(&ClassPreload::Students) {
            let rows = self
                .gateway
                .find_children::<student::Entity>(student::Column::ClassId, &[class.id])
                .await?;
            Some(
                group_by_parent(rows, |s| s.class_id)
                    .remove(&class.id)
                    .unwrap_or_default(),
            )
        } else {
            None
        };

        let sessions = match ClassPreload::sessions(preloads) {
            Some(nested) => Some(
                self.sessions
                    .children_of(attendance_session::Column::ClassId, &[class.id], &nested)
                    .await?,
            ),
            None => None,
        };

        Ok(ClassGraph {
            class,
            students,
            sessions,
        })
    }

    pub async fn create(&self, class: class::ActiveModel) -> Result<class::Model, DbErr> {
        self.gateway.create::<class::Entity>(class).await
    }
}
