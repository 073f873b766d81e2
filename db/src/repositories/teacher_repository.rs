use crate::models::{attendance_session, teacher};
use crate::preload::{TeacherGraph, TeacherPreload};
use crate::repositories::attendance_session_repository::AttendanceSessionRepository;
use crate::repository::Gateway;
use sea_orm::DbErr;

#[derive(Clone, Debug)]
pub struct TeacherRepository {
    gateway: Gateway,
    sessions: AttendanceSessionRepository,
}

impl TeacherRepository {
    pub fn new(gateway: Gateway) -> Self {
        let sessions = AttendanceSessionRepository::new(gateway.clone());
        Self { gateway, sessions }
    }

    pub async fn get_all(&self) -> Result<Vec<teacher::Model>, DbErr> {
        self.gateway.all::<teacher::Entity>().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<teacher::Model, DbErr> {
        self.gateway.first::<teacher::Entity>(id).await
    }

    pub async fn get_by_id(
        &self,
        id: i64,
        preloads: &[TeacherPreload],
    ) -> Result<TeacherGraph, DbErr> {
        let teacher = self.find_by_id(id).await?;

        let sessions = match TeacherPreload::sessions(preloads) {
            Some(nested) => Some(
                self.sessions
                    .children_of(attendance_session::Column::TeacherId, &[teacher.id], &nested)
                    .await?,
            ),
            None => None,
        };

        Ok(TeacherGraph { teacher, sessions })
    }

    pub async fn create(&self, teacher: teacher::ActiveModel) -> Result<teacher::Model, DbErr> {
        self.gateway.create::<teacher::Entity>(teacher).await
    }
}
