use crate::service::{AppError, ToActiveModel};
use chrono::{DateTime, Utc};
use db::{
    Gateway,
    models::teacher::{ActiveModel, Entity},
    preload::{SessionPreload, TeacherGraph, TeacherPreload},
    repositories::TeacherRepository,
};
use sea_orm::{NotSet, Set};
use tracing::info;

pub use db::models::teacher::Model as Teacher;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTeacher {
    pub teacher_code: Option<String>,
    pub teacher_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub work_unit: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

impl ToActiveModel<Entity> for CreateTeacher {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: NotSet,
            teacher_code: Set(self.teacher_code),
            teacher_name: Set(self.teacher_name),
            phone: Set(self.phone),
            email: Set(self.email),
            work_unit: Set(self.work_unit),
            date_of_birth: Set(self.date_of_birth),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
    }
}

#[derive(Clone, Debug)]
pub struct TeacherService {
    teachers: TeacherRepository,
}

impl TeacherService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            teachers: TeacherRepository::new(gateway),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(self.teachers.get_all().await?)
    }

    /// The teacher with the sessions they run, each carrying its class.
    pub async fn get_by_id(&self, id: i64) -> Result<TeacherGraph, AppError> {
        Ok(self
            .teachers
            .get_by_id(id, &[TeacherPreload::SessionsWith(SessionPreload::Class)])
            .await?)
    }

    pub async fn create(&self, params: CreateTeacher) -> Result<Teacher, AppError> {
        let teacher = self.teachers.create(params.into_active_model()?).await?;
        info!(teacher_id = teacher.id, "Teacher created");
        Ok(teacher)
    }
}
