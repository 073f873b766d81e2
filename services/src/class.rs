use crate::service::{AppError, ToActiveModel};
use chrono::Utc;
use db::{
    Gateway,
    models::class::{ActiveModel, Entity},
    preload::{ClassGraph, ClassPreload},
    repositories::ClassRepository,
};
use sea_orm::{NotSet, Set};
use tracing::info;

pub use db::models::class::Model as Class;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateClass {
    pub class_code: String,
    pub class_name: String,
}

impl ToActiveModel<Entity> for CreateClass {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: NotSet,
            class_code: Set(Some(self.class_code)),
            class_name: Set(Some(self.class_name)),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
    }
}

#[derive(Clone, Debug)]
pub struct ClassService {
    classes: ClassRepository,
}

impl ClassService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            classes: ClassRepository::new(gateway),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Class>, AppError> {
        Ok(self.classes.get_all().await?)
    }

    /// The class with its students and sessions.
    pub async fn get_by_id(&self, id: i64) -> Result<ClassGraph, AppError> {
        Ok(self
            .classes
            .get_by_id(id, &[ClassPreload::Students, ClassPreload::Sessions])
            .await?)
    }

    pub async fn create(&self, params: CreateClass) -> Result<Class, AppError> {
        let class = self.classes.create(params.into_active_model()?).await?;
        info!(class_id = class.id, "Class created");
        Ok(class)
    }
}
