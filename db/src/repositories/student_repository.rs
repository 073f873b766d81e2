use crate::models::student;
use crate::repository::Gateway;
use sea_orm::DbErr;

#[derive(Clone, Debug)]
pub struct StudentRepository {
    gateway: Gateway,
}

impl StudentRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self) -> Result<Vec<student::Model>, DbErr> {
        self.gateway.all::<student::Entity>().await
    }

    pub async fn create(&self, student: student::ActiveModel) -> Result<student::Model, DbErr> {
        self.gateway.create::<student::Entity>(student).await
    }
}
