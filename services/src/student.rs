use crate::service::{AppError, ToActiveModel};
use chrono::{DateTime, Utc};
use db::{
    Gateway,
    models::student::{ActiveModel, Entity},
    repositories::{ClassRepository, StudentRepository},
};
use sea_orm::{NotSet, Set};
use tracing::info;

pub use db::models::student::Model as Student;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStudent {
    pub student_code: Option<String>,
    pub student_name: Option<String>,
    pub class_id: Option<i64>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub work_unit: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
}

impl ToActiveModel<Entity> for CreateStudent {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: NotSet,
            student_code: Set(self.student_code),
            student_name: Set(self.student_name),
            class_id: Set(self.class_id),
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
pub struct StudentService {
    students: StudentRepository,
    classes: ClassRepository,
}

impl StudentService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            students: StudentRepository::new(gateway.clone()),
            classes: ClassRepository::new(gateway),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.students.get_all().await?)
    }

    pub async fn create(&self, params: CreateStudent) -> Result<Student, AppError> {
        if let Some(class_id) = params.class_id {
            self.classes.find_by_id(class_id).await?;
        }

        let student = self.students.create(params.into_active_model()?).await?;
        info!(student_id = student.id, class_id = ?student.class_id, "Student created");
        Ok(student)
    }
}
