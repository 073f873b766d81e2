use crate::models::{attendance, attendance_session, class, event, student, teacher};
use crate::repository::Gateway;
use chrono::Utc;
use migration::Migrator;
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, NotSet};
use sea_orm_migration::MigratorTrait;

/// Fresh in-memory SQLite database with every migration applied.
///
/// The pool is pinned to one connection: each new SQLite memory connection
/// would otherwise see its own empty database.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Row builders for tests. Each helper inserts directly through the gateway and
/// panics on failure.
pub struct TestData<'a> {
    gateway: &'a Gateway,
}

impl<'a> TestData<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    pub async fn event(&self, name: &str) -> event::Model {
        let now = Utc::now();
        self.gateway
            .create::<event::Entity>(event::ActiveModel {
                id: NotSet,
                event_name: Set(Some(name.to_string())),
                description: Set(None),
                start_date: Set(None),
                is_active: Set(true),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert event")
    }

    pub async fn class(&self, code: &str) -> class::Model {
        let now = Utc::now();
        self.gateway
            .create::<class::Entity>(class::ActiveModel {
                id: NotSet,
                class_code: Set(Some(code.to_string())),
                class_name: Set(Some(format!("Class {code}"))),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert class")
    }

    pub async fn teacher(&self, code: &str) -> teacher::Model {
        let now = Utc::now();
        self.gateway
            .create::<teacher::Entity>(teacher::ActiveModel {
                id: NotSet,
                teacher_code: Set(Some(code.to_string())),
                teacher_name: Set(Some(format!("Teacher {code}"))),
                phone: Set(None),
                email: Set(None),
                work_unit: Set(None),
                date_of_birth: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert teacher")
    }

    pub async fn student(&self, code: &str, class_id: Option<i64>) -> student::Model {
        let now = Utc::now();
        self.gateway
            .create::<student::Entity>(student::ActiveModel {
                id: NotSet,
                student_code: Set(Some(code.to_string())),
                student_name: Set(Some(format!("Student {code}"))),
                class_id: Set(class_id),
                phone: Set(None),
                email: Set(None),
                work_unit: Set(None),
                date_of_birth: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert student")
    }

    pub async fn session(
        &self,
        event_id: Option<i64>,
        class_id: Option<i64>,
        teacher_id: Option<i64>,
    ) -> attendance_session::Model {
        let now = Utc::now();
        self.gateway
            .create::<attendance_session::Entity>(attendance_session::ActiveModel {
                id: NotSet,
                event_id: Set(event_id),
                class_id: Set(class_id),
                teacher_id: Set(teacher_id),
                session_date: Set(Some(now)),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert attendance session")
    }

    pub async fn attendance(&self, session_id: i64, name: &str) -> attendance::Model {
        let now = Utc::now();
        self.gateway
            .create::<attendance::Entity>(attendance::ActiveModel {
                id: NotSet,
                session_id: Set(Some(session_id)),
                checked_in_at: Set(Some(now)),
                student_name: Set(Some(name.to_string())),
                email: Set(Some("walkin@example.com".to_string())),
                phone: Set(Some("0123456789".to_string())),
                work_unit: Set(Some("IT".to_string())),
                work_unit_address: Set(Some("1 Main St".to_string())),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .await
            .expect("Failed to insert attendance")
    }
}
