use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

/// Tables are created parent-first so `attendance_sessions` and `attendances`
/// come after the rows they point at.
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510010001_create_classes::Migration),
            Box::new(migrations::m202510010002_create_teachers::Migration),
            Box::new(migrations::m202510010003_create_students::Migration),
            Box::new(migrations::m202510010004_create_events::Migration),
            Box::new(migrations::m202510010005_create_attendance_sessions::Migration),
            Box::new(migrations::m202510010006_create_attendances::Migration),
        ]
    }
}
