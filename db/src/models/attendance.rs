use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::repository::SoftDeletable;

/// A walk-in sign-in sheet entry. The attendee details are self-reported and
/// are not linked to a registered student.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub session_id: Option<i64>,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub student_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub work_unit: Option<String>,
    pub work_unit_address: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attendance_session::Entity",
        from = "Column::SessionId",
        to = "super::attendance_session::Column::Id"
    )]
    Session,
}

impl Related<super::attendance_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl SoftDeletable for Entity {
    fn id_column() -> Column {
        Column::Id
    }

    fn deleted_at_column() -> Column {
        Column::DeletedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn id_of(model: &Model) -> i64 {
        model.id
    }
}
