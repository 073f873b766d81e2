use crate::models::{attendance, attendance_session};
use crate::preload::{AttendanceGraph, AttendancePreload, distinct_ids};
use crate::repositories::attendance_session_repository::AttendanceSessionRepository;
use crate::repository::Gateway;
use sea_orm::{
    ColumnTrait, Condition, DbErr, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

#[derive(Clone, Debug)]
pub struct AttendanceRepository {
    gateway: Gateway,
    sessions: AttendanceSessionRepository,
}

impl AttendanceRepository {
    pub fn new(gateway: Gateway) -> Self {
        let sessions = AttendanceSessionRepository::new(gateway.clone());
        Self { gateway, sessions }
    }

    pub async fn get_all(
        &self,
        preloads: &[AttendancePreload],
    ) -> Result<Vec<AttendanceGraph>, DbErr> {
        let rows = self.gateway.all::<attendance::Entity>().await?;
        self.resolve(rows, preloads).await
    }

    pub async fn get_by_id(
        &self,
        id: i64,
        preloads: &[AttendancePreload],
    ) -> Result<AttendanceGraph, DbErr> {
        let row = self.gateway.first::<attendance::Entity>(id).await?;
        self.resolve(vec![row], preloads)
            .await?
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("attendance {id} not found")))
    }

    pub async fn get_by_session_id(&self, session_id: i64) -> Result<Vec<attendance::Model>, DbErr> {
        self.gateway
            .find::<attendance::Entity>(
                Condition::all().add(attendance::Column::SessionId.eq(session_id)),
            )
            .await
    }

    /// Attendance rows whose live session belongs to `event_id`.
    ///
    /// One inner join against `attendance_sessions`, so the filter and the rows
    /// come from the same snapshot.
    pub async fn get_by_event_id(
        &self,
        event_id: i64,
        preloads: &[AttendancePreload],
    ) -> Result<Vec<AttendanceGraph>, DbErr> {
        let rows = Gateway::select::<attendance::Entity>()
            .join(JoinType::InnerJoin, attendance::Relation::Session.def())
            .filter(attendance_session::Column::EventId.eq(event_id))
            .filter(attendance_session::Column::DeletedAt.is_null())
            .order_by_asc(attendance::Column::Id)
            .all(self.gateway.connection())
            .await?;
        self.resolve(rows, preloads).await
    }

    pub async fn create(
        &self,
        attendance: attendance::ActiveModel,
    ) -> Result<attendance::Model, DbErr> {
        self.gateway.create::<attendance::Entity>(attendance).await
    }

    async fn resolve(
        &self,
        rows: Vec<attendance::Model>,
        preloads: &[AttendancePreload],
    ) -> Result<Vec<AttendanceGraph>, DbErr> {
        let Some(nested) = AttendancePreload::session(preloads) else {
            return Ok(rows
                .into_iter()
                .map(|attendance| AttendanceGraph {
                    attendance,
                    session: None,
                })
                .collect());
        };

        let ids = distinct_ids(rows.iter().map(|a| a.session_id));
        let sessions = self.sessions.by_ids(&ids, &nested).await?;

        Ok(rows
            .into_iter()
            .map(|attendance| {
                let session = attendance
                    .session_id
                    .and_then(|id| sessions.get(&id).cloned());
                AttendanceGraph {
                    attendance,
                    session,
                }
            })
            .collect())
    }
}
