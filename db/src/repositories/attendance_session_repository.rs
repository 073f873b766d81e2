use crate::models::{attendance, attendance_session, class, event, teacher};
use crate::preload::{SessionGraph, SessionPreload, describe, distinct_ids, group_by_parent};
use crate::repository::{Gateway, SoftDeletable};
use sea_orm::{ColumnTrait, Condition, DbErr};
use std::collections::HashMap;
use tracing::debug;

/// Sessions plus the resolver that attaches their Event/Class/Teacher/Attendances.
///
/// The other repositories delegate to this one whenever a preload path passes
/// through the session level.
#[derive(Clone, Debug)]
pub struct AttendanceSessionRepository {
    gateway: Gateway,
}

impl AttendanceSessionRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn get_all(&self, preloads: &[SessionPreload]) -> Result<Vec<SessionGraph>, DbErr> {
        let sessions = self.gateway.all::<attendance_session::Entity>().await?;
        self.resolve(sessions, preloads).await
    }

    pub async fn get_by_event_id(
        &self,
        event_id: i64,
        preloads: &[SessionPreload],
    ) -> Result<Vec<SessionGraph>, DbErr> {
        let sessions = self
            .gateway
            .find::<attendance_session::Entity>(
                Condition::all().add(attendance_session::Column::EventId.eq(event_id)),
            )
            .await?;
        self.resolve(sessions, preloads).await
    }

    pub async fn get_by_id(
        &self,
        id: i64,
        preloads: &[SessionPreload],
    ) -> Result<SessionGraph, DbErr> {
        let session = self.find_by_id(id).await?;
        let mut graphs = self.resolve(vec![session], preloads).await?;
        graphs
            .pop()
            .ok_or_else(|| DbErr::RecordNotFound(format!("attendance session {id} not found")))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<attendance_session::Model, DbErr> {
        self.gateway.first::<attendance_session::Entity>(id).await
    }

    pub async fn create(
        &self,
        session: attendance_session::ActiveModel,
    ) -> Result<attendance_session::Model, DbErr> {
        self.gateway
            .create::<attendance_session::Entity>(session)
            .await
    }

    pub async fn update(
        &self,
        session: attendance_session::ActiveModel,
    ) -> Result<attendance_session::Model, DbErr> {
        self.gateway
            .update::<attendance_session::Entity>(session)
            .await
    }

    /// Sessions whose `fk_column` is one of `parent_ids`, resolved with `preloads`.
    pub(crate) async fn children_of(
        &self,
        fk_column: attendance_session::Column,
        parent_ids: &[i64],
        preloads: &[SessionPreload],
    ) -> Result<Vec<SessionGraph>, DbErr> {
        let sessions = self
            .gateway
            .find_children::<attendance_session::Entity>(fk_column, parent_ids)
            .await?;
        self.resolve(sessions, preloads).await
    }

    /// Sessions keyed by id, resolved with `preloads`.
    pub(crate) async fn by_ids(
        &self,
        ids: &[i64],
        preloads: &[SessionPreload],
    ) -> Result<HashMap<i64, SessionGraph>, DbErr> {
        let sessions = self
            .gateway
            .find_by_ids::<attendance_session::Entity>(ids)
            .await?
            .into_values()
            .collect();
        let graphs = self.resolve(sessions, preloads).await?;
        Ok(graphs.into_iter().map(|g| (g.session.id, g)).collect())
    }

    /// Attaches the requested relations, one `IN (...)` query per relation.
    pub(crate) async fn resolve(
        &self,
        sessions: Vec<attendance_session::Model>,
        preloads: &[SessionPreload],
    ) -> Result<Vec<SessionGraph>, DbErr> {
        let mut graphs: Vec<SessionGraph> = sessions.into_iter().map(SessionGraph::bare).collect();
        if graphs.is_empty() || preloads.is_empty() {
            return Ok(graphs);
        }

        debug!(
            sessions = graphs.len(),
            preloads = %describe(preloads),
            "Resolving session preloads"
        );

        if preloads.contains(&SessionPreload::Event) {
            let events = self
                .parents::<event::Entity>(&graphs, |s| s.event_id)
                .await?;
            for graph in &mut graphs {
                graph.event = graph.session.event_id.and_then(|id| events.get(&id).cloned());
            }
        }

        if preloads.contains(&SessionPreload::Class) {
            let classes = self
                .parents::<class::Entity>(&graphs, |s| s.class_id)
                .await?;
            for graph in &mut graphs {
                graph.class = graph.session.class_id.and_then(|id| classes.get(&id).cloned());
            }
        }

        if preloads.contains(&SessionPreload::Teacher) {
            let teachers = self
                .parents::<teacher::Entity>(&graphs, |s| s.teacher_id)
                .await?;
            for graph in &mut graphs {
                graph.teacher = graph
                    .session
                    .teacher_id
                    .and_then(|id| teachers.get(&id).cloned());
            }
        }

        if preloads.contains(&SessionPreload::Attendances) {
            let ids: Vec<i64> = graphs.iter().map(|g| g.session.id).collect();
            let rows = self
                .gateway
                .find_children::<attendance::Entity>(attendance::Column::SessionId, &ids)
                .await?;
            let mut grouped = group_by_parent(rows, |a| a.session_id);
            for graph in &mut graphs {
                graph.attendances = Some(grouped.remove(&graph.session.id).unwrap_or_default());
            }
        }

        Ok(graphs)
    }

    async fn parents<E>(
        &self,
        graphs: &[SessionGraph],
        fk: impl Fn(&attendance_session::Model) -> Option<i64>,
    ) -> Result<HashMap<i64, E::Model>, DbErr>
    where
        E: SoftDeletable,
        E::Model: Sync + Send + 'static,
    {
        let ids = distinct_ids(graphs.iter().map(|g| fk(&g.session)));
        self.gateway.find_by_ids::<E>(&ids).await
    }
}
