use crate::service::{AppError, ApplyPatch, ToActiveModel};
use chrono::{DateTime, Utc};
use db::{
    Gateway,
    models::attendance_session::{ActiveModel, Entity},
    preload::{SessionGraph, SessionPreload},
    repositories::{
        AttendanceSessionRepository, ClassRepository, EventRepository, TeacherRepository,
    },
};
use sea_orm::{ActiveValue, IntoActiveModel, NotSet, Set};
use serde::Deserialize;
use tracing::{info, warn};

pub use db::models::attendance_session::Model as AttendanceSession;

/// Relations attached to every session read.
const SESSION_READ_PRELOADS: [SessionPreload; 3] = [
    SessionPreload::Class,
    SessionPreload::Teacher,
    SessionPreload::Attendances,
];

/// A teacher reference as clients send it: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TeacherRef {
    Id(i64),
    Text(String),
}

impl TeacherRef {
    /// The id as an unsigned 32-bit value, widened. Blank, signed, padded and
    /// out-of-range input yield `None`.
    pub fn id(&self) -> Option<i64> {
        match self {
            TeacherRef::Id(id) => u32::try_from(*id).ok().map(i64::from),
            TeacherRef::Text(raw) => raw.parse::<u32>().ok().map(i64::from),
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, TeacherRef::Text(raw) if raw.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAttendanceSession {
    pub event_id: Option<i64>,
    pub class_id: Option<i64>,
    pub teacher_id: Option<TeacherRef>,
    /// RFC 3339 timestamp; blank is treated as absent.
    pub session_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAttendanceSession {
    pub event_id: Option<i64>,
    pub class_id: Option<i64>,
    pub teacher_id: Option<TeacherRef>,
    pub session_date: Option<String>,
}

/// Parses an RFC 3339 timestamp. `Ok(None)` for absent or blank input.
pub fn parse_session_date(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|d| Some(d.with_timezone(&Utc)))
            .map_err(|_| {
                AppError::Validation(
                    "Invalid session date format: use RFC3339 (2006-01-02T15:04:05Z07:00)".into(),
                )
            }),
    }
}

impl CreateAttendanceSession {
    /// Teacher id to store. An unparsable value is dropped rather than rejected.
    fn resolved_teacher_id(&self) -> Option<i64> {
        let teacher = self.teacher_id.as_ref()?;
        let id = teacher.id();
        if id.is_none() && !teacher.is_blank() {
            warn!(
                teacher_id = ?teacher,
                "Unparsable teacher_id on session create, storing session without a teacher"
            );
        }
        id
    }
}

impl ToActiveModel<Entity> for CreateAttendanceSession {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let session_date = parse_session_date(self.session_date.as_deref())?;
        let teacher_id = self.resolved_teacher_id();
        let now = Utc::now();

        Ok(ActiveModel {
            id: NotSet,
            event_id: Set(self.event_id),
            class_id: Set(self.class_id),
            teacher_id: Set(teacher_id),
            session_date: Set(session_date),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
    }
}

impl ApplyPatch<Entity> for UpdateAttendanceSession {
    fn apply_to(self, active: &mut ActiveModel) -> Result<(), AppError> {
        let session_date = parse_session_date(self.session_date.as_deref())?;

        if let Some(event_id) = self.event_id {
            active.event_id = Set(Some(event_id));
        }
        if let Some(class_id) = self.class_id {
            active.class_id = Set(Some(class_id));
        }
        if let Some(teacher) = self.teacher_id {
            let id = teacher
                .id()
                .ok_or_else(|| AppError::Validation("Teacher ID must be a number".into()))?;
            active.teacher_id = Set(Some(id));
        }
        if let Some(date) = session_date {
            active.session_date = Set(Some(date));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct AttendanceSessionService {
    sessions: AttendanceSessionRepository,
    events: EventRepository,
    classes: ClassRepository,
    teachers: TeacherRepository,
}

impl AttendanceSessionService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            sessions: AttendanceSessionRepository::new(gateway.clone()),
            events: EventRepository::new(gateway.clone()),
            classes: ClassRepository::new(gateway.clone()),
            teachers: TeacherRepository::new(gateway),
        }
    }

    /// All live sessions, optionally only those under `event_id`.
    pub async fn get_all(&self, event_id: Option<i64>) -> Result<Vec<SessionGraph>, AppError> {
        let sessions = match event_id {
            Some(event_id) => {
                self.sessions
                    .get_by_event_id(event_id, &SESSION_READ_PRELOADS)
                    .await?
            }
            None => self.sessions.get_all(&SESSION_READ_PRELOADS).await?,
        };
        Ok(sessions)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<SessionGraph, AppError> {
        Ok(self.sessions.get_by_id(id, &SESSION_READ_PRELOADS).await?)
    }

    pub async fn create(
        &self,
        params: CreateAttendanceSession,
    ) -> Result<AttendanceSession, AppError> {
        let active = params.into_active_model()?;
        self.check_references(&active).await?;

        let session = self.sessions.create(active).await?;
        info!(
            session_id = session.id,
            event_id = ?session.event_id,
            class_id = ?session.class_id,
            teacher_id = ?session.teacher_id,
            "Attendance session created"
        );
        Ok(session)
    }

    pub async fn update(
        &self,
        id: i64,
        params: UpdateAttendanceSession,
    ) -> Result<AttendanceSession, AppError> {
        let mut active = self.sessions.find_by_id(id).await?.into_active_model();
        params.apply_to(&mut active)?;
        self.check_references(&active).await?;

        let session = self.sessions.update(active).await?;
        info!(session_id = session.id, "Attendance session updated");
        Ok(session)
    }

    /// Every parent reference being written must point at a live row.
    async fn check_references(&self, active: &ActiveModel) -> Result<(), AppError> {
        if let Some(event_id) = written_id(&active.event_id) {
            self.events.get_by_id(event_id).await?;
        }
        if let Some(class_id) = written_id(&active.class_id) {
            self.classes.find_by_id(class_id).await?;
        }
        if let Some(teacher_id) = written_id(&active.teacher_id) {
            self.teachers.find_by_id(teacher_id).await?;
        }
        Ok(())
    }
}

fn written_id(value: &ActiveValue<Option<i64>>) -> Option<i64> {
    match value {
        ActiveValue::Set(Some(id)) => Some(*id),
        _ => None,
    }
}
