use crate::service::{AppError, ToActiveModel};
use chrono::Utc;
use db::{
    Gateway,
    models::attendance::{ActiveModel, Entity},
    preload::{AttendanceGraph, AttendancePreload, SessionPreload},
    repositories::{AttendanceRepository, AttendanceSessionRepository},
};
use sea_orm::{NotSet, Set};
use tracing::info;

pub use db::models::attendance::Model as Attendance;

const ATTENDANCE_READ_PRELOADS: [AttendancePreload; 2] = [
    AttendancePreload::SessionWith(SessionPreload::Class),
    AttendancePreload::SessionWith(SessionPreload::Teacher),
];

const ATTENDANCE_BY_EVENT_PRELOADS: [AttendancePreload; 3] = [
    AttendancePreload::SessionWith(SessionPreload::Class),
    AttendancePreload::SessionWith(SessionPreload::Teacher),
    AttendancePreload::SessionWith(SessionPreload::Event),
];

/// A walk-in sign-in. The check-in time is always stamped by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAttendance {
    pub session_id: i64,
    pub student_name: String,
    pub email: String,
    pub phone: String,
    pub work_unit: String,
    pub work_unit_address: String,
}

impl ToActiveModel<Entity> for CreateAttendance {
    fn into_active_model(self) -> Result<ActiveModel, AppError> {
        let now = Utc::now();
        Ok(ActiveModel {
            id: NotSet,
            session_id: Set(Some(self.session_id)),
            checked_in_at: Set(Some(now)),
            student_name: Set(Some(self.student_name)),
            email: Set(Some(self.email)),
            phone: Set(Some(self.phone)),
            work_unit: Set(Some(self.work_unit)),
            work_unit_address: Set(Some(self.work_unit_address)),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        })
    }
}

#[derive(Clone, Debug)]
pub struct AttendanceService {
    attendances: AttendanceRepository,
    sessions: AttendanceSessionRepository,
}

impl AttendanceService {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            attendances: AttendanceRepository::new(gateway.clone()),
            sessions: AttendanceSessionRepository::new(gateway),
        }
    }

    pub async fn get_all(&self) -> Result<Vec<AttendanceGraph>, AppError> {
        Ok(self.attendances.get_all(&ATTENDANCE_READ_PRELOADS).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AttendanceGraph, AppError> {
        Ok(self
            .attendances
            .get_by_id(id, &ATTENDANCE_READ_PRELOADS)
            .await?)
    }

    pub async fn get_by_session_id(&self, session_id: i64) -> Result<Vec<Attendance>, AppError> {
        Ok(self.attendances.get_by_session_id(session_id).await?)
    }

    /// Every live attendance whose session belongs to `event_id`, across all its sessions.
    pub async fn get_by_event_id(&self, event_id: i64) -> Result<Vec<AttendanceGraph>, AppError> {
        Ok(self
            .attendances
            .get_by_event_id(event_id, &ATTENDANCE_BY_EVENT_PRELOADS)
            .await?)
    }

    pub async fn create(&self, params: CreateAttendance) -> Result<Attendance, AppError> {
        self.sessions.find_by_id(params.session_id).await?;

        let attendance = self
            .attendances
            .create(params.into_active_model()?)
            .await?;
        info!(
            attendance_id = attendance.id,
            session_id = ?attendance.session_id,
            "Attendance recorded"
        );
        Ok(attendance)
    }
}
