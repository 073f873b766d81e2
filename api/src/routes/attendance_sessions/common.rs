use serde::Deserialize;
use services::attendance_session::{
    CreateAttendanceSession, TeacherRef, UpdateAttendanceSession,
};

#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub event_id: Option<i64>,
}

/// Body for session create and update. `teacher_id` may be a number or a
/// numeric string; `session_date` is RFC 3339.
#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    pub event_id: Option<i64>,
    pub class_id: Option<i64>,
    pub teacher_id: Option<TeacherRef>,
    pub session_date: Option<String>,
}

impl From<SessionRequest> for CreateAttendanceSession {
    fn from(req: SessionRequest) -> Self {
        Self {
            event_id: req.event_id,
            class_id: req.class_id,
            teacher_id: req.teacher_id,
            session_date: req.session_date,
        }
    }
}

impl From<SessionRequest> for UpdateAttendanceSession {
    fn from(req: SessionRequest) -> Self {
        Self {
            event_id: req.event_id,
            class_id: req.class_id,
            teacher_id: req.teacher_id,
            session_date: req.session_date,
        }
    }
}
