use db::Gateway;
use services::{
    attendance::AttendanceService,
    attendance_session::AttendanceSessionService,
    class::ClassService,
    event::{DbEventService, EventService},
    student::StudentService,
    teacher::TeacherService,
};
use std::sync::Arc;

/// Shared handler state: the gateway plus one service per entity.
///
/// Built once at startup; axum clones it per request, and every clone shares
/// the same connection pool.
#[derive(Clone)]
pub struct AppState {
    gateway: Gateway,
    events: Arc<dyn EventService>,
    sessions: AttendanceSessionService,
    attendances: AttendanceService,
    classes: ClassService,
    teachers: TeacherService,
    students: StudentService,
}

impl AppState {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            events: Arc::new(DbEventService::new(gateway.clone())),
            sessions: AttendanceSessionService::new(gateway.clone()),
            attendances: AttendanceService::new(gateway.clone()),
            classes: ClassService::new(gateway.clone()),
            teachers: TeacherService::new(gateway.clone()),
            students: StudentService::new(gateway.clone()),
            gateway,
        }
    }

    /// Replaces the event service, e.g. with a test double.
    pub fn with_event_service(mut self, events: Arc<dyn EventService>) -> Self {
        self.events = events;
        self
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn events(&self) -> &dyn EventService {
        self.events.as_ref()
    }

    pub fn sessions(&self) -> &AttendanceSessionService {
        &self.sessions
    }

    pub fn attendances(&self) -> &AttendanceService {
        &self.attendances
    }

    pub fn classes(&self) -> &ClassService {
        &self.classes
    }

    pub fn teachers(&self) -> &TeacherService {
        &self.teachers
    }

    pub fn students(&self) -> &StudentService {
        &self.students
    }
}
