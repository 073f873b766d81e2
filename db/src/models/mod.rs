pub mod attendance;
pub mod attendance_session;
pub mod class;
pub mod event;
pub mod student;
pub mod teacher;
