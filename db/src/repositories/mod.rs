pub mod attendance_repository;
pub mod attendance_session_repository;
pub mod class_repository;
pub mod event_repository;
pub mod student_repository;
pub mod teacher_repository;

pub use attendance_repository::AttendanceRepository;
pub use attendance_session_repository::AttendanceSessionRepository;
pub use class_repository::ClassRepository;
pub use event_repository::EventRepository;
pub use student_repository::StudentRepository;
pub use teacher_repository::TeacherRepository;
