mod attendance_sessions_test;
mod attendances_test;
mod classes_test;
mod events_mock_test;
mod events_test;
mod health_test;
mod students_test;
mod teachers_test;
