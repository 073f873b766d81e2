use serde::Deserialize;
use services::attendance::CreateAttendance;
use validator::Validate;

/// Body for `POST /attendances`. Every field is required and strings must be
/// non-empty. The check-in time is never read from the client.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct AttendanceRequest {
    #[validate(required(message = "session_id is required"))]
    pub session_id: Option<i64>,

    #[validate(
        required(message = "student_name is required"),
        length(min = 1, message = "student_name is required")
    )]
    pub student_name: Option<String>,

    #[validate(
        required(message = "email is required"),
        length(min = 1, message = "email is required")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "phone is required"),
        length(min = 1, message = "phone is required")
    )]
    pub phone: Option<String>,

    #[validate(
        required(message = "work_unit is required"),
        length(min = 1, message = "work_unit is required")
    )]
    pub work_unit: Option<String>,

    #[validate(
        required(message = "work_unit_address is required"),
        length(min = 1, message = "work_unit_address is required")
    )]
    pub work_unit_address: Option<String>,
}

impl AttendanceRequest {
    /// Converts a request that already passed `validate()`.
    pub fn into_params(self) -> CreateAttendance {
        CreateAttendance {
            session_id: self.session_id.unwrap_or_default(),
            student_name: self.student_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            work_unit: self.work_unit.unwrap_or_default(),
            work_unit_address: self.work_unit_address.unwrap_or_default(),
        }
    }
}
