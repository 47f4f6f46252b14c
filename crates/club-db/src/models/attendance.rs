//! Attendance database model

use sqlx::FromRow;

/// Database model for attendance table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceModel {
    pub user_id: i64,
    pub meeting_id: i64,
    pub status: String,
}
