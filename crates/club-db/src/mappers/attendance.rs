//! Attendance record <-> model mapper

use club_core::entities::AttendanceRecord;
use club_core::value_objects::AttendanceStatus;
use tracing::warn;

use crate::models::AttendanceModel;

/// Unknown stored statuses read as absent
impl From<AttendanceModel> for AttendanceRecord {
    fn from(model: AttendanceModel) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            warn!(
                user_id = model.user_id,
                meeting_id = model.meeting_id,
                status = %model.status,
                "Unknown attendance status, reading as absent"
            );
            AttendanceStatus::Absent
        });
        AttendanceRecord::new(model.user_id, model.meeting_id, status)
    }
}
