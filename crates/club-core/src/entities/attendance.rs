//! Attendance record - one member's status at one meeting

use crate::value_objects::AttendanceStatus;

/// Stored attendance cell, keyed by `(member_id, meeting_id)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub member_id: i64,
    pub meeting_id: i64,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(member_id: i64, meeting_id: i64, status: AttendanceStatus) -> Self {
        Self {
            member_id,
            meeting_id,
            status,
        }
    }

    /// Composite key of the record
    #[inline]
    pub fn key(&self) -> (i64, i64) {
        (self.member_id, self.meeting_id)
    }
}
