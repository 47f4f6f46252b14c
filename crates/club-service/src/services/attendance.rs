//! Attendance service
//!
//! Builds the admin attendance sheet and records per-meeting statuses.

use club_core::entities::AttendanceRecord;
use club_core::rules::AttendanceMatrix;
use club_core::value_objects::AttendanceStatus;
use club_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    AttendanceCell, AttendanceColumn, AttendanceMatrixResponse, AttendanceResponse,
    AttendanceRow, SetAttendanceRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active members x meetings held up to today, every cell filled
    #[instrument(skip(self))]
    pub async fn matrix(&self) -> ServiceResult<AttendanceMatrixResponse> {
        let (members, meetings) = tokio::try_join!(
            self.ctx.member_repo().list_active(),
            self.ctx.meeting_repo().list_until(self.ctx.today()),
        )?;

        let meeting_ids: Vec<i64> = meetings.iter().map(|m| m.id).collect();
        let records = if meeting_ids.is_empty() {
            Vec::new()
        } else {
            self.ctx
                .attendance_repo()
                .list_for_meetings(&meeting_ids)
                .await?
        };

        let matrix = AttendanceMatrix::build(
            members.iter().map(|m| m.id),
            meeting_ids.iter().copied(),
            records,
        );

        let rows = members
            .into_iter()
            .map(|member| AttendanceRow {
                attended_count: matrix.attended_count(member.id),
                cells: matrix
                    .row(member.id)
                    .into_iter()
                    .map(|(meeting_id, status)| AttendanceCell {
                        meeting_id,
                        status,
                        label: status.label(),
                    })
                    .collect(),
                member_id: member.id,
                nickname: member.nickname,
            })
            .collect();

        let columns = meetings
            .into_iter()
            .map(|m| AttendanceColumn {
                meeting_id: m.id,
                date: m.date,
                time: m.time,
                place: m.place,
            })
            .collect();

        Ok(AttendanceMatrixResponse {
            meetings: columns,
            members: rows,
        })
    }

    /// Set one member's status at one meeting
    ///
    /// Marking a member as attended also moves their last participation
    /// date forward to the meeting date.
    #[instrument(skip(self, request), fields(member_id = request.member_id, meeting_id = request.meeting_id))]
    pub async fn set_status(&self, request: SetAttendanceRequest) -> ServiceResult<AttendanceResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let status: AttendanceStatus = request.status.parse()?;

        let meeting = self
            .ctx
            .meeting_repo()
            .find_by_id(request.meeting_id)
            .await?
            .ok_or(DomainError::MeetingIdNotFound(request.meeting_id))?;
        self.ctx
            .member_repo()
            .find_by_id(request.member_id)
            .await?
            .ok_or(DomainError::MemberNotFound(request.member_id))?;

        let record = AttendanceRecord::new(request.member_id, request.meeting_id, status);
        self.ctx.attendance_repo().upsert(&record).await?;

        if status == AttendanceStatus::Attended {
            self.ctx
                .member_repo()
                .record_participation(request.member_id, meeting.date)
                .await?;
        }

        info!(status = %status, "Attendance set");

        Ok(record.into())
    }
}
