//! Meeting service
//!
//! Public views of confirmed meetings.

use club_core::value_objects::{korean_date_label, korean_time_label};
use tracing::instrument;

use crate::dto::{MeetingResponse, NextMeetingResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Meeting service
pub struct MeetingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MeetingService<'a> {
    /// Create a new MeetingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The first meeting dated today or later, for the home page banner
    #[instrument(skip(self))]
    pub async fn next(&self) -> ServiceResult<Option<NextMeetingResponse>> {
        let Some(mut meeting) = self.ctx.meeting_repo().next_from(self.ctx.today()).await? else {
            return Ok(None);
        };

        if meeting.place.trim().is_empty() {
            meeting.place = self.ctx.default_venue().to_string();
        }

        let display_date = korean_date_label(meeting.date);
        let display_time = korean_time_label(&meeting.time).unwrap_or_else(|| meeting.time.clone());

        Ok(Some(NextMeetingResponse {
            meeting: meeting.into(),
            display_date,
            display_time,
        }))
    }

    /// Every confirmed meeting, newest date first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MeetingResponse>> {
        let meetings = self.ctx.meeting_repo().list_all().await?;
        Ok(meetings.into_iter().map(Into::into).collect())
    }
}
