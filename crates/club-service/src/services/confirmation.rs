//! Confirmation service
//!
//! Admin board that turns reservation groups into confirmed meetings.
//! Confirming snapshots the participant names; unconfirming deletes the
//! meeting and leaves reservations alone.

use club_core::rules::{build_board, is_confirmable, resolve_place, snapshot_meeting};
use club_core::value_objects::MeetingKey;
use club_core::DomainError;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{BoardEntryResponse, ConfirmMeetingRequest, MeetingResponse, StagePlaceRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Confirmation service
pub struct ConfirmationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConfirmationService<'a> {
    /// Create a new ConfirmationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reservation groups dated after today with their confirmation state
    #[instrument(skip(self))]
    pub async fn board(&self) -> ServiceResult<Vec<BoardEntryResponse>> {
        let today = self.ctx.today();
        let (reservations, meetings) = tokio::try_join!(
            self.ctx.reservation_repo().list_from(today),
            self.ctx.meeting_repo().list_all(),
        )?;

        let staged = self.ctx.staged_places();
        let pruned = staged.prune_through(today);
        if pruned > 0 {
            debug!(pruned, "Dropped staged places for past keys");
        }
        let board = build_board(
            reservations,
            &meetings,
            today,
            self.ctx.default_venue(),
            |key| staged.get(key),
        );

        Ok(board.into_iter().map(Into::into).collect())
    }

    /// Remember an unsaved place edit for a key dated after today
    #[instrument(skip(self, request), fields(date = %request.date, time = %request.time))]
    pub fn stage_place(&self, request: StagePlaceRequest) -> ServiceResult<()> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let key = MeetingKey::new(request.date, request.time);
        if !is_confirmable(key.date, self.ctx.today()) {
            return Err(DomainError::NotConfirmable(key).into());
        }
        self.ctx.staged_places().stage(key, &request.place);
        Ok(())
    }

    /// Confirm a key, creating its meeting
    ///
    /// Confirming an already confirmed key returns the existing meeting
    /// unchanged.
    #[instrument(skip(self, request), fields(date = %request.date, time = %request.time))]
    pub async fn confirm(&self, request: ConfirmMeetingRequest) -> ServiceResult<MeetingResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let key = request.key();
        if !is_confirmable(key.date, self.ctx.today()) {
            return Err(DomainError::NotConfirmable(key).into());
        }

        if let Some(existing) = self.ctx.meeting_repo().find_by_key(&key).await? {
            self.ctx.staged_places().clear(&key);
            return Ok(existing.into());
        }

        let reservations: Vec<_> = self
            .ctx
            .reservation_repo()
            .list_from(key.date)
            .await?
            .into_iter()
            .filter(|r| r.matches(&key))
            .collect();
        if reservations.is_empty() {
            return Err(DomainError::NoReservationsForSlot(key).into());
        }

        let staged = self.ctx.staged_places().get(&key);
        let place = resolve_place(
            request.place.as_deref(),
            staged.as_deref(),
            self.ctx.default_venue(),
        );
        let new_meeting = snapshot_meeting(&key, place, &reservations);

        let meeting = match self.ctx.meeting_repo().create(&new_meeting).await {
            Ok(meeting) => meeting,
            Err(DomainError::MeetingAlreadyConfirmed(_)) => {
                warn!(key = %key, "Meeting confirmed concurrently, returning existing");
                self.ctx
                    .meeting_repo()
                    .find_by_key(&key)
                    .await?
                    .ok_or_else(|| DomainError::MeetingNotFound(key.clone()))?
            }
            Err(e) => return Err(e.into()),
        };

        self.ctx.staged_places().clear(&key);

        info!(
            meeting_id = meeting.id,
            participants = meeting.participant_count(),
            place = %meeting.place,
            "Meeting confirmed"
        );

        Ok(meeting.into())
    }

    /// Delete the meeting at a key; its reservations stay
    #[instrument(skip(self))]
    pub async fn unconfirm(&self, key: MeetingKey) -> ServiceResult<()> {
        self.ctx.meeting_repo().delete_by_key(&key).await?;
        info!(key = %key, "Meeting unconfirmed");
        Ok(())
    }
}
