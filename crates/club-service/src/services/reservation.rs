//! Reservation service
//!
//! Public booking flow: book a slot, see who booked what, look up and
//! cancel one's own reservations.

use club_core::entities::NewReservation;
use club_core::rules::{group_by_date, is_date_bookable, slots_for_date};
use club_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{
    ContactRequest, CreateReservationRequest, DateReservationsResponse, ReservationResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::schedule::ScheduleService;

/// Reservation service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Book a slot on a bookable date
    #[instrument(skip(self, request), fields(date = %request.date, time = %request.time))]
    pub async fn book(&self, request: CreateReservationRequest) -> ServiceResult<ReservationResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let name = request.name.trim();
        let phone_number = request.phone_number.trim();
        if name.is_empty() || phone_number.is_empty() {
            return Err(ServiceError::validation("Name and phone number are required"));
        }

        let config = ScheduleService::new(self.ctx).current().await;
        if !is_date_bookable(request.date, config.as_ref(), self.ctx.today()) {
            return Err(DomainError::DateNotBookable(request.date).into());
        }
        if !slots_for_date(request.date, config.as_ref()).contains(&request.time) {
            return Err(DomainError::SlotNotOffered {
                date: request.date,
                time: request.time,
            }
            .into());
        }

        let reservation = self
            .ctx
            .reservation_repo()
            .create(&NewReservation {
                date: request.date,
                time: request.time,
                name: name.to_string(),
                phone_number: phone_number.to_string(),
            })
            .await?;

        info!(reservation_id = reservation.id, "Reservation created");

        Ok(reservation.into())
    }

    /// Upcoming reservations grouped by date, without contact details
    #[instrument(skip(self))]
    pub async fn status(&self) -> ServiceResult<Vec<DateReservationsResponse>> {
        let reservations = self
            .ctx
            .reservation_repo()
            .list_from(self.ctx.today())
            .await?;

        Ok(group_by_date(reservations).into_iter().map(Into::into).collect())
    }

    /// Upcoming reservations for a name and phone number
    ///
    /// The master key in place of a phone number resolves to the phone of
    /// the first reservation under that name.
    #[instrument(skip(self, request))]
    pub async fn lookup(&self, request: ContactRequest) -> ServiceResult<Vec<ReservationResponse>> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let name = request.name.trim();
        let Some(phone_number) = self.resolve_phone(name, request.phone_number.trim()).await? else {
            return Ok(Vec::new());
        };

        let reservations = self
            .ctx
            .reservation_repo()
            .find_by_contact(name, &phone_number, self.ctx.today())
            .await?;

        Ok(reservations.into_iter().map(Into::into).collect())
    }

    /// Cancel one's own reservation
    ///
    /// Same-day and past reservations are rejected before anything is
    /// deleted.
    #[instrument(skip(self, contact))]
    pub async fn cancel(&self, reservation_id: i64, contact: ContactRequest) -> ServiceResult<()> {
        contact
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let reservation = self
            .ctx
            .reservation_repo()
            .find_by_id(reservation_id)
            .await?
            .ok_or(DomainError::ReservationNotFound(reservation_id))?;

        let name = contact.name.trim();
        let phone_number = self.resolve_phone(name, contact.phone_number.trim()).await?;
        let owns = reservation.name == name
            && phone_number.as_deref() == Some(reservation.phone_number.as_str());
        if !owns {
            return Err(DomainError::NotReservationOwner.into());
        }

        let today = self.ctx.today();
        if reservation.date == today {
            return Err(DomainError::SameDayCancellation.into());
        }
        if reservation.date < today {
            return Err(DomainError::PastReservation(reservation.date).into());
        }

        self.ctx.reservation_repo().delete(reservation_id).await?;

        info!(reservation_id, date = %reservation.date, "Reservation cancelled");

        Ok(())
    }

    async fn resolve_phone(&self, name: &str, phone_number: &str) -> ServiceResult<Option<String>> {
        match self.ctx.master_key() {
            Some(key) if key == phone_number => {
                Ok(self.ctx.reservation_repo().first_phone_for_name(name).await?)
            }
            _ => Ok(Some(phone_number.to_string())),
        }
    }
}
