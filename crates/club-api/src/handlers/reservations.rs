//! Reservation handlers
//!
//! Public booking endpoints. Looking up and cancelling require the name and
//! phone number used when booking.

use axum::{extract::State, Json};
use club_service::dto::{
    ContactRequest, CreateReservationRequest, DateReservationsResponse, ReservationResponse,
};
use club_service::ReservationService;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Book a slot
///
/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let response = ReservationService::new(state.service_context())
        .book(request)
        .await?;
    Ok(Created(Json(response)))
}

/// Upcoming reservations grouped by date
///
/// GET /reservations/status
pub async fn get_status(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<DateReservationsResponse>>> {
    let response = ReservationService::new(state.service_context()).status().await?;
    Ok(Json(response))
}

/// Find one's own upcoming reservations
///
/// POST /reservations/lookup
pub async fn lookup_reservations(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let response = ReservationService::new(state.service_context())
        .lookup(request)
        .await?;
    Ok(Json(response))
}

/// Cancel one's own reservation
///
/// DELETE /reservations/:reservation_id
pub async fn cancel_reservation(
    State(state): State<AppState>,
    ApiPath(reservation_id): ApiPath<i64>,
    ValidatedJson(contact): ValidatedJson<ContactRequest>,
) -> ApiResult<NoContent> {
    ReservationService::new(state.service_context())
        .cancel(reservation_id, contact)
        .await?;
    Ok(NoContent)
}
