//! Confirmation board handlers (admin)

use axum::{extract::State, Json};
use club_service::dto::{
    BoardEntryResponse, ConfirmMeetingRequest, MeetingKeyQuery, MeetingResponse,
    StagePlaceRequest,
};
use club_service::ConfirmationService;

use crate::extractors::{AdminSession, ApiQuery, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Reservation groups awaiting or holding confirmation
///
/// GET /admin/confirmations
pub async fn get_board(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<Vec<BoardEntryResponse>>> {
    let response = ConfirmationService::new(state.service_context()).board().await?;
    Ok(Json(response))
}

/// Stage a place for a key without confirming it
///
/// PUT /admin/confirmations/place
pub async fn stage_place(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<StagePlaceRequest>,
) -> ApiResult<NoContent> {
    ConfirmationService::new(state.service_context()).stage_place(request)?;
    Ok(NoContent)
}

/// Confirm a key as a meeting
///
/// POST /admin/confirmations
pub async fn confirm_meeting(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<ConfirmMeetingRequest>,
) -> ApiResult<Created<Json<MeetingResponse>>> {
    let response = ConfirmationService::new(state.service_context())
        .confirm(request)
        .await?;
    Ok(Created(Json(response)))
}

/// Undo a confirmation
///
/// DELETE /admin/confirmations?date=&time=
pub async fn unconfirm_meeting(
    State(state): State<AppState>,
    _admin: AdminSession,
    ApiQuery(query): ApiQuery<MeetingKeyQuery>,
) -> ApiResult<NoContent> {
    ConfirmationService::new(state.service_context())
        .unconfirm(query.into())
        .await?;
    Ok(NoContent)
}
