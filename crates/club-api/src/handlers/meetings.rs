//! Meeting handlers

use axum::{extract::State, Json};
use club_service::dto::{MeetingResponse, NextMeetingResponse};
use club_service::MeetingService;

use crate::response::ApiResult;
use crate::state::AppState;

/// Next upcoming meeting, `null` when none is confirmed
///
/// GET /meetings/next
pub async fn get_next_meeting(
    State(state): State<AppState>,
) -> ApiResult<Json<Option<NextMeetingResponse>>> {
    let response = MeetingService::new(state.service_context()).next().await?;
    Ok(Json(response))
}

/// Confirmed meetings
///
/// GET /meetings
pub async fn list_meetings(State(state): State<AppState>) -> ApiResult<Json<Vec<MeetingResponse>>> {
    let response = MeetingService::new(state.service_context()).list().await?;
    Ok(Json(response))
}
