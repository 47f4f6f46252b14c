//! Notice handlers

use axum::{extract::State, Json};
use club_service::dto::{CreateNoticeRequest, NoticeResponse};
use club_service::NoticeService;

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// GET /notices
pub async fn list_notices(State(state): State<AppState>) -> ApiResult<Json<Vec<NoticeResponse>>> {
    let response = NoticeService::new(state.service_context()).list().await?;
    Ok(Json(response))
}

/// Latest notice, `null` when there is none
///
/// GET /notices/latest
pub async fn get_latest_notice(
    State(state): State<AppState>,
) -> ApiResult<Json<Option<NoticeResponse>>> {
    let response = NoticeService::new(state.service_context()).latest().await?;
    Ok(Json(response))
}

/// POST /admin/notices
pub async fn create_notice(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<CreateNoticeRequest>,
) -> ApiResult<Created<Json<NoticeResponse>>> {
    let response = NoticeService::new(state.service_context()).create(request).await?;
    Ok(Created(Json(response)))
}
