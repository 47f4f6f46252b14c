//! Member roster handlers (admin)

use axum::{extract::State, Json};
use club_service::dto::{AddMemberRequest, MemberResponse};
use club_service::MemberService;

use crate::extractors::{AdminSession, ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Active members with expulsion standing
///
/// GET /admin/members
pub async fn list_active_members(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let response = MemberService::new(state.service_context()).list_active().await?;
    Ok(Json(response))
}

/// Every member
///
/// GET /admin/members/all
pub async fn list_all_members(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let response = MemberService::new(state.service_context()).list_all().await?;
    Ok(Json(response))
}

/// Add a member
///
/// POST /admin/members
pub async fn add_member(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<AddMemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let response = MemberService::new(state.service_context()).add(request).await?;
    Ok(Created(Json(response)))
}

/// Deactivate a member
///
/// DELETE /admin/members/:member_id
pub async fn deactivate_member(
    State(state): State<AppState>,
    _admin: AdminSession,
    ApiPath(member_id): ApiPath<i64>,
) -> ApiResult<NoContent> {
    MemberService::new(state.service_context())
        .deactivate(member_id)
        .await?;
    Ok(NoContent)
}
