//! Attendance handlers (admin)

use axum::{extract::State, Json};
use club_service::dto::{AttendanceMatrixResponse, AttendanceResponse, SetAttendanceRequest};
use club_service::AttendanceService;

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Attendance sheet
///
/// GET /admin/attendance
pub async fn get_matrix(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<AttendanceMatrixResponse>> {
    let response = AttendanceService::new(state.service_context()).matrix().await?;
    Ok(Json(response))
}

/// Set one cell
///
/// PUT /admin/attendance
pub async fn set_attendance(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<SetAttendanceRequest>,
) -> ApiResult<Json<AttendanceResponse>> {
    let response = AttendanceService::new(state.service_context())
        .set_status(request)
        .await?;
    Ok(Json(response))
}
