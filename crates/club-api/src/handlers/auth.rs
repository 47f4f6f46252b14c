//! Authentication handlers
//!
//! Admin sign-in, sign-out, and session lookup.

use axum::{extract::State, Json};
use club_service::dto::{CurrentSessionResponse, SessionResponse, SignInRequest};
use club_service::AuthService;

use crate::extractors::{AdminSession, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Sign in with email and password
///
/// POST /auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignInRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.sign_in(request).await?;
    Ok(Json(response))
}

/// End the current session
///
/// POST /auth/sign-out
pub async fn sign_out(
    State(state): State<AppState>,
    admin: AdminSession,
) -> ApiResult<NoContent> {
    AuthService::new(state.service_context()).sign_out(admin.session_id())?;
    Ok(NoContent)
}

/// Describe the current session
///
/// GET /auth/session
pub async fn current_session(admin: AdminSession) -> Json<CurrentSessionResponse> {
    Json(admin.0.into())
}
