//! Admin session extractor
//!
//! Resolves the bearer token in the Authorization header to a live admin
//! session. Handlers that take an [`AdminSession`] are admin-only.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use club_service::{AuthService, Session};

use crate::response::ApiError;
use crate::state::AppState;

/// Signed-in admin
#[derive(Debug, Clone)]
pub struct AdminSession(pub Session);

impl AdminSession {
    pub fn admin_id(&self) -> i64 {
        self.0.admin_id
    }

    pub fn session_id(&self) -> &str {
        &self.0.session_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);

        // Token must decode and its session must still be registered
        let session = AuthService::new(app_state.service_context())
            .current_session(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Rejected admin token");
                ApiError::from(e)
            })?;

        Ok(AdminSession(session))
    }
}
