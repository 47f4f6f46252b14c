//! Authentication service
//!
//! Admin sign-in, sign-out, and session lookup. A session is a signed token
//! plus an entry in the in-memory session registry; removing the entry
//! revokes the token even before it expires.

use chrono::Utc;
use club_common::auth::verify_password;
use club_common::AppError;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;

use crate::dto::{AdminResponse, SessionResponse, SignInRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::session::Session;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn sign_in(&self, request: SignInRequest) -> ServiceResult<SessionResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        // Find admin by email
        let admin = self
            .ctx
            .admin_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Sign-in failed: admin not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .admin_repo()
            .get_password_hash(admin.id)
            .await?
            .ok_or_else(|| {
                warn!(admin_id = admin.id, "Sign-in failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        if !verify_password(&request.password, &password_hash)? {
            warn!(admin_id = admin.id, "Sign-in failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let now = Utc::now();
        self.ctx.sessions().purge_expired(now);

        let session_id = Uuid::new_v4().to_string();
        let token = self.ctx.jwt_service().issue(admin.id, &session_id)?;

        self.ctx.sessions().insert(Session {
            session_id,
            admin_id: admin.id,
            email: admin.email.clone(),
            issued_at: now,
            expires_at: token.expires_at,
        });

        info!(admin_id = admin.id, "Admin signed in");

        Ok(SessionResponse {
            access_token: token.access_token,
            token_type: token.token_type,
            expires_in: token.expires_in,
            expires_at: token.expires_at,
            admin: AdminResponse::from(&admin),
        })
    }

    /// End a session
    #[instrument(skip(self))]
    pub fn sign_out(&self, session_id: &str) -> ServiceResult<()> {
        let session = self
            .ctx
            .sessions()
            .remove(session_id)
            .ok_or(ServiceError::App(AppError::SessionRevoked))?;

        info!(admin_id = session.admin_id, "Admin signed out");
        Ok(())
    }

    /// Resolve a bearer token to its live session
    ///
    /// # Errors
    /// `InvalidToken`/`TokenExpired` for a bad token, `SessionRevoked` when
    /// the session was signed out or belongs to another admin.
    pub fn current_session(&self, token: &str) -> ServiceResult<Session> {
        let claims = self.ctx.jwt_service().decode_token(token)?;
        let admin_id = claims.admin_id()?;

        self.ctx
            .sessions()
            .get(&claims.sid)
            .filter(|s| s.admin_id == admin_id && !s.is_expired(Utc::now()))
            .ok_or(ServiceError::App(AppError::SessionRevoked))
    }
}
