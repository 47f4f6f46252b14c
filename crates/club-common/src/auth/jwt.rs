//! JWT utilities for admin sessions
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Every token carries the id of the server-side session it belongs to.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Session the token was issued for
    pub sid: String,
}

impl Claims {
    /// Get the admin ID
    ///
    /// # Errors
    /// Returns an error if the subject is not a number
    pub fn admin_id(&self) -> Result<i64, AppError> {
        self.sub.parse::<i64>().map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// Bearer token handed out on sign-in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    session_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and session lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, session_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            session_expiry,
        }
    }

    #[must_use]
    pub fn session_expiry(&self) -> i64 {
        self.session_expiry
    }

    /// Issue a token for an admin session
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, admin_id: i64, session_id: &str) -> Result<SessionToken, AppError> {
        let now = Utc::now();
        let exp = (now + Duration::seconds(self.session_expiry)).timestamp();

        let claims = Claims {
            sub: admin_id.to_string(),
            iat: now.timestamp(),
            exp,
            sid: session_id.to_string(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(SessionToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.session_expiry,
            expires_at: exp,
        })
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("session_expiry", &self.session_expiry)
            .finish_non_exhaustive()
    }
}
