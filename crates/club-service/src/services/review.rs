//! Review service
//!
//! Visitors post play reports protected by a four-digit PIN. The PIN is
//! stored as an Argon2 hash and must be presented to edit or delete.

use club_common::auth::{hash_password, validate_pin, verify_password};
use club_core::entities::{NewReview, PlayedGame, ReviewUpdate};
use club_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All reviews, newest first
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<ReviewResponse>> {
        let reviews = self.ctx.review_repo().list().await?;
        Ok(reviews.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateReviewRequest) -> ServiceResult<ReviewResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        validate_pin(&request.password)?;

        let password_hash = hash_password(&request.password)?;

        let review = self
            .ctx
            .review_repo()
            .create(
                &NewReview {
                    title: request.title.trim().to_string(),
                    content: request.content,
                    games: clean_games(request.games),
                    nickname: request.nickname.trim().to_string(),
                },
                &password_hash,
            )
            .await?;

        info!(review_id = review.id, "Review created");

        Ok(review.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        review_id: i64,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        self.check_password(review_id, &request.password).await?;

        let review = self
            .ctx
            .review_repo()
            .update(
                review_id,
                &ReviewUpdate {
                    title: request.title.trim().to_string(),
                    content: request.content,
                    games: clean_games(request.games),
                },
            )
            .await?;

        info!(review_id, "Review updated");

        Ok(review.into())
    }

    #[instrument(skip(self, password))]
    pub async fn delete(&self, review_id: i64, password: &str) -> ServiceResult<()> {
        self.check_password(review_id, password).await?;
        self.ctx.review_repo().delete(review_id).await?;
        info!(review_id, "Review deleted");
        Ok(())
    }

    async fn check_password(&self, review_id: i64, password: &str) -> ServiceResult<()> {
        let hash = self
            .ctx
            .review_repo()
            .get_password_hash(review_id)
            .await?
            .ok_or(DomainError::ReviewNotFound(review_id))?;

        if !verify_password(password, &hash)? {
            warn!(review_id, "Wrong review password");
            return Err(DomainError::WrongReviewPassword.into());
        }
        Ok(())
    }
}

/// Drop games without a name
fn clean_games(games: Vec<PlayedGame>) -> Vec<PlayedGame> {
    games
        .into_iter()
        .filter_map(|g| {
            let name = g.name.trim();
            (!name.is_empty()).then(|| PlayedGame {
                name: name.to_string(),
                memo: g.memo.trim().to_string(),
            })
        })
        .collect()
}
