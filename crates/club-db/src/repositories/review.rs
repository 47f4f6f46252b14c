//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{NewReview, Review, ReviewUpdate};
use club_core::traits::{RepoResult, ReviewRepository};

use crate::models::ReviewModel;

use super::error::{map_db_error, review_not_found};

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new PgReviewRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title, content, games, nickname, created_at
            FROM reviews
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Review::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Review>> {
        let rows = sqlx::query_as::<_, ReviewModel>(
            r"
            SELECT id, title, content, games, nickname, created_at
            FROM reviews
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    #[instrument(skip(self, review, password_hash))]
    async fn create(&self, review: &NewReview, password_hash: &str) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            INSERT INTO reviews (title, content, games, nickname, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, content, games, nickname, created_at
            ",
        )
        .bind(&review.title)
        .bind(&review.content)
        .bind(Json(&review.games))
        .bind(&review.nickname)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Review::from(model))
    }

    #[instrument(skip(self, update))]
    async fn update(&self, id: i64, update: &ReviewUpdate) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(
            r"
            UPDATE reviews
            SET title = $2, content = $3, games = $4
            WHERE id = $1
            RETURNING id, title, content, games, nickname, created_at
            ",
        )
        .bind(id)
        .bind(&update.title)
        .bind(&update.content)
        .bind(Json(&update.games))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Review::from).ok_or_else(|| review_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM reviews WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(review_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM reviews WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
