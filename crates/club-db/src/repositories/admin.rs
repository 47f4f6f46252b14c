//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::Admin;
use club_core::traits::{AdminRepository, RepoResult};

use crate::models::AdminModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, created_at FROM admins WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, created_at FROM admins WHERE lower(email) = lower($1)
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM admins WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
