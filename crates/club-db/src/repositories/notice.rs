//! PostgreSQL implementation of NoticeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{NewNotice, Notice};
use club_core::traits::{NoticeRepository, RepoResult};

use crate::models::NoticeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NoticeRepository
#[derive(Clone)]
pub struct PgNoticeRepository {
    pool: PgPool,
}

impl PgNoticeRepository {
    /// Create a new PgNoticeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoticeRepository for PgNoticeRepository {
    #[instrument(skip(self))]
    async fn latest(&self) -> RepoResult<Option<Notice>> {
        let result = sqlx::query_as::<_, NoticeModel>(
            r"
            SELECT id, title, content, date, created_at
            FROM notice
            ORDER BY date DESC, id DESC
            LIMIT 1
            ",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Notice::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Notice>> {
        let rows = sqlx::query_as::<_, NoticeModel>(
            r"
            SELECT id, title, content, date, created_at
            FROM notice
            ORDER BY date DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Notice::from).collect())
    }

    #[instrument(skip(self, notice))]
    async fn create(&self, notice: &NewNotice) -> RepoResult<Notice> {
        let model = sqlx::query_as::<_, NoticeModel>(
            r"
            INSERT INTO notice (title, content, date)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, date, created_at
            ",
        )
        .bind(&notice.title)
        .bind(&notice.content)
        .bind(notice.date)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Notice::from(model))
    }
}
