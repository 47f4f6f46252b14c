//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{Member, NewMember};
use club_core::error::DomainError;
use club_core::traits::{MemberRepository, RepoResult};
use club_core::value_objects::MemberStatus;

use crate::models::MemberModel;

use super::error::{map_db_error, member_not_found};

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, nickname, joined_at, last_participation_date, warning, status, source,
                   created_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Member::from))
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, nickname, joined_at, last_participation_date, warning, status, source,
                   created_at
            FROM users
            WHERE status = $1
            ORDER BY id ASC
            ",
        )
        .bind(MemberStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Member>> {
        let rows = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, nickname, joined_at, last_participation_date, warning, status, source,
                   created_at
            FROM users
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    #[instrument(skip(self, member), fields(nickname = %member.nickname))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let model = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO users (nickname, joined_at, status, source)
            VALUES ($1, $2, $3, $4)
            RETURNING id, nickname, joined_at, last_participation_date, warning, status, source,
                      created_at
            ",
        )
        .bind(&member.nickname)
        .bind(member.joined_at)
        .bind(MemberStatus::Active.as_str())
        .bind(member.source.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Member::from(model))
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET status = $2
            WHERE id = $1 AND status = $3
            ",
        )
        .bind(id)
        .bind(MemberStatus::Deactivated.as_str())
        .bind(MemberStatus::Active.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Either missing or already deactivated
            return match self.find_by_id(id).await? {
                Some(_) => Err(DomainError::MemberAlreadyDeactivated(id)),
                None => Err(member_not_found(id)),
            };
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn record_participation(&self, id: i64, date: NaiveDate) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET last_participation_date = GREATEST(COALESCE(last_participation_date, $2), $2)
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }
}
