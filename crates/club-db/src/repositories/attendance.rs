//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::AttendanceRecord;
use club_core::error::DomainError;
use club_core::traits::{AttendanceRepository, RepoResult};

use crate::models::AttendanceModel;

use super::error::{map_db_error, map_foreign_key_violation};

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self, meeting_ids), fields(meetings = meeting_ids.len()))]
    async fn list_for_meetings(&self, meeting_ids: &[i64]) -> RepoResult<Vec<AttendanceRecord>> {
        if meeting_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT user_id, meeting_id, status
            FROM attendance
            WHERE meeting_id = ANY($1)
            ",
        )
        .bind(meeting_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(AttendanceRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn upsert(&self, record: &AttendanceRecord) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO attendance (user_id, meeting_id, status, updated_at)
            VALUES ($1, $2, $3, NOW())
            ON CONFLICT (user_id, meeting_id)
            DO UPDATE SET status = EXCLUDED.status, updated_at = NOW()
            ",
        )
        .bind(record.member_id)
        .bind(record.meeting_id)
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_foreign_key_violation(e, || {
                DomainError::ValidationError(format!(
                    "Unknown member {} or meeting {}",
                    record.member_id, record.meeting_id
                ))
            })
        })?;

        Ok(())
    }
}
