//! PostgreSQL implementation of MeetingRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{Meeting, NewMeeting};
use club_core::error::DomainError;
use club_core::traits::{MeetingRepository, RepoResult};
use club_core::value_objects::MeetingKey;

use crate::models::MeetingModel;

use super::error::{map_db_error, map_unique_violation, meeting_not_found};

/// PostgreSQL implementation of MeetingRepository
#[derive(Clone)]
pub struct PgMeetingRepository {
    pool: PgPool,
}

impl PgMeetingRepository {
    /// Create a new PgMeetingRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeetingRepository for PgMeetingRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, date, time, place, participants, created_at
            FROM meetings
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Meeting::from))
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn find_by_key(&self, key: &MeetingKey) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, date, time, place, participants, created_at
            FROM meetings
            WHERE date = $1 AND time = $2
            ",
        )
        .bind(key.date)
        .bind(&key.time)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Meeting::from))
    }

    #[instrument(skip(self))]
    async fn next_from(&self, from: NaiveDate) -> RepoResult<Option<Meeting>> {
        let result = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, date, time, place, participants, created_at
            FROM meetings
            WHERE date >= $1
            ORDER BY date ASC, time ASC
            LIMIT 1
            ",
        )
        .bind(from)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Meeting::from))
    }

    #[instrument(skip(self))]
    async fn list_until(&self, until: NaiveDate) -> RepoResult<Vec<Meeting>> {
        let rows = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, date, time, place, participants, created_at
            FROM meetings
            WHERE date <= $1
            ORDER BY date DESC, time ASC
            ",
        )
        .bind(until)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Meeting::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Meeting>> {
        let rows = sqlx::query_as::<_, MeetingModel>(
            r"
            SELECT id, date, time, place, participants, created_at
            FROM meetings
            ORDER BY date DESC, time ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Meeting::from).collect())
    }

    #[instrument(skip(self, meeting), fields(key = %meeting.key()))]
    async fn create(&self, meeting: &NewMeeting) -> RepoResult<Meeting> {
        let model = sqlx::query_as::<_, MeetingModel>(
            r"
            INSERT INTO meetings (date, time, place, participants)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, time, place, participants, created_at
            ",
        )
        .bind(meeting.date)
        .bind(&meeting.time)
        .bind(&meeting.place)
        .bind(&meeting.participants)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::MeetingAlreadyConfirmed(meeting.key()))
        })?;

        Ok(Meeting::from(model))
    }

    #[instrument(skip(self), fields(key = %key))]
    async fn delete_by_key(&self, key: &MeetingKey) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM meetings WHERE date = $1 AND time = $2
            ",
        )
        .bind(key.date)
        .bind(&key.time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(meeting_not_found(key));
        }

        Ok(())
    }
}
