//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use club_core::entities::{NewReservation, Reservation};
use club_core::traits::{RepoResult, ReservationRepository};

use crate::models::ReservationModel;

use super::error::{map_db_error, reservation_not_found};

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        let result = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, date, time, name, phone_number, created_at
            FROM reservation
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Reservation::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, date, time, name, phone_number, created_at
            FROM reservation
            ORDER BY date ASC, time ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    #[instrument(skip(self))]
    async fn list_from(&self, from: NaiveDate) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, date, time, name, phone_number, created_at
            FROM reservation
            WHERE date >= $1
            ORDER BY date ASC, time ASC, id ASC
            ",
        )
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    #[instrument(skip(self, phone_number))]
    async fn find_by_contact(
        &self,
        name: &str,
        phone_number: &str,
        from: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let rows = sqlx::query_as::<_, ReservationModel>(
            r"
            SELECT id, date, time, name, phone_number, created_at
            FROM reservation
            WHERE name = $1 AND phone_number = $2 AND date >= $3
            ORDER BY date ASC, time ASC, id ASC
            ",
        )
        .bind(name)
        .bind(phone_number)
        .bind(from)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    #[instrument(skip(self))]
    async fn first_phone_for_name(&self, name: &str) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT phone_number FROM reservation
            WHERE name = $1
            ORDER BY id ASC
            LIMIT 1
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, reservation), fields(date = %reservation.date, time = %reservation.time))]
    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation> {
        let model = sqlx::query_as::<_, ReservationModel>(
            r"
            INSERT INTO reservation (date, time, name, phone_number)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, time, name, phone_number, created_at
            ",
        )
        .bind(reservation.date)
        .bind(&reservation.time)
        .bind(&reservation.name)
        .bind(&reservation.phone_number)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Reservation::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM reservation WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(reservation_not_found(id));
        }

        Ok(())
    }
}
