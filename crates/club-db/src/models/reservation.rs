//! Reservation database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for reservation table
#[derive(Debug, Clone, FromRow)]
pub struct ReservationModel {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}
