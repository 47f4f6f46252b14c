//! Meeting database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for meetings table
#[derive(Debug, Clone, FromRow)]
pub struct MeetingModel {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}
