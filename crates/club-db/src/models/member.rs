//! Member database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub nickname: String,
    pub joined_at: Option<NaiveDate>,
    pub last_participation_date: Option<NaiveDate>,
    pub warning: i32,
    pub status: String,
    pub source: Option<String>,
    pub created_at: DateTime<Utc>,
}
