//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for reviews table
///
/// `games` is kept as raw JSON; rows written by older clients may hold
/// plain strings instead of `{name, memo}` objects.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub games: serde_json::Value,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}
