//! Notice database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for notice table
#[derive(Debug, Clone, FromRow)]
pub struct NoticeModel {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}
