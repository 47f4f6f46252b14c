//! Admin database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for admins table
#[derive(Debug, Clone, FromRow)]
pub struct AdminModel {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
