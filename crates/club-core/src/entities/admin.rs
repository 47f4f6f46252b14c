//! Admin entity - an account allowed into the admin console

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
