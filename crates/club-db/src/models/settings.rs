//! Settings database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for settings table
///
/// Weekdays in `active_days` arrive in whatever shape the writer used
/// (indexes or names); they are normalized by the mapper.
#[derive(Debug, Clone, FromRow)]
pub struct SettingsModel {
    pub id: i64,
    pub active_days: serde_json::Value,
    pub sunday_time_options: Option<Vec<String>>,
    pub monday_time_options: Option<Vec<String>>,
    pub tuesday_time_options: Option<Vec<String>>,
    pub wednesday_time_options: Option<Vec<String>>,
    pub thursday_time_options: Option<Vec<String>>,
    pub friday_time_options: Option<Vec<String>>,
    pub saturday_time_options: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl SettingsModel {
    /// Column values in weekday index order (Sunday first)
    pub fn time_options(&self) -> [&Option<Vec<String>>; 7] {
        [
            &self.sunday_time_options,
            &self.monday_time_options,
            &self.tuesday_time_options,
            &self.wednesday_time_options,
            &self.thursday_time_options,
            &self.friday_time_options,
            &self.saturday_time_options,
        ]
    }
}
