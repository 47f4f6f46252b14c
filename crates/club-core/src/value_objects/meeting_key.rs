//! Meeting key - the (date, time) pair that identifies a session

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifies a session: reservations sharing a key form one candidate
/// meeting, and at most one confirmed meeting exists per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MeetingKey {
    pub date: NaiveDate,
    pub time: String,
}

impl MeetingKey {
    pub fn new(date: NaiveDate, time: impl Into<String>) -> Self {
        Self {
            date,
            time: time.into(),
        }
    }
}

impl fmt::Display for MeetingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.time)
    }
}
