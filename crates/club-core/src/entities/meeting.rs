//! Meeting entity - a confirmed session
//!
//! A meeting is a snapshot: participants are copied from the reservations at
//! confirmation time and are not updated by later cancellations.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::MeetingKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
    pub participants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Meeting {
    pub fn key(&self) -> MeetingKey {
        MeetingKey::new(self.date, self.time.clone())
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}

/// Meeting about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMeeting {
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
    pub participants: Vec<String>,
}

impl NewMeeting {
    pub fn key(&self) -> MeetingKey {
        MeetingKey::new(self.date, self.time.clone())
    }
}
