//! Reservation entity - a single booking request
//!
//! Reservations are never edited in place. Duplicate (date, time, name)
//! entries are allowed.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::MeetingKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn key(&self) -> MeetingKey {
        MeetingKey::new(self.date, self.time.clone())
    }

    /// Whether the reservation sits at the given key
    pub fn matches(&self, key: &MeetingKey) -> bool {
        self.date == key.date && self.time == key.time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
}
