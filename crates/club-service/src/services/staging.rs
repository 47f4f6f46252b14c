//! Staged meeting places
//!
//! Place edits on the confirmation board live only in memory until the key
//! is confirmed. They are lost on restart.

use std::sync::Arc;

use chrono::NaiveDate;
use dashmap::DashMap;

use club_core::value_objects::MeetingKey;

#[derive(Debug, Clone, Default)]
pub struct PlaceStaging {
    places: Arc<DashMap<MeetingKey, String>>,
}

impl PlaceStaging {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a place; a blank place clears the entry
    pub fn stage(&self, key: MeetingKey, place: &str) {
        let place = place.trim();
        if place.is_empty() {
            self.places.remove(&key);
        } else {
            self.places.insert(key, place.to_string());
        }
    }

    pub fn get(&self, key: &MeetingKey) -> Option<String> {
        self.places.get(key).map(|entry| entry.value().clone())
    }

    pub fn clear(&self, key: &MeetingKey) -> Option<String> {
        self.places.remove(key).map(|(_, place)| place)
    }

    /// Drop entries for keys that can no longer be confirmed; returns how many
    pub fn prune_through(&self, today: NaiveDate) -> usize {
        let before = self.places.len();
        self.places.retain(|key, _| key.date > today);
        before - self.places.len()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> MeetingKey {
        MeetingKey::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), "10:00 AM")
    }

    #[test]
    fn test_last_edit_wins() {
        let staging = PlaceStaging::new();
        staging.stage(key(), "카페");
        staging.stage(key(), " 2호점 ");
        assert_eq!(staging.get(&key()).as_deref(), Some("2호점"));
    }

    #[test]
    fn test_blank_clears() {
        let staging = PlaceStaging::new();
        staging.stage(key(), "카페");
        staging.stage(key(), "   ");
        assert!(staging.get(&key()).is_none());
    }

    #[test]
    fn test_prune_through_drops_today_and_past() {
        let staging = PlaceStaging::new();
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        staging.stage(MeetingKey::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), "10:00 AM"), "stale");
        staging.stage(MeetingKey::new(today, "10:00 AM"), "today");
        staging.stage(MeetingKey::new(today.succ_opt().unwrap(), "10:00 AM"), "tomorrow");

        assert_eq!(staging.prune_through(today), 2);
        assert_eq!(staging.len(), 1);
        assert!(staging.get(&MeetingKey::new(today.succ_opt().unwrap(), "10:00 AM")).is_some());
    }
}
