//! Schedule configuration - which weekdays are open and which slots each offers

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};

use crate::value_objects::Weekday;

/// Weekly recurring schedule. Saved wholesale; the newest row wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConfig {
    pub id: i64,
    pub active_weekdays: BTreeSet<Weekday>,
    pub slots_by_weekday: BTreeMap<Weekday, Vec<String>>,
    pub created_at: DateTime<Utc>,
}

impl ScheduleConfig {
    /// An empty, unsaved configuration
    pub fn new() -> Self {
        Self {
            id: 0,
            active_weekdays: BTreeSet::new(),
            slots_by_weekday: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_active(&self, day: Weekday) -> bool {
        self.active_weekdays.contains(&day)
    }

    /// Slots configured for a weekday, empty if none
    pub fn slots(&self, day: Weekday) -> &[String] {
        self.slots_by_weekday
            .get(&day)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Flip a weekday on or off. Returns whether it is now active.
    pub fn toggle_weekday(&mut self, day: Weekday) -> bool {
        if self.active_weekdays.remove(&day) {
            false
        } else {
            self.active_weekdays.insert(day);
            true
        }
    }

    /// Append a slot to a weekday. Returns false if the label was already there.
    pub fn add_slot(&mut self, day: Weekday, label: impl Into<String>) -> bool {
        let label = label.into();
        let slots = self.slots_by_weekday.entry(day).or_default();
        if slots.contains(&label) {
            return false;
        }
        slots.push(label);
        true
    }

    /// Remove a slot by label. Returns false if it was not configured.
    pub fn remove_slot(&mut self, day: Weekday, label: &str) -> bool {
        let Some(slots) = self.slots_by_weekday.get_mut(&day) else {
            return false;
        };
        let before = slots.len();
        slots.retain(|s| s != label);
        let removed = slots.len() != before;
        if slots.is_empty() {
            self.slots_by_weekday.remove(&day);
        }
        removed
    }

    /// Clear every weekday and slot
    pub fn reset(&mut self) {
        self.active_weekdays.clear();
        self.slots_by_weekday.clear();
    }

    /// Active weekdays that have no slots yet
    pub fn weekdays_missing_slots(&self) -> Vec<Weekday> {
        self.active_weekdays
            .iter()
            .copied()
            .filter(|day| self.slots(*day).is_empty())
            .collect()
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self::new()
    }
}
