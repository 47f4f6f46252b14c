//! Schedule configuration <-> settings row mapper
//!
//! This is the single place where stored weekday values are normalized.

use std::collections::{BTreeMap, BTreeSet};

use club_core::entities::ScheduleConfig;
use club_core::value_objects::Weekday;
use serde_json::Value;
use tracing::warn;

use crate::models::SettingsModel;

/// Normalize a stored weekday list, dropping entries that are not weekdays
pub fn weekdays_from_json(value: &Value) -> BTreeSet<Weekday> {
    let Some(items) = value.as_array() else {
        warn!(active_days = %value, "active_days is not a list, treating as empty");
        return BTreeSet::new();
    };

    items
        .iter()
        .filter_map(|raw| {
            let day = Weekday::from_json(raw);
            if day.is_none() {
                warn!(value = %raw, "Dropping unrecognized weekday");
            }
            day
        })
        .collect()
}

impl From<SettingsModel> for ScheduleConfig {
    fn from(model: SettingsModel) -> Self {
        let slots_by_weekday: BTreeMap<Weekday, Vec<String>> = Weekday::ALL
            .into_iter()
            .zip(model.time_options())
            .filter_map(|(day, slots)| {
                slots
                    .as_ref()
                    .filter(|s| !s.is_empty())
                    .map(|s| (day, s.clone()))
            })
            .collect();

        ScheduleConfig {
            id: model.id,
            active_weekdays: weekdays_from_json(&model.active_days),
            slots_by_weekday,
            created_at: model.created_at,
        }
    }
}

/// Column values for inserting a schedule row
pub struct SettingsInsert {
    /// Lowercase weekday names
    pub active_days: Value,
    /// Slots per weekday, Sunday first
    pub time_options: [Vec<String>; 7],
}

impl SettingsInsert {
    pub fn new(config: &ScheduleConfig) -> Self {
        let active_days = Value::Array(
            config
                .active_weekdays
                .iter()
                .map(|day| Value::String(day.as_str().to_string()))
                .collect(),
        );
        let time_options = Weekday::ALL.map(|day| config.slots(day).to_vec());

        Self {
            active_days,
            time_options,
        }
    }
}
