//! Availability engine
//!
//! Decides whether a calendar date is open for booking and which slots it
//! offers. A missing configuration means nothing is bookable.

use chrono::{Datelike, NaiveDate};

use crate::entities::ScheduleConfig;
use crate::value_objects::Weekday;

/// Whether `date` can be booked: its weekday is active and it is not before
/// `today`. Same-day booking is allowed.
pub fn is_date_bookable(date: NaiveDate, config: Option<&ScheduleConfig>, today: NaiveDate) -> bool {
    let Some(config) = config else {
        return false;
    };
    date >= today && config.is_active(Weekday::of(date))
}

/// Slots configured for the weekday of `date`, in configured order
pub fn slots_for_date(date: NaiveDate, config: Option<&ScheduleConfig>) -> Vec<String> {
    config
        .map(|c| c.slots(Weekday::of(date)).to_vec())
        .unwrap_or_default()
}

/// Booking calendar cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub bookable: bool,
    pub slots: Vec<String>,
}

/// Availability for every day of a month. Slots are listed only for
/// bookable days. Returns an empty list for an invalid year/month.
pub fn month_availability(
    year: i32,
    month: u32,
    config: Option<&ScheduleConfig>,
    today: NaiveDate,
) -> Vec<DayAvailability> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let bookable = is_date_bookable(date, config, today);
            DayAvailability {
                date,
                weekday: Weekday::of(date),
                bookable,
                slots: if bookable {
                    slots_for_date(date, config)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}
