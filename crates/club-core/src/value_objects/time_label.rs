//! Time slot labels
//!
//! Slots are free-form display strings ("10:00 AM"). They are compared by
//! equality only; the helpers here build new labels from the admin picker and
//! render existing ones in Korean for announcements.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Weekday;

/// AM / PM half of a 12-hour clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }

    fn korean(self) -> &'static str {
        match self {
            Self::Am => "오전",
            Self::Pm => "오후",
        }
    }
}

/// Build a slot label such as `"02:00 PM"` from an hour in 1..=12
pub fn slot_label(hour: u8, meridiem: Meridiem) -> Result<String, DomainError> {
    if !(1..=12).contains(&hour) {
        return Err(DomainError::InvalidSlotHour(hour));
    }
    Ok(format!("{hour:02}:00 {}", meridiem.as_str()))
}

/// Render `"02:00 PM"` as `"오후 2시"`; `None` when the label is not in
/// `H:MM AM|PM` shape.
pub fn korean_time_label(label: &str) -> Option<String> {
    let (clock, half) = label.trim().split_once(' ')?;
    let meridiem = match half.trim().to_ascii_uppercase().as_str() {
        "AM" => Meridiem::Am,
        "PM" => Meridiem::Pm,
        _ => return None,
    };
    let (hour, minute) = clock.split_once(':')?;
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let mut rendered = format!("{} {hour}시", meridiem.korean());
    if minute > 0 {
        rendered.push_str(&format!(" {minute}분"));
    }
    Some(rendered)
}

/// Render a date as `"2024년 5월 10일 금요일"`
pub fn korean_date_label(date: NaiveDate) -> String {
    format!(
        "{}년 {}월 {}일 {}요일",
        date.year(),
        date.month(),
        date.day(),
        Weekday::of(date).korean()
    )
}
