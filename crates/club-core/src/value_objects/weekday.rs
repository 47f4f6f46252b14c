//! Canonical weekday representation
//!
//! Stored schedules carry days in mixed shapes: integer indexes, lowercase
//! English names, sometimes capitalized or abbreviated names. Every shape is
//! normalized into [`Weekday`] as soon as it is loaded; nothing downstream
//! compares raw values.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Day of the week, indexed 0 = Sunday through 6 = Saturday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Weekday; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of a calendar date
    pub fn of(date: NaiveDate) -> Self {
        Self::from(date.weekday())
    }

    /// Build from a 0..=6 index (0 = Sunday)
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase English name, the persisted form
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }

    /// Single-character Korean name ("일" .. "토")
    pub fn korean(self) -> &'static str {
        match self {
            Self::Sunday => "일",
            Self::Monday => "월",
            Self::Tuesday => "화",
            Self::Wednesday => "수",
            Self::Thursday => "목",
            Self::Friday => "금",
            Self::Saturday => "토",
        }
    }

    /// Normalize a raw JSON value (number or string) into a weekday
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().and_then(Self::from_index),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<i64>() {
            return Self::from_index(index)
                .ok_or_else(|| DomainError::InvalidWeekday(trimmed.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == lower || day.as_str()[..3] == lower)
            .ok_or_else(|| DomainError::InvalidWeekday(trimmed.to_string()))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Weekday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Index(i64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Index(i) => Self::from_index(i)
                .ok_or_else(|| serde::de::Error::custom(format!("weekday index out of range: {i}"))),
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
