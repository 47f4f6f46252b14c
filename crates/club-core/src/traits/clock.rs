//! Clock port - where "today" comes from
//!
//! Every date rule compares against the club's local calendar day, not UTC.

use chrono::{FixedOffset, NaiveDate, Utc};

use crate::error::DomainError;

pub trait Clock: Send + Sync {
    /// Current calendar date in the club's timezone
    fn today(&self) -> NaiveDate;
}

/// Wall clock shifted to a fixed UTC offset
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Build from a whole-hour offset, e.g. `9` for KST
    pub fn with_offset_hours(hours: i32) -> Result<Self, DomainError> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or_else(|| DomainError::ValidationError(format!("invalid UTC offset: {hours}h")))
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.offset).date_naive()
    }
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    today: NaiveDate,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
