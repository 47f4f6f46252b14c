//! Member entity - a club member on the roster

use chrono::{DateTime, NaiveDate, Utc};

use crate::rules::ExpulsionStatus;
use crate::value_objects::{JoinSource, MemberStatus};

/// Warning count at which a member is flagged on the roster
pub const WARNING_THRESHOLD: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub nickname: String,
    pub joined_at: Option<NaiveDate>,
    pub last_participation_date: Option<NaiveDate>,
    pub warning_count: i32,
    pub status: MemberStatus,
    pub source: Option<JoinSource>,
    pub created_at: DateTime<Utc>,
}

impl Member {
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    pub fn has_warning_flag(&self) -> bool {
        self.warning_count >= WARNING_THRESHOLD
    }

    /// Expulsion standing as of `today`; recomputed on every read
    pub fn expulsion(&self, today: NaiveDate) -> ExpulsionStatus {
        ExpulsionStatus::evaluate(self.last_participation_date, self.joined_at, today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub nickname: String,
    pub joined_at: NaiveDate,
    pub source: JoinSource,
}
