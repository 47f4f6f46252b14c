//! Expulsion target calculation
//!
//! A member becomes an expulsion target three calendar months after their
//! last participation, or after joining if they never participated.

use chrono::{Months, NaiveDate};

/// Months of inactivity before a member becomes an expulsion target
pub const INACTIVITY_MONTHS: u32 = 3;

/// Derived expulsion standing; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpulsionStatus {
    /// Neither a participation date nor a join date is known
    NoInformation,
    Scheduled {
        expulsion_date: NaiveDate,
        /// Whole days from today to the expulsion date; negative once passed
        days_left: i64,
    },
}

impl ExpulsionStatus {
    /// Evaluate from the member's dates. End-of-month dates are clamped
    /// (Nov 30 + 3 months = Feb 28/29).
    pub fn evaluate(
        last_participation: Option<NaiveDate>,
        joined_at: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        let Some(base) = last_participation.or(joined_at) else {
            return Self::NoInformation;
        };
        let Some(expulsion_date) = base.checked_add_months(Months::new(INACTIVITY_MONTHS)) else {
            return Self::NoInformation;
        };

        Self::Scheduled {
            expulsion_date,
            // Calendar days between dates; the time of day never matters
            days_left: (expulsion_date - today).num_days(),
        }
    }

    pub fn expulsion_date(&self) -> Option<NaiveDate> {
        match self {
            Self::NoInformation => None,
            Self::Scheduled { expulsion_date, .. } => Some(*expulsion_date),
        }
    }

    pub fn days_left(&self) -> Option<i64> {
        match self {
            Self::NoInformation => None,
            Self::Scheduled { days_left, .. } => Some(*days_left),
        }
    }

    /// True once the expulsion date is behind us
    pub fn is_passed(&self) -> bool {
        self.days_left().is_some_and(|d| d < 0)
    }

    /// Roster label: "{n}일 남음", "{n}일 지남", or "정보 없음"
    pub fn label(&self) -> String {
        match self.days_left() {
            None => "정보 없음".to_string(),
            Some(d) if d >= 0 => format!("{d}일 남음"),
            Some(d) => format!("{}일 지남", d.abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_day_past() {
        let status = ExpulsionStatus::evaluate(Some(date(2024, 1, 1)), None, date(2024, 4, 2));
        assert_eq!(status.expulsion_date(), Some(date(2024, 4, 1)));
        assert_eq!(status.days_left(), Some(-1));
        assert!(status.is_passed());
        assert_eq!(status.label(), "1일 지남");
    }

    #[test]
    fn test_days_remaining() {
        let status = ExpulsionStatus::evaluate(None, Some(date(2024, 1, 1)), date(2024, 3, 22));
        assert_eq!(status.days_left(), Some(10));
        assert!(!status.is_passed());
        assert_eq!(status.label(), "10일 남음");
    }

    #[test]
    fn test_expulsion_day_itself_not_passed() {
        let status = ExpulsionStatus::evaluate(Some(date(2024, 1, 1)), None, date(2024, 4, 1));
        assert_eq!(status.days_left(), Some(0));
        assert!(!status.is_passed());
        assert_eq!(status.label(), "0일 남음");
    }

    #[test]
    fn test_last_participation_wins_over_join_date() {
        let status = ExpulsionStatus::evaluate(
            Some(date(2024, 3, 1)),
            Some(date(2023, 1, 1)),
            date(2024, 4, 1),
        );
        assert_eq!(status.expulsion_date(), Some(date(2024, 6, 1)));
    }

    #[test]
    fn test_end_of_month_clamps() {
        let status = ExpulsionStatus::evaluate(Some(date(2023, 11, 30)), None, date(2024, 1, 1));
        assert_eq!(status.expulsion_date(), Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_no_information() {
        let status = ExpulsionStatus::evaluate(None, None, date(2024, 4, 1));
        assert_eq!(status, ExpulsionStatus::NoInformation);
        assert!(!status.is_passed());
        assert_eq!(status.label(), "정보 없음");
    }
}
