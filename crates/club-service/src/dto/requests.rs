//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; JSON bodies also implement
//! `Validate` for input validation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use club_core::entities::PlayedGame;
use club_core::value_objects::{JoinSource, MeetingKey, Meridiem, Weekday};

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin sign-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Schedule Requests
// ============================================================================

/// Replace the whole schedule
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveScheduleRequest {
    #[serde(default)]
    pub active_weekdays: Vec<Weekday>,

    #[serde(default)]
    pub slots_by_weekday: BTreeMap<Weekday, Vec<String>>,
}

/// Add a slot built from the hour picker
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddSlotRequest {
    pub weekday: Weekday,

    #[validate(range(min = 1, max = 12, message = "Hour must be between 1 and 12"))]
    pub hour: u8,

    pub meridiem: Meridiem,
}

/// Remove a slot by its label
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RemoveSlotRequest {
    pub weekday: Weekday,

    #[validate(length(min = 1, message = "Slot label is required"))]
    pub label: String,
}

/// `?date=YYYY-MM-DD`
#[derive(Debug, Clone, Deserialize)]
pub struct DateQuery {
    pub date: NaiveDate,
}

/// `?year=2024&month=5`
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

// ============================================================================
// Reservation Requests
// ============================================================================

/// Book a slot
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 20, message = "Time must be 1-20 characters"))]
    pub time: String,

    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Phone number must be 1-20 characters"))]
    pub phone_number: String,
}

/// Contact pair identifying a booker; `phone_number` may be the master key
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "Phone number must be 1-20 characters"))]
    pub phone_number: String,
}

// ============================================================================
// Confirmation Requests
// ============================================================================

/// `?date=..&time=..` identifying one meeting key
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingKeyQuery {
    pub date: NaiveDate,
    pub time: String,
}

impl From<MeetingKeyQuery> for MeetingKey {
    fn from(query: MeetingKeyQuery) -> Self {
        MeetingKey::new(query.date, query.time)
    }
}

/// Confirm a key, optionally overriding the place
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ConfirmMeetingRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,

    #[validate(length(max = 100, message = "Place must be at most 100 characters"))]
    pub place: Option<String>,
}

impl ConfirmMeetingRequest {
    pub fn key(&self) -> MeetingKey {
        MeetingKey::new(self.date, self.time.clone())
    }
}

/// Stage a place for an unconfirmed key
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StagePlaceRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,

    #[validate(length(max = 100, message = "Place must be at most 100 characters"))]
    pub place: String,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Set one attendance cell. `status` is parsed by the service.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetAttendanceRequest {
    pub member_id: i64,
    pub meeting_id: i64,

    #[validate(length(min = 1, message = "Status is required"))]
    pub status: String,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Register a member; `joined_at` defaults to today
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddMemberRequest {
    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,

    pub joined_at: Option<NaiveDate>,

    pub source: JoinSource,
}

// ============================================================================
// Notice Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateNoticeRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,
}

// ============================================================================
// Review Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    #[serde(default)]
    pub games: Vec<PlayedGame>,

    #[validate(length(min = 1, max = 30, message = "Nickname must be 1-30 characters"))]
    pub nickname: String,

    #[validate(length(equal = 4, message = "Password must be 4 digits"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Content must be 1-5000 characters"))]
    pub content: String,

    #[serde(default)]
    pub games: Vec<PlayedGame>,

    pub password: String,
}

/// Password check for deleting a review
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReviewPasswordRequest {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_schedule_accepts_mixed_weekdays() {
        let request: SaveScheduleRequest = serde_json::from_value(json!({
            "active_weekdays": [1, "tuesday", "Sat"],
            "slots_by_weekday": {"monday": ["10:00 AM"], "1": ["02:00 PM"]}
        }))
        .unwrap();

        assert_eq!(
            request.active_weekdays,
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Saturday]
        );
        assert!(request.slots_by_weekday.contains_key(&Weekday::Monday));
    }

    #[test]
    fn test_add_slot_validation() {
        let request: AddSlotRequest = serde_json::from_value(json!({
            "weekday": "friday", "hour": 13, "meridiem": "PM"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_review_password_length() {
        let request: CreateReviewRequest = serde_json::from_value(json!({
            "title": "t", "content": "c", "nickname": "n", "password": "12345"
        }))
        .unwrap();
        assert!(request.validate().is_err());
        assert!(request.games.is_empty());
    }

    #[test]
    fn test_add_member_source_korean_name() {
        let request: AddMemberRequest = serde_json::from_value(json!({
            "nickname": "meeple", "source": "지인소개"
        }))
        .unwrap();
        assert_eq!(request.source, JoinSource::Referral);
        assert!(request.joined_at.is_none());
    }
}
