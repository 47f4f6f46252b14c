//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Tests share one
//! database, so names and dates are made unique per call.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Slots offered on every weekday by [`SaveScheduleRequest::every_day`]
pub const TEST_SLOTS: [&str; 2] = ["10:00 AM", "02:00 PM"];

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// A future date unlikely to be shared with another test
pub fn unique_future_date(today: NaiveDate) -> NaiveDate {
    let spread = uuid::Uuid::new_v4().as_u128() % 3000;
    today + Duration::days(7 + spread as i64)
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AdminResponse {
    pub id: i64,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub admin: AdminResponse,
}

#[derive(Debug, Deserialize)]
pub struct CurrentSessionResponse {
    pub session_id: String,
    pub admin: AdminResponse,
}

// ============================================================================
// Schedule
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SaveScheduleRequest {
    pub active_weekdays: Vec<String>,
    pub slots_by_weekday: BTreeMap<String, Vec<String>>,
}

impl SaveScheduleRequest {
    /// Every weekday active with [`TEST_SLOTS`]
    pub fn every_day() -> Self {
        let days = [
            "sunday",
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
        ];
        Self {
            active_weekdays: days.iter().map(|d| (*d).to_string()).collect(),
            slots_by_weekday: days
                .iter()
                .map(|d| ((*d).to_string(), TEST_SLOTS.iter().map(|s| (*s).to_string()).collect()))
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    pub active_weekdays: Vec<String>,
    pub slots_by_weekday: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct DayAvailabilityResponse {
    pub date: NaiveDate,
    pub weekday: String,
    pub bookable: bool,
    pub slots: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthAvailabilityResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayAvailabilityResponse>,
}

// ============================================================================
// Reservations
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CreateReservationRequest {
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
}

impl CreateReservationRequest {
    pub fn unique(date: NaiveDate) -> Self {
        let suffix = unique_suffix();
        Self {
            date,
            time: TEST_SLOTS[0].to_string(),
            name: format!("guest-{suffix}"),
            phone_number: format!("010-{}", &suffix[..8]),
        }
    }

    pub fn contact(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
}

#[derive(Debug, Deserialize)]
pub struct BookedSlotResponse {
    pub id: i64,
    pub time: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DateReservationsResponse {
    pub date: NaiveDate,
    pub display_date: String,
    pub count: usize,
    pub reservations: Vec<BookedSlotResponse>,
}

// ============================================================================
// Confirmation & meetings
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ConfirmMeetingRequest {
    pub date: NaiveDate,
    pub time: String,
    pub place: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StagePlaceRequest {
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
}

#[derive(Debug, Deserialize)]
pub struct BoardEntryResponse {
    pub date: NaiveDate,
    pub time: String,
    pub count: usize,
    pub participants: Vec<String>,
    pub place: String,
    pub confirmed: bool,
    pub meeting_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MeetingResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
    pub participants: Vec<String>,
    pub participant_count: usize,
}

// ============================================================================
// Members & attendance
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AddMemberRequest {
    pub nickname: String,
    pub joined_at: Option<NaiveDate>,
    pub source: String,
}

impl AddMemberRequest {
    pub fn unique(joined_at: Option<NaiveDate>) -> Self {
        Self {
            nickname: format!("m-{}", unique_suffix()),
            joined_at,
            source: "당근마켓".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub nickname: String,
    pub joined_at: Option<NaiveDate>,
    pub last_participation_date: Option<NaiveDate>,
    pub status: String,
    pub source: Option<String>,
    pub expulsion_date: Option<NaiveDate>,
    pub days_left: Option<i64>,
    pub expulsion_label: String,
}

#[derive(Debug, Serialize)]
pub struct SetAttendanceRequest {
    pub member_id: i64,
    pub meeting_id: i64,
    pub status: String,
}

// ============================================================================
// Notices & reviews
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateNoticeRequest {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NoticeResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct PlayedGame {
    pub name: String,
    pub memo: String,
}

#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
    pub nickname: String,
    pub password: String,
}

impl CreateReviewRequest {
    pub fn unique(password: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Game night {suffix}"),
            content: "Great evening".to_string(),
            games: vec![PlayedGame {
                name: "Azul".to_string(),
                memo: "close finish".to_string(),
            }],
            nickname: format!("reviewer-{suffix}"),
            password: password.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateReviewRequest {
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewPasswordRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub nickname: String,
}
