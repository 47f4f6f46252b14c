//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use club_core::entities::PlayedGame;
use club_core::value_objects::{AttendanceStatus, JoinSource, MemberStatus, Weekday};

// ============================================================================
// Auth Responses
// ============================================================================

/// Admin identity
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: i64,
    pub email: String,
}

/// Issued on sign-in
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub expires_at: i64,
    pub admin: AdminResponse,
}

/// The session behind the presented token
#[derive(Debug, Serialize)]
pub struct CurrentSessionResponse {
    pub session_id: String,
    pub admin: AdminResponse,
    pub issued_at: DateTime<Utc>,
    pub expires_at: i64,
}

// ============================================================================
// Schedule Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    /// `None` until a schedule has been saved
    pub id: Option<i64>,
    pub active_weekdays: Vec<Weekday>,
    pub slots_by_weekday: BTreeMap<Weekday, Vec<String>>,
    /// Active days that offer no slot yet
    pub weekdays_missing_slots: Vec<Weekday>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayAvailabilityResponse {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub bookable: bool,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthAvailabilityResponse {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayAvailabilityResponse>,
}

// ============================================================================
// Reservation Responses
// ============================================================================

/// Full reservation, returned only to its booker
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub name: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

/// Public row of the booking status board
#[derive(Debug, Clone, Serialize)]
pub struct BookedSlotResponse {
    pub id: i64,
    pub time: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DateReservationsResponse {
    pub date: NaiveDate,
    pub display_date: String,
    pub count: usize,
    pub reservations: Vec<BookedSlotResponse>,
}

// ============================================================================
// Confirmation Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BoardEntryResponse {
    pub date: NaiveDate,
    pub time: String,
    pub count: usize,
    pub participants: Vec<String>,
    pub place: String,
    pub confirmed: bool,
    pub meeting_id: Option<i64>,
}

// ============================================================================
// Meeting Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MeetingResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
    pub participants: Vec<String>,
    pub participant_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Upcoming meeting with Korean display strings
#[derive(Debug, Clone, Serialize)]
pub struct NextMeetingResponse {
    #[serde(flatten)]
    pub meeting: MeetingResponse,
    pub display_date: String,
    pub display_time: String,
}

// ============================================================================
// Attendance Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceColumn {
    pub meeting_id: i64,
    pub date: NaiveDate,
    pub time: String,
    pub place: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceCell {
    pub meeting_id: i64,
    pub status: AttendanceStatus,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRow {
    pub member_id: i64,
    pub nickname: String,
    pub attended_count: usize,
    pub cells: Vec<AttendanceCell>,
}

/// Dense member x meeting grid
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceMatrixResponse {
    pub meetings: Vec<AttendanceColumn>,
    pub members: Vec<AttendanceRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub member_id: i64,
    pub meeting_id: i64,
    pub status: AttendanceStatus,
}

// ============================================================================
// Member Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub nickname: String,
    pub joined_at: Option<NaiveDate>,
    pub last_participation_date: Option<NaiveDate>,
    pub warning_count: i32,
    pub warning_flag: bool,
    pub status: MemberStatus,
    pub source: Option<JoinSource>,
    pub expulsion_date: Option<NaiveDate>,
    pub days_left: Option<i64>,
    pub expulsion_label: String,
    pub expulsion_passed: bool,
}

// ============================================================================
// Notice / Review Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NoticeResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
