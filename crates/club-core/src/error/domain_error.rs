//! Domain errors - error types for the domain layer

use chrono::NaiveDate;
use thiserror::Error;

use crate::value_objects::MeetingKey;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Reservation not found: {0}")]
    ReservationNotFound(i64),

    #[error("No confirmed meeting for {0}")]
    MeetingNotFound(MeetingKey),

    #[error("Meeting not found: {0}")]
    MeetingIdNotFound(i64),

    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Review not found: {0}")]
    ReviewNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Slot hour must be between 1 and 12, got {0}")]
    InvalidSlotHour(u8),

    #[error("Invalid attendance status: {0}")]
    InvalidAttendanceStatus(String),

    #[error("Invalid member status: {0}")]
    InvalidMemberStatus(String),

    #[error("Invalid join source: {0}")]
    InvalidJoinSource(String),

    #[error("Date is not open for booking: {0}")]
    DateNotBookable(NaiveDate),

    #[error("Time slot {time} is not offered on {date}")]
    SlotNotOffered { date: NaiveDate, time: String },

    #[error("당일에는 취소할 수 없어요. 직접 문의해 주세요.")]
    SameDayCancellation,

    #[error("Reservation date has already passed: {0}")]
    PastReservation(NaiveDate),

    #[error("Only sessions after today can be confirmed: {0}")]
    NotConfirmable(MeetingKey),

    #[error("No reservations for {0}")]
    NoReservationsForSlot(MeetingKey),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Review password does not match")]
    WrongReviewPassword,

    #[error("Reservation does not belong to the given contact")]
    NotReservationOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Meeting already confirmed for {0}")]
    MeetingAlreadyConfirmed(MeetingKey),

    #[error("Member already deactivated: {0}")]
    MemberAlreadyDeactivated(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::MeetingNotFound(_) | Self::MeetingIdNotFound(_) => "UNKNOWN_MEETING",
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidWeekday(_) => "INVALID_WEEKDAY",
            Self::InvalidSlotHour(_) => "INVALID_SLOT_HOUR",
            Self::InvalidAttendanceStatus(_) => "INVALID_ATTENDANCE_STATUS",
            Self::InvalidMemberStatus(_) => "INVALID_MEMBER_STATUS",
            Self::InvalidJoinSource(_) => "INVALID_JOIN_SOURCE",
            Self::DateNotBookable(_) => "DATE_NOT_BOOKABLE",
            Self::SlotNotOffered { .. } => "SLOT_NOT_OFFERED",
            Self::SameDayCancellation => "SAME_DAY_CANCELLATION",
            Self::PastReservation(_) => "PAST_RESERVATION",
            Self::NotConfirmable(_) => "NOT_CONFIRMABLE",
            Self::NoReservationsForSlot(_) => "NO_RESERVATIONS_FOR_SLOT",

            // Authorization
            Self::WrongReviewPassword => "WRONG_REVIEW_PASSWORD",
            Self::NotReservationOwner => "NOT_RESERVATION_OWNER",

            // Conflict
            Self::MeetingAlreadyConfirmed(_) => "MEETING_ALREADY_CONFIRMED",
            Self::MemberAlreadyDeactivated(_) => "MEMBER_ALREADY_DEACTIVATED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ReservationNotFound(_)
                | Self::MeetingNotFound(_)
                | Self::MeetingIdNotFound(_)
                | Self::MemberNotFound(_)
                | Self::ReviewNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidWeekday(_)
                | Self::InvalidSlotHour(_)
                | Self::InvalidAttendanceStatus(_)
                | Self::InvalidMemberStatus(_)
                | Self::InvalidJoinSource(_)
                | Self::DateNotBookable(_)
                | Self::SlotNotOffered { .. }
                | Self::SameDayCancellation
                | Self::PastReservation(_)
                | Self::NotConfirmable(_)
                | Self::NoReservationsForSlot(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::WrongReviewPassword | Self::NotReservationOwner)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::MeetingAlreadyConfirmed(_) | Self::MemberAlreadyDeactivated(_)
        )
    }
}
