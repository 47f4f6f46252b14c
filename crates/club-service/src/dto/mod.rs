//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddMemberRequest, AddSlotRequest, ConfirmMeetingRequest, ContactRequest,
    CreateNoticeRequest, CreateReservationRequest, CreateReviewRequest, DateQuery,
    MeetingKeyQuery, MonthQuery, RemoveSlotRequest, ReviewPasswordRequest, SaveScheduleRequest,
    SetAttendanceRequest, SignInRequest, StagePlaceRequest, UpdateReviewRequest,
};

pub use responses::{
    AdminResponse, AttendanceCell, AttendanceColumn, AttendanceMatrixResponse,
    AttendanceResponse, AttendanceRow, BoardEntryResponse, BookedSlotResponse,
    CurrentSessionResponse, DateReservationsResponse, DayAvailabilityResponse, HealthChecks,
    HealthResponse, MeetingResponse, MemberResponse, MonthAvailabilityResponse,
    NextMeetingResponse, NoticeResponse, ReadinessResponse, ReservationResponse, ReviewResponse,
    ScheduleResponse, SessionResponse,
};
