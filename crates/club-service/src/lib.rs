//! # club-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Every workflow runs against an explicit [`ServiceContext`]: the store,
//! the clock, club settings, the admin session registry, and staged
//! meeting places all travel through it.

pub mod dto;
pub mod services;

pub use services::{
    AttendanceService, AuthService, ConfirmationService, MeetingService, MemberService,
    NoticeService, PlaceStaging, ReservationService, ReviewService, ScheduleService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, Session, SessionStore,
};
