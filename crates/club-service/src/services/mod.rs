//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod attendance;
pub mod auth;
pub mod confirmation;
pub mod context;
pub mod error;
pub mod meeting;
pub mod member;
pub mod notice;
pub mod reservation;
pub mod review;
pub mod schedule;
pub mod session;
pub mod staging;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use confirmation::ConfirmationService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use meeting::MeetingService;
pub use member::MemberService;
pub use notice::NoticeService;
pub use reservation::ReservationService;
pub use review::ReviewService;
pub use schedule::ScheduleService;
pub use session::{Session, SessionStore};
pub use staging::PlaceStaging;
