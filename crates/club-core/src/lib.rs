//! # club-core
//!
//! Domain layer for the board-game club: entities, value objects, the pure
//! scheduling rules (availability, confirmation grouping, attendance), and
//! the repository ports implemented by the database layer.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod rules;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Admin, AttendanceRecord, Meeting, Member, NewMeeting, NewMember, NewNotice, NewReservation,
    NewReview, Notice, PlayedGame, Reservation, Review, ReviewUpdate, ScheduleConfig,
    WARNING_THRESHOLD,
};
pub use error::DomainError;
pub use rules::{
    AttendanceMatrix, BoardEntry, ConfirmationState, DateGroup, DayAvailability,
    ExpulsionStatus, ReservationGroup, DEFAULT_VENUE,
};
pub use traits::{
    AdminRepository, AttendanceRepository, Clock, FixedClock, MeetingRepository,
    MemberRepository, NoticeRepository, RepoResult, ReservationRepository, ReviewRepository,
    SettingsRepository, SystemClock,
};
pub use value_objects::{
    AttendanceStatus, JoinSource, MeetingKey, MemberStatus, Meridiem, Weekday,
};
