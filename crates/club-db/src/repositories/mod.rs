//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in club-core.
//! Each repository handles database operations for one table.

mod admin;
mod attendance;
mod error;
mod meeting;
mod member;
mod notice;
mod reservation;
mod review;
mod settings;

pub use admin::PgAdminRepository;
pub use attendance::PgAttendanceRepository;
pub use meeting::PgMeetingRepository;
pub use member::PgMemberRepository;
pub use notice::PgNoticeRepository;
pub use reservation::PgReservationRepository;
pub use review::PgReviewRepository;
pub use settings::PgSettingsRepository;
