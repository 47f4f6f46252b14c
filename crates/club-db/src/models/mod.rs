//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod attendance;
mod meeting;
mod member;
mod notice;
mod reservation;
mod review;
mod settings;

pub use admin::AdminModel;
pub use attendance::AttendanceModel;
pub use meeting::MeetingModel;
pub use member::MemberModel;
pub use notice::NoticeModel;
pub use reservation::ReservationModel;
pub use review::ReviewModel;
pub use settings::SettingsModel;
