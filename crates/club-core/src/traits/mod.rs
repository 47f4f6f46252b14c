//! Ports implemented by the infrastructure layer

mod clock;
mod repositories;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repositories::{
    AdminRepository, AttendanceRepository, MeetingRepository, MemberRepository,
    NoticeRepository, RepoResult, ReservationRepository, ReviewRepository, SettingsRepository,
};
