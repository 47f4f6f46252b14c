//! Domain entities - core business objects

mod admin;
mod attendance;
mod meeting;
mod member;
mod notice;
mod reservation;
mod review;
mod schedule;

pub use admin::Admin;
pub use attendance::AttendanceRecord;
pub use meeting::{Meeting, NewMeeting};
pub use member::{Member, NewMember, WARNING_THRESHOLD};
pub use notice::{NewNotice, Notice};
pub use reservation::{NewReservation, Reservation};
pub use review::{NewReview, PlayedGame, Review, ReviewUpdate};
pub use schedule::ScheduleConfig;
