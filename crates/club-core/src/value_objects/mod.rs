//! Value objects - immutable types that represent domain concepts

mod attendance_status;
mod meeting_key;
mod member_status;
mod time_label;
mod weekday;

pub use attendance_status::AttendanceStatus;
pub use meeting_key::MeetingKey;
pub use member_status::{JoinSource, MemberStatus};
pub use time_label::{korean_date_label, korean_time_label, slot_label, Meridiem};
pub use weekday::Weekday;
