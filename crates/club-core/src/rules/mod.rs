//! Business rules - pure functions over domain entities
//!
//! Nothing here performs I/O. "Today" is always passed in by the caller.

mod attendance_matrix;
mod availability;
mod confirmation;
mod expulsion;

pub use attendance_matrix::AttendanceMatrix;
pub use availability::{is_date_bookable, month_availability, slots_for_date, DayAvailability};
pub use confirmation::{
    build_board, group_by_date, group_by_key, is_confirmable, resolve_place, snapshot_meeting,
    BoardEntry, ConfirmationState, DateGroup, ReservationGroup, DEFAULT_VENUE,
};
pub use expulsion::{ExpulsionStatus, INACTIVITY_MONTHS};
