//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Conversions that depend on "today" take it explicitly.

use chrono::NaiveDate;
use club_core::entities::{
    Admin, AttendanceRecord, Meeting, Member, Notice, Reservation, Review, ScheduleConfig,
};
use club_core::rules::{BoardEntry, ConfirmationState, DateGroup, DayAvailability};
use club_core::value_objects::korean_date_label;

use crate::services::Session;

use super::responses::{
    AdminResponse, AttendanceResponse, BoardEntryResponse, BookedSlotResponse,
    CurrentSessionResponse, DateReservationsResponse, DayAvailabilityResponse, MeetingResponse, MemberResponse,
    NoticeResponse, ReservationResponse, ReviewResponse, ScheduleResponse,
};

// ============================================================================
// Admin Mappers
// ============================================================================

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
        }
    }
}

impl From<Session> for CurrentSessionResponse {
    fn from(session: Session) -> Self {
        Self {
            admin: AdminResponse {
                id: session.admin_id,
                email: session.email,
            },
            session_id: session.session_id,
            issued_at: session.issued_at,
            expires_at: session.expires_at,
        }
    }
}

// ============================================================================
// Schedule Mappers
// ============================================================================

impl From<&ScheduleConfig> for ScheduleResponse {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            id: (config.id > 0).then_some(config.id),
            active_weekdays: config.active_weekdays.iter().copied().collect(),
            slots_by_weekday: config.slots_by_weekday.clone(),
            weekdays_missing_slots: config.weekdays_missing_slots(),
            updated_at: (config.id > 0).then_some(config.created_at),
        }
    }
}

impl ScheduleResponse {
    /// Response for a club that has never saved a schedule
    pub fn empty() -> Self {
        Self {
            id: None,
            active_weekdays: Vec::new(),
            slots_by_weekday: Default::default(),
            weekdays_missing_slots: Vec::new(),
            updated_at: None,
        }
    }
}

impl From<DayAvailability> for DayAvailabilityResponse {
    fn from(day: DayAvailability) -> Self {
        Self {
            date: day.date,
            weekday: day.weekday,
            bookable: day.bookable,
            slots: day.slots,
        }
    }
}

// ============================================================================
// Reservation Mappers
// ============================================================================

impl From<Reservation> for ReservationResponse {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            date: r.date,
            time: r.time,
            name: r.name,
            phone_number: r.phone_number,
            created_at: r.created_at,
        }
    }
}

impl From<DateGroup> for DateReservationsResponse {
    fn from(group: DateGroup) -> Self {
        Self {
            date: group.date,
            display_date: korean_date_label(group.date),
            count: group.reservations.len(),
            reservations: group
                .reservations
                .into_iter()
                .map(|r| BookedSlotResponse {
                    id: r.id,
                    time: r.time,
                    name: r.name,
                })
                .collect(),
        }
    }
}

// ============================================================================
// Confirmation / Meeting Mappers
// ============================================================================

impl From<BoardEntry> for BoardEntryResponse {
    fn from(entry: BoardEntry) -> Self {
        Self {
            date: entry.key.date,
            time: entry.key.time,
            count: entry.participants.len(),
            participants: entry.participants,
            place: entry.place,
            confirmed: entry.state == ConfirmationState::Confirmed,
            meeting_id: entry.meeting_id,
        }
    }
}

impl From<Meeting> for MeetingResponse {
    fn from(m: Meeting) -> Self {
        Self {
            id: m.id,
            date: m.date,
            time: m.time,
            place: m.place,
            participant_count: m.participants.len(),
            participants: m.participants,
            created_at: m.created_at,
        }
    }
}

impl From<AttendanceRecord> for AttendanceResponse {
    fn from(record: AttendanceRecord) -> Self {
        Self {
            member_id: record.member_id,
            meeting_id: record.meeting_id,
            status: record.status,
        }
    }
}

// ============================================================================
// Member Mappers
// ============================================================================

impl MemberResponse {
    /// Roster row with expulsion standing evaluated as of `today`
    pub fn from_member(member: Member, today: NaiveDate) -> Self {
        let expulsion = member.expulsion(today);
        Self {
            warning_flag: member.has_warning_flag(),
            id: member.id,
            nickname: member.nickname,
            joined_at: member.joined_at,
            last_participation_date: member.last_participation_date,
            warning_count: member.warning_count,
            status: member.status,
            source: member.source,
            expulsion_date: expulsion.expulsion_date(),
            days_left: expulsion.days_left(),
            expulsion_label: expulsion.label(),
            expulsion_passed: expulsion.is_passed(),
        }
    }
}

// ============================================================================
// Notice / Review Mappers
// ============================================================================

impl From<Notice> for NoticeResponse {
    fn from(n: Notice) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            date: n.date,
            created_at: n.created_at,
        }
    }
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            title: r.title,
            content: r.content,
            games: r.games,
            nickname: r.nickname,
            created_at: r.created_at,
        }
    }
}
