//! Reservation grouping and meeting confirmation
//!
//! Reservations sharing a (date, time) key form one candidate meeting. A key
//! is either unconfirmed (no meeting row) or confirmed (a meeting row
//! exists). Only keys dated strictly after today appear on the board, which
//! is stricter than the same-day rule used for booking.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::entities::{Meeting, NewMeeting, Reservation};
use crate::value_objects::MeetingKey;

/// Venue used when no place was entered for a meeting
pub const DEFAULT_VENUE: &str = "데블다이스 1호점";

/// Reservations sharing one meeting key, in fetch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationGroup {
    pub key: MeetingKey,
    pub reservations: Vec<Reservation>,
}

impl ReservationGroup {
    pub fn participants(&self) -> Vec<String> {
        self.reservations.iter().map(|r| r.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }
}

/// Reservations sharing one date, in fetch order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub reservations: Vec<Reservation>,
}

/// Group by meeting key. Groups appear in first-seen order and keep the
/// relative order of their reservations.
pub fn group_by_key<I>(reservations: I) -> Vec<ReservationGroup>
where
    I: IntoIterator<Item = Reservation>,
{
    let mut index: HashMap<MeetingKey, usize> = HashMap::new();
    let mut groups: Vec<ReservationGroup> = Vec::new();

    for reservation in reservations {
        let key = reservation.key();
        if let Some(&i) = index.get(&key) {
            groups[i].reservations.push(reservation);
        } else {
            index.insert(key.clone(), groups.len());
            groups.push(ReservationGroup {
                key,
                reservations: vec![reservation],
            });
        }
    }

    groups
}

/// Group by date with the same stability guarantees as [`group_by_key`]
pub fn group_by_date<I>(reservations: I) -> Vec<DateGroup>
where
    I: IntoIterator<Item = Reservation>,
{
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<DateGroup> = Vec::new();

    for reservation in reservations {
        if let Some(&i) = index.get(&reservation.date) {
            groups[i].reservations.push(reservation);
        } else {
            index.insert(reservation.date, groups.len());
            groups.push(DateGroup {
                date: reservation.date,
                reservations: vec![reservation],
            });
        }
    }

    groups
}

/// A key can be confirmed only when its date is strictly after today
#[inline]
pub fn is_confirmable(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// First non-blank of the explicit place, the staged place, the default venue
pub fn resolve_place(explicit: Option<&str>, staged: Option<&str>, default_venue: &str) -> String {
    explicit
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .or_else(|| staged.map(str::trim).filter(|p| !p.is_empty()))
        .unwrap_or(default_venue)
        .to_string()
}

/// Snapshot the names of the reservations at `key` into a new meeting
pub fn snapshot_meeting(key: &MeetingKey, place: String, reservations: &[Reservation]) -> NewMeeting {
    NewMeeting {
        date: key.date,
        time: key.time.clone(),
        place,
        participants: reservations
            .iter()
            .filter(|r| r.matches(key))
            .map(|r| r.name.clone())
            .collect(),
    }
}

/// Confirmation state of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    Unconfirmed,
    Confirmed,
}

/// One row of the admin confirmation board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub key: MeetingKey,
    /// Names of the current reservations at the key
    pub participants: Vec<String>,
    /// Saved place when confirmed, otherwise staged place or default venue
    pub place: String,
    pub state: ConfirmationState,
    pub meeting_id: Option<i64>,
}

/// Build the confirmation board from the fetched reservations and meetings
///
/// `staged` looks up an unsaved place edit for a key.
pub fn build_board<F>(
    reservations: Vec<Reservation>,
    meetings: &[Meeting],
    today: NaiveDate,
    default_venue: &str,
    staged: F,
) -> Vec<BoardEntry>
where
    F: Fn(&MeetingKey) -> Option<String>,
{
    let confirmed: HashMap<MeetingKey, &Meeting> = meetings.iter().map(|m| (m.key(), m)).collect();

    let eligible = reservations
        .into_iter()
        .filter(|r| is_confirmable(r.date, today));

    group_by_key(eligible)
        .into_iter()
        .map(|group| {
            let participants = group.participants();
            match confirmed.get(&group.key) {
                Some(meeting) => BoardEntry {
                    place: resolve_place(Some(&meeting.place), None, default_venue),
                    key: group.key,
                    participants,
                    state: ConfirmationState::Confirmed,
                    meeting_id: Some(meeting.id),
                },
                None => BoardEntry {
                    place: resolve_place(None, staged(&group.key).as_deref(), default_venue),
                    key: group.key,
                    participants,
                    state: ConfirmationState::Unconfirmed,
                    meeting_id: None,
                },
            }
        })
        .collect()
}
