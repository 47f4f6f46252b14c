//! In-memory store and context helpers for service tests

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;

use club_common::auth::{hash_password, JwtService};
use club_common::ClubConfig;
use club_core::entities::{
    Admin, AttendanceRecord, Meeting, Member, NewMeeting, NewMember, NewNotice, NewReservation,
    NewReview, Notice, Reservation, Review, ReviewUpdate, ScheduleConfig,
};
use club_core::traits::{
    AdminRepository, AttendanceRepository, FixedClock, MeetingRepository, MemberRepository,
    NoticeRepository, RepoResult, ReservationRepository, ReviewRepository, SettingsRepository,
};
use club_core::value_objects::{AttendanceStatus, MeetingKey, MemberStatus};
use club_core::DomainError;

use super::context::ServiceContext;

#[derive(Default)]
struct State {
    next_id: i64,
    settings: Vec<ScheduleConfig>,
    reservations: Vec<Reservation>,
    meetings: Vec<Meeting>,
    attendance: HashMap<(i64, i64), AttendanceStatus>,
    members: Vec<Member>,
    notices: Vec<Notice>,
    reviews: Vec<(Review, String)>,
    admins: Vec<(Admin, String)>,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// One store backing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_admin(&self, email: &str, password: &str) -> i64 {
        let hash = hash_password(password).unwrap();
        let mut state = self.state.lock();
        let id = state.id();
        state.admins.push((
            Admin {
                id,
                email: email.to_string(),
                created_at: Utc::now(),
            },
            hash,
        ));
        id
    }

    pub fn add_reservation(&self, date: NaiveDate, time: &str, name: &str, phone: &str) -> i64 {
        let mut state = self.state.lock();
        let id = state.id();
        state.reservations.push(Reservation {
            id,
            date,
            time: time.to_string(),
            name: name.to_string(),
            phone_number: phone.to_string(),
            created_at: Utc::now(),
        });
        id
    }

    pub fn add_member(&self, nickname: &str, joined_at: NaiveDate) -> i64 {
        let mut state = self.state.lock();
        let id = state.id();
        state.members.push(Member {
            id,
            nickname: nickname.to_string(),
            joined_at: Some(joined_at),
            last_participation_date: None,
            warning_count: 0,
            status: MemberStatus::Active,
            source: None,
            created_at: Utc::now(),
        });
        id
    }

    pub fn reservation_count(&self) -> usize {
        self.state.lock().reservations.len()
    }

    pub fn meeting_count(&self) -> usize {
        self.state.lock().meetings.len()
    }

    pub fn attendance_count(&self) -> usize {
        self.state.lock().attendance.len()
    }

    pub fn member(&self, id: i64) -> Option<Member> {
        self.state.lock().members.iter().find(|m| m.id == id).cloned()
    }
}

#[async_trait]
impl SettingsRepository for MemoryStore {
    async fn latest(&self) -> RepoResult<Option<ScheduleConfig>> {
        Ok(self.state.lock().settings.last().cloned())
    }

    async fn save(&self, config: &ScheduleConfig) -> RepoResult<ScheduleConfig> {
        let mut state = self.state.lock();
        let mut saved = config.clone();
        saved.id = state.id();
        saved.created_at = Utc::now();
        state.settings.push(saved.clone());
        Ok(saved)
    }
}

fn sorted_reservations(mut list: Vec<Reservation>) -> Vec<Reservation> {
    list.sort_by(|a, b| (a.date, &a.time, a.id).cmp(&(b.date, &b.time, b.id)));
    list
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>> {
        Ok(self.state.lock().reservations.iter().find(|r| r.id == id).cloned())
    }

    async fn list_all(&self) -> RepoResult<Vec<Reservation>> {
        Ok(sorted_reservations(self.state.lock().reservations.clone()))
    }

    async fn list_from(&self, from: NaiveDate) -> RepoResult<Vec<Reservation>> {
        let state = self.state.lock();
        Ok(sorted_reservations(
            state.reservations.iter().filter(|r| r.date >= from).cloned().collect(),
        ))
    }

    async fn find_by_contact(
        &self,
        name: &str,
        phone_number: &str,
        from: NaiveDate,
    ) -> RepoResult<Vec<Reservation>> {
        let state = self.state.lock();
        Ok(sorted_reservations(
            state
                .reservations
                .iter()
                .filter(|r| r.name == name && r.phone_number == phone_number && r.date >= from)
                .cloned()
                .collect(),
        ))
    }

    async fn first_phone_for_name(&self, name: &str) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state
            .reservations
            .iter()
            .filter(|r| r.name == name)
            .min_by_key(|r| r.id)
            .map(|r| r.phone_number.clone()))
    }

    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation> {
        let mut state = self.state.lock();
        let created = Reservation {
            id: state.id(),
            date: reservation.date,
            time: reservation.time.clone(),
            name: reservation.name.clone(),
            phone_number: reservation.phone_number.clone(),
            created_at: Utc::now(),
        };
        state.reservations.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.reservations.len();
        state.reservations.retain(|r| r.id != id);
        if state.reservations.len() == before {
            return Err(DomainError::ReservationNotFound(id));
        }
        Ok(())
    }
}

#[async_trait]
impl MeetingRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Meeting>> {
        Ok(self.state.lock().meetings.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_key(&self, key: &MeetingKey) -> RepoResult<Option<Meeting>> {
        Ok(self.state.lock().meetings.iter().find(|m| &m.key() == key).cloned())
    }

    async fn next_from(&self, from: NaiveDate) -> RepoResult<Option<Meeting>> {
        let state = self.state.lock();
        Ok(state
            .meetings
            .iter()
            .filter(|m| m.date >= from)
            .min_by(|a, b| (a.date, &a.time).cmp(&(b.date, &b.time)))
            .cloned())
    }

    async fn list_until(&self, until: NaiveDate) -> RepoResult<Vec<Meeting>> {
        let state = self.state.lock();
        let mut list: Vec<Meeting> =
            state.meetings.iter().filter(|m| m.date <= until).cloned().collect();
        list.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.time.cmp(&b.time)));
        Ok(list)
    }

    async fn list_all(&self) -> RepoResult<Vec<Meeting>> {
        let mut list = self.state.lock().meetings.clone();
        list.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.time.cmp(&b.time)));
        Ok(list)
    }

    async fn create(&self, meeting: &NewMeeting) -> RepoResult<Meeting> {
        let mut state = self.state.lock();
        if state.meetings.iter().any(|m| m.key() == meeting.key()) {
            return Err(DomainError::MeetingAlreadyConfirmed(meeting.key()));
        }
        let created = Meeting {
            id: state.id(),
            date: meeting.date,
            time: meeting.time.clone(),
            place: meeting.place.clone(),
            participants: meeting.participants.clone(),
            created_at: Utc::now(),
        };
        state.meetings.push(created.clone());
        Ok(created)
    }

    async fn delete_by_key(&self, key: &MeetingKey) -> RepoResult<()> {
        let mut state = self.state.lock();
        let Some(meeting_id) = state.meetings.iter().find(|m| &m.key() == key).map(|m| m.id) else {
            return Err(DomainError::MeetingNotFound(key.clone()));
        };
        state.meetings.retain(|m| m.id != meeting_id);
        state.attendance.retain(|(_, meeting), _| *meeting != meeting_id);
        Ok(())
    }
}

#[async_trait]
impl AttendanceRepository for MemoryStore {
    async fn list_for_meetings(&self, meeting_ids: &[i64]) -> RepoResult<Vec<AttendanceRecord>> {
        let state = self.state.lock();
        Ok(state
            .attendance
            .iter()
            .filter(|((_, meeting), _)| meeting_ids.contains(meeting))
            .map(|(&(member, meeting), &status)| AttendanceRecord::new(member, meeting, status))
            .collect())
    }

    async fn upsert(&self, record: &AttendanceRecord) -> RepoResult<()> {
        self.state.lock().attendance.insert(record.key(), record.status);
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        Ok(self.member(id))
    }

    async fn list_active(&self) -> RepoResult<Vec<Member>> {
        let state = self.state.lock();
        Ok(state.members.iter().filter(|m| m.is_active()).cloned().collect())
    }

    async fn list_all(&self) -> RepoResult<Vec<Member>> {
        Ok(self.state.lock().members.clone())
    }

    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let mut state = self.state.lock();
        let created = Member {
            id: state.id(),
            nickname: member.nickname.clone(),
            joined_at: Some(member.joined_at),
            last_participation_date: None,
            warning_count: 0,
            status: MemberStatus::Active,
            source: Some(member.source),
            created_at: Utc::now(),
        };
        state.members.push(created.clone());
        Ok(created)
    }

    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        let member = state
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MemberNotFound(id))?;
        if !member.is_active() {
            return Err(DomainError::MemberAlreadyDeactivated(id));
        }
        member.status = MemberStatus::Deactivated;
        Ok(())
    }

    async fn record_participation(&self, id: i64, date: NaiveDate) -> RepoResult<()> {
        let mut state = self.state.lock();
        let member = state
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::MemberNotFound(id))?;
        member.last_participation_date =
            Some(member.last_participation_date.map_or(date, |d| d.max(date)));
        Ok(())
    }
}

#[async_trait]
impl NoticeRepository for MemoryStore {
    async fn latest(&self) -> RepoResult<Option<Notice>> {
        Ok(NoticeRepository::list(self).await?.into_iter().next())
    }

    async fn list(&self) -> RepoResult<Vec<Notice>> {
        let mut list = self.state.lock().notices.clone();
        list.sort_by(|a, b| (b.date, b.id).cmp(&(a.date, a.id)));
        Ok(list)
    }

    async fn create(&self, notice: &NewNotice) -> RepoResult<Notice> {
        let mut state = self.state.lock();
        let created = Notice {
            id: state.id(),
            title: notice.title.clone(),
            content: notice.content.clone(),
            date: notice.date,
            created_at: Utc::now(),
        };
        state.notices.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>> {
        let state = self.state.lock();
        Ok(state.reviews.iter().find(|(r, _)| r.id == id).map(|(r, _)| r.clone()))
    }

    async fn list(&self) -> RepoResult<Vec<Review>> {
        let state = self.state.lock();
        Ok(state.reviews.iter().rev().map(|(r, _)| r.clone()).collect())
    }

    async fn create(&self, review: &NewReview, password_hash: &str) -> RepoResult<Review> {
        let mut state = self.state.lock();
        let created = Review {
            id: state.id(),
            title: review.title.clone(),
            content: review.content.clone(),
            games: review.games.clone(),
            nickname: review.nickname.clone(),
            created_at: Utc::now(),
        };
        state.reviews.push((created.clone(), password_hash.to_string()));
        Ok(created)
    }

    async fn update(&self, id: i64, update: &ReviewUpdate) -> RepoResult<Review> {
        let mut state = self.state.lock();
        let (review, _) = state
            .reviews
            .iter_mut()
            .find(|(r, _)| r.id == id)
            .ok_or(DomainError::ReviewNotFound(id))?;
        review.title = update.title.clone();
        review.content = update.content.clone();
        review.games = update.games.clone();
        Ok(review.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut state = self.state.lock();
        let before = state.reviews.len();
        state.reviews.retain(|(r, _)| r.id != id);
        if state.reviews.len() == before {
            return Err(DomainError::ReviewNotFound(id));
        }
        Ok(())
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state.reviews.iter().find(|(r, _)| r.id == id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl AdminRepository for MemoryStore {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Admin>> {
        let state = self.state.lock();
        Ok(state.admins.iter().find(|(a, _)| a.id == id).map(|(a, _)| a.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let state = self.state.lock();
        Ok(state
            .admins
            .iter()
            .find(|(a, _)| a.email.eq_ignore_ascii_case(email))
            .map(|(a, _)| a.clone()))
    }

    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let state = self.state.lock();
        Ok(state.admins.iter().find(|(a, _)| a.id == id).map(|(_, h)| h.clone()))
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Context over `store` with the clock pinned to `today`
pub fn context(store: &Arc<MemoryStore>, today: NaiveDate) -> ServiceContext {
    context_with_club(store, today, ClubConfig::default())
}

pub fn context_with_club(
    store: &Arc<MemoryStore>,
    today: NaiveDate,
    club: ClubConfig,
) -> ServiceContext {
    ServiceContext::builder()
        .settings_repo(store.clone())
        .reservation_repo(store.clone())
        .meeting_repo(store.clone())
        .attendance_repo(store.clone())
        .member_repo(store.clone())
        .notice_repo(store.clone())
        .review_repo(store.clone())
        .admin_repo(store.clone())
        .jwt_service(Arc::new(JwtService::new("test-secret-key-for-services", 3600)))
        .clock(Arc::new(FixedClock::new(today)))
        .club(club)
        .build()
        .unwrap()
}
