//! Repository traits (ports) - define the interface for data access
//!
//! One trait per logical table. The domain layer defines what it needs, and
//! the infrastructure layer provides the implementation. Lookups that find
//! nothing return `None` or an empty list; mutations on a missing row return
//! the matching not-found error.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{
    Admin, AttendanceRecord, Meeting, Member, NewMeeting, NewMember, NewNotice, NewReservation,
    NewReview, Notice, Reservation, Review, ReviewUpdate, ScheduleConfig,
};
use crate::error::DomainError;
use crate::value_objects::MeetingKey;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Settings Repository
// ============================================================================

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Most recently saved schedule, if any
    async fn latest(&self) -> RepoResult<Option<ScheduleConfig>>;

    /// Store a new schedule row; it becomes the latest
    async fn save(&self, config: &ScheduleConfig) -> RepoResult<ScheduleConfig>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Reservation>>;

    /// All reservations, ordered by date then time
    async fn list_all(&self) -> RepoResult<Vec<Reservation>>;

    /// Reservations dated on or after `from`, ordered by date then time
    async fn list_from(&self, from: NaiveDate) -> RepoResult<Vec<Reservation>>;

    /// Reservations for one contact dated on or after `from`
    async fn find_by_contact(
        &self,
        name: &str,
        phone_number: &str,
        from: NaiveDate,
    ) -> RepoResult<Vec<Reservation>>;

    /// Phone number of the earliest reservation under `name`
    async fn first_phone_for_name(&self, name: &str) -> RepoResult<Option<String>>;

    async fn create(&self, reservation: &NewReservation) -> RepoResult<Reservation>;

    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Meeting Repository
// ============================================================================

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Meeting>>;

    async fn find_by_key(&self, key: &MeetingKey) -> RepoResult<Option<Meeting>>;

    /// First meeting dated on or after `from`, by date then time
    async fn next_from(&self, from: NaiveDate) -> RepoResult<Option<Meeting>>;

    /// Meetings dated on or before `until`, date descending, time ascending
    async fn list_until(&self, until: NaiveDate) -> RepoResult<Vec<Meeting>>;

    /// Every meeting, date descending, time ascending
    async fn list_all(&self) -> RepoResult<Vec<Meeting>>;

    /// Insert a meeting; a second meeting at the same key is a conflict
    async fn create(&self, meeting: &NewMeeting) -> RepoResult<Meeting>;

    async fn delete_by_key(&self, key: &MeetingKey) -> RepoResult<()>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Stored records for the given meetings
    async fn list_for_meetings(&self, meeting_ids: &[i64]) -> RepoResult<Vec<AttendanceRecord>>;

    /// Insert or overwrite the record at `(member_id, meeting_id)`
    async fn upsert(&self, record: &AttendanceRecord) -> RepoResult<()>;
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Active members ordered by id
    async fn list_active(&self) -> RepoResult<Vec<Member>>;

    /// All members ordered by id
    async fn list_all(&self) -> RepoResult<Vec<Member>>;

    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Move an active member to deactivated
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Raise `last_participation_date` to `date` if it is later
    async fn record_participation(&self, id: i64, date: NaiveDate) -> RepoResult<()>;
}

// ============================================================================
// Notice Repository
// ============================================================================

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    /// Newest notice by date
    async fn latest(&self) -> RepoResult<Option<Notice>>;

    /// All notices, newest first
    async fn list(&self) -> RepoResult<Vec<Notice>>;

    async fn create(&self, notice: &NewNotice) -> RepoResult<Notice>;
}

// ============================================================================
// Review Repository
// ============================================================================

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Review>>;

    /// All reviews, newest first
    async fn list(&self) -> RepoResult<Vec<Review>>;

    async fn create(&self, review: &NewReview, password_hash: &str) -> RepoResult<Review>;

    async fn update(&self, id: i64, update: &ReviewUpdate) -> RepoResult<Review>;

    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for edit/delete checks
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Admin>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}
