//! Service context - dependency container for services
//!
//! Holds the repositories, the clock, club settings, and the in-memory
//! state (admin sessions, staged places) every workflow runs against.

use std::sync::Arc;

use chrono::NaiveDate;
use club_common::auth::JwtService;
use club_common::ClubConfig;
use club_core::traits::{
    AdminRepository, AttendanceRepository, Clock, MeetingRepository, MemberRepository,
    NoticeRepository, ReservationRepository, ReviewRepository, SettingsRepository,
};

use super::error::{ServiceError, ServiceResult};
use super::session::SessionStore;
use super::staging::PlaceStaging;

/// Service context containing all dependencies
///
/// Cheap to clone; every field is shared.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    settings_repo: Arc<dyn SettingsRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    meeting_repo: Arc<dyn MeetingRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    member_repo: Arc<dyn MemberRepository>,
    notice_repo: Arc<dyn NoticeRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    admin_repo: Arc<dyn AdminRepository>,

    // Services
    jwt_service: Arc<JwtService>,
    clock: Arc<dyn Clock>,
    club: Arc<ClubConfig>,

    // In-memory state
    sessions: SessionStore,
    staged_places: PlaceStaging,
}

impl ServiceContext {
    /// Start building a context
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the settings repository
    pub fn settings_repo(&self) -> &dyn SettingsRepository {
        self.settings_repo.as_ref()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    /// Get the meeting repository
    pub fn meeting_repo(&self) -> &dyn MeetingRepository {
        self.meeting_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the notice repository
    pub fn notice_repo(&self) -> &dyn NoticeRepository {
        self.notice_repo.as_ref()
    }

    /// Get the review repository
    pub fn review_repo(&self) -> &dyn ReviewRepository {
        self.review_repo.as_ref()
    }

    /// Get the admin repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Today in the club's timezone
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Venue used when a meeting is confirmed without a place
    pub fn default_venue(&self) -> &str {
        &self.club.default_venue
    }

    /// Phone value that unlocks any name's reservations
    pub fn master_key(&self) -> Option<&str> {
        self.club.master_key.as_deref()
    }

    // === In-memory state ===

    /// Get the admin session registry
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Get the staged place map
    pub fn staged_places(&self) -> &PlaceStaging {
        &self.staged_places
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("today", &self.today())
            .field("default_venue", &self.club.default_venue)
            .field("sessions", &self.sessions.len())
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    settings_repo: Option<Arc<dyn SettingsRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    meeting_repo: Option<Arc<dyn MeetingRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    notice_repo: Option<Arc<dyn NoticeRepository>>,
    review_repo: Option<Arc<dyn ReviewRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    clock: Option<Arc<dyn Clock>>,
    club: Option<ClubConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn settings_repo(mut self, repo: Arc<dyn SettingsRepository>) -> Self {
        self.settings_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn meeting_repo(mut self, repo: Arc<dyn MeetingRepository>) -> Self {
        self.meeting_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn notice_repo(mut self, repo: Arc<dyn NoticeRepository>) -> Self {
        self.notice_repo = Some(repo);
        self
    }

    pub fn review_repo(mut self, repo: Arc<dyn ReviewRepository>) -> Self {
        self.review_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Club settings; defaults apply when not set
    pub fn club(mut self, club: ClubConfig) -> Self {
        self.club = Some(club);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            settings_repo: self
                .settings_repo
                .ok_or_else(|| ServiceError::validation("settings_repo is required"))?,
            reservation_repo: self
                .reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            meeting_repo: self
                .meeting_repo
                .ok_or_else(|| ServiceError::validation("meeting_repo is required"))?,
            attendance_repo: self
                .attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            member_repo: self
                .member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            notice_repo: self
                .notice_repo
                .ok_or_else(|| ServiceError::validation("notice_repo is required"))?,
            review_repo: self
                .review_repo
                .ok_or_else(|| ServiceError::validation("review_repo is required"))?,
            admin_repo: self
                .admin_repo
                .ok_or_else(|| ServiceError::validation("admin_repo is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            clock: self
                .clock
                .ok_or_else(|| ServiceError::validation("clock is required"))?,
            club: Arc::new(self.club.unwrap_or_default()),
            sessions: SessionStore::new(),
            staged_places: PlaceStaging::new(),
        })
    }
}
