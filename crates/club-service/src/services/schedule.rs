//! Schedule service
//!
//! Reads and edits the weekly schedule and answers availability queries.
//! Every edit saves a whole new configuration; the newest one wins.

use chrono::NaiveDate;
use club_core::entities::ScheduleConfig;
use club_core::rules::{is_date_bookable, month_availability, slots_for_date};
use club_core::value_objects::{slot_label, Weekday};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AddSlotRequest, DayAvailabilityResponse, MonthAvailabilityResponse, RemoveSlotRequest,
    SaveScheduleRequest, ScheduleResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Schedule service
pub struct ScheduleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScheduleService<'a> {
    /// Create a new ScheduleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest configuration for read paths
    ///
    /// A store failure reads as "not configured yet" so the booking calendar
    /// degrades to "nothing bookable" instead of erroring.
    #[instrument(skip(self))]
    pub async fn current(&self) -> Option<ScheduleConfig> {
        match self.ctx.settings_repo().latest().await {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load schedule, treating as unconfigured");
                None
            }
        }
    }

    /// Get the schedule as shown on the admin settings page
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<ScheduleResponse> {
        Ok(self
            .current()
            .await
            .as_ref()
            .map(ScheduleResponse::from)
            .unwrap_or_else(ScheduleResponse::empty))
    }

    /// Replace the whole schedule
    #[instrument(skip(self, request))]
    pub async fn save(&self, request: SaveScheduleRequest) -> ServiceResult<ScheduleResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut config = ScheduleConfig::new();
        config.active_weekdays = request.active_weekdays.into_iter().collect();
        for (day, labels) in request.slots_by_weekday {
            for label in labels {
                let label = label.trim();
                if !label.is_empty() {
                    config.add_slot(day, label);
                }
            }
        }

        self.persist(config).await
    }

    /// Flip a weekday on or off
    #[instrument(skip(self))]
    pub async fn toggle_weekday(&self, day: Weekday) -> ServiceResult<ScheduleResponse> {
        let mut config = self.load_for_edit().await?;
        let active = config.toggle_weekday(day);
        info!(weekday = %day, active, "Weekday toggled");
        self.persist(config).await
    }

    /// Add an `HH:00 AM|PM` slot to a weekday. Adding an existing label
    /// leaves the schedule unchanged.
    #[instrument(skip(self, request), fields(weekday = %request.weekday))]
    pub async fn add_slot(&self, request: AddSlotRequest) -> ServiceResult<ScheduleResponse> {
        let label = slot_label(request.hour, request.meridiem)?;

        let mut config = self.load_for_edit().await?;
        if !config.add_slot(request.weekday, label.as_str()) {
            return Ok(ScheduleResponse::from(&config));
        }

        info!(slot = %label, "Slot added");
        self.persist(config).await
    }

    /// Remove a slot label from a weekday
    #[instrument(skip(self, request), fields(weekday = %request.weekday))]
    pub async fn remove_slot(&self, request: RemoveSlotRequest) -> ServiceResult<ScheduleResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut config = self.load_for_edit().await?;
        if !config.remove_slot(request.weekday, request.label.trim()) {
            return Err(ServiceError::not_found("Slot", request.label));
        }

        info!(slot = %request.label, "Slot removed");
        self.persist(config).await
    }

    /// Clear every weekday and slot
    #[instrument(skip(self))]
    pub async fn reset(&self) -> ServiceResult<ScheduleResponse> {
        let mut config = self.load_for_edit().await?;
        config.reset();
        info!("Schedule reset");
        self.persist(config).await
    }

    /// Bookable flag and slots for one date
    #[instrument(skip(self))]
    pub async fn availability(&self, date: NaiveDate) -> ServiceResult<DayAvailabilityResponse> {
        let config = self.current().await;
        let bookable = is_date_bookable(date, config.as_ref(), self.ctx.today());

        Ok(DayAvailabilityResponse {
            date,
            weekday: Weekday::of(date),
            bookable,
            slots: if bookable {
                slots_for_date(date, config.as_ref())
            } else {
                Vec::new()
            },
        })
    }

    /// Booking calendar for a month
    #[instrument(skip(self))]
    pub async fn month(&self, year: i32, month: u32) -> ServiceResult<MonthAvailabilityResponse> {
        if !(1..=12).contains(&month) {
            return Err(ServiceError::validation(format!("Invalid month: {month}")));
        }

        let config = self.current().await;
        let days = month_availability(year, month, config.as_ref(), self.ctx.today());
        if days.is_empty() {
            return Err(ServiceError::validation(format!("Invalid year: {year}")));
        }

        Ok(MonthAvailabilityResponse {
            year,
            month,
            days: days.into_iter().map(Into::into).collect(),
        })
    }

    /// Edits must start from the stored schedule; a failed read is an error
    /// here rather than an empty schedule that would overwrite it.
    async fn load_for_edit(&self) -> ServiceResult<ScheduleConfig> {
        Ok(self
            .ctx
            .settings_repo()
            .latest()
            .await?
            .unwrap_or_default())
    }

    async fn persist(&self, config: ScheduleConfig) -> ServiceResult<ScheduleResponse> {
        let saved = self.ctx.settings_repo().save(&config).await?;
        info!(settings_id = saved.id, "Schedule saved");
        Ok(ScheduleResponse::from(&saved))
    }
}
