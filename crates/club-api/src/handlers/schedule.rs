//! Schedule and availability handlers

use axum::{extract::State, Json};
use club_core::value_objects::Weekday;
use club_service::dto::{
    AddSlotRequest, DateQuery, DayAvailabilityResponse, MonthAvailabilityResponse, MonthQuery,
    RemoveSlotRequest, SaveScheduleRequest, ScheduleResponse,
};
use club_service::ScheduleService;

use crate::extractors::{AdminSession, ApiPath, ApiQuery, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Current weekly schedule
///
/// GET /schedule
pub async fn get_schedule(State(state): State<AppState>) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context()).get().await?;
    Ok(Json(response))
}

/// Whether a date is bookable and its slots
///
/// GET /availability?date=YYYY-MM-DD
pub async fn get_availability(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DateQuery>,
) -> ApiResult<Json<DayAvailabilityResponse>> {
    let response = ScheduleService::new(state.service_context())
        .availability(query.date)
        .await?;
    Ok(Json(response))
}

/// Booking calendar for a month
///
/// GET /availability/month?year=&month=
pub async fn get_month_availability(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<MonthAvailabilityResponse>> {
    let response = ScheduleService::new(state.service_context())
        .month(query.year, query.month)
        .await?;
    Ok(Json(response))
}

/// Replace the whole schedule
///
/// PUT /admin/schedule
pub async fn save_schedule(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<SaveScheduleRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context()).save(request).await?;
    Ok(Json(response))
}

/// Flip a weekday on or off
///
/// POST /admin/schedule/weekdays/:weekday/toggle
pub async fn toggle_weekday(
    State(state): State<AppState>,
    _admin: AdminSession,
    ApiPath(weekday): ApiPath<Weekday>,
) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context())
        .toggle_weekday(weekday)
        .await?;
    Ok(Json(response))
}

/// Add a slot to a weekday
///
/// POST /admin/schedule/slots
pub async fn add_slot(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<AddSlotRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context()).add_slot(request).await?;
    Ok(Json(response))
}

/// Remove a slot from a weekday
///
/// DELETE /admin/schedule/slots
pub async fn remove_slot(
    State(state): State<AppState>,
    _admin: AdminSession,
    ValidatedJson(request): ValidatedJson<RemoveSlotRequest>,
) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context())
        .remove_slot(request)
        .await?;
    Ok(Json(response))
}

/// Clear every weekday and slot
///
/// DELETE /admin/schedule
pub async fn reset_schedule(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> ApiResult<Json<ScheduleResponse>> {
    let response = ScheduleService::new(state.service_context()).reset().await?;
    Ok(Json(response))
}
