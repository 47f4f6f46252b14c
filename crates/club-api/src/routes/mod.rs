//! Route definitions
//!
//! All API routes organized by area and mounted under /api/v1. Routes under
//! `/admin` require an admin session; the extractor enforces it per handler.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    attendance, auth, confirmations, health, meetings, members, notices, reservations, reviews,
    schedule,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(admin_routes())
}

/// Admin sign-in and session routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-in", post(auth::sign_in))
        .route("/auth/sign-out", post(auth::sign_out))
        .route("/auth/session", get(auth::current_session))
}

/// Routes open to everyone
fn public_routes() -> Router<AppState> {
    Router::new()
        // Availability
        .route("/schedule", get(schedule::get_schedule))
        .route("/availability", get(schedule::get_availability))
        .route("/availability/month", get(schedule::get_month_availability))
        // Reservations
        .route("/reservations", post(reservations::create_reservation))
        .route("/reservations/status", get(reservations::get_status))
        .route("/reservations/lookup", post(reservations::lookup_reservations))
        .route(
            "/reservations/:reservation_id",
            delete(reservations::cancel_reservation),
        )
        // Meetings
        .route("/meetings", get(meetings::list_meetings))
        .route("/meetings/next", get(meetings::get_next_meeting))
        // Notices
        .route("/notices", get(notices::list_notices))
        .route("/notices/latest", get(notices::get_latest_notice))
        // Reviews
        .route("/reviews", get(reviews::list_reviews).post(reviews::create_review))
        .route(
            "/reviews/:review_id",
            patch(reviews::update_review).delete(reviews::delete_review),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Schedule editing
        .route(
            "/admin/schedule",
            put(schedule::save_schedule).delete(schedule::reset_schedule),
        )
        .route(
            "/admin/schedule/weekdays/:weekday/toggle",
            post(schedule::toggle_weekday),
        )
        .route(
            "/admin/schedule/slots",
            post(schedule::add_slot).delete(schedule::remove_slot),
        )
        // Confirmation board
        .route(
            "/admin/confirmations",
            get(confirmations::get_board)
                .post(confirmations::confirm_meeting)
                .delete(confirmations::unconfirm_meeting),
        )
        .route("/admin/confirmations/place", put(confirmations::stage_place))
        // Attendance
        .route(
            "/admin/attendance",
            get(attendance::get_matrix).put(attendance::set_attendance),
        )
        // Members
        .route(
            "/admin/members",
            get(members::list_active_members).post(members::add_member),
        )
        .route("/admin/members/all", get(members::list_all_members))
        .route("/admin/members/:member_id", delete(members::deactivate_member))
        // Notices
        .route("/admin/notices", post(notices::create_notice))
}
