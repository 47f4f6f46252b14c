//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::{Datelike, Duration};
use integration_tests::{
    assert_error_code, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

/// Start a server, sign in a fresh admin, and install the every-day schedule
async fn admin_server() -> (TestServer, String) {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.sign_in_new_admin().await.expect("Failed to sign in");

    let response = server
        .put_auth("/api/v1/admin/schedule", &token, &SaveScheduleRequest::every_day())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    (server, token)
}

async fn book(server: &TestServer, request: &CreateReservationRequest) -> ReservationResponse {
    let response = server.post("/api/v1/reservations", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], json!(true));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_sign_in_and_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.sign_in_new_admin().await.unwrap();

    let response = server.get_auth("/api/v1/auth/session", &token).await.unwrap();
    let session: CurrentSessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(session.admin.email.starts_with("admin"));
    assert!(!session.session_id.is_empty());
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let email = integration_tests::seed_admin(&server.pool).await.unwrap();

    let request = SignInRequest {
        email,
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/v1/auth/sign-in", &request).await.unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_sign_out_revokes_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.sign_in_new_admin().await.unwrap();

    let response = server
        .post_auth("/api/v1/auth/sign-out", &token, &json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/admin/members", &token).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_admin_routes_require_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/admin/confirmations").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/attendance", "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Schedule & Availability Tests
// ============================================================================

#[tokio::test]
async fn test_availability_after_schedule_save() {
    if !check_test_env().await {
        return;
    }

    let (server, _token) = admin_server().await;
    let date = server.today() + Duration::days(3);

    let response = server
        .get(&format!("/api/v1/availability?date={date}"))
        .await
        .unwrap();
    let day: DayAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(day.bookable);
    assert_eq!(day.slots, TEST_SLOTS);

    let yesterday = server.today() - Duration::days(1);
    let response = server
        .get(&format!("/api/v1/availability?date={yesterday}"))
        .await
        .unwrap();
    let day: DayAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!day.bookable);
}

#[tokio::test]
async fn test_month_availability() {
    if !check_test_env().await {
        return;
    }

    let (server, _token) = admin_server().await;
    let response = server
        .get("/api/v1/availability/month?year=2024&month=2")
        .await
        .unwrap();
    let month: MonthAvailabilityResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(month.days.len(), 29);

    let response = server
        .get("/api/v1/availability/month?year=2024&month=13")
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_reservation_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let (server, _token) = admin_server().await;
    let request = CreateReservationRequest::unique(unique_future_date(server.today()));
    let created = book(&server, &request).await;
    assert_eq!(created.name, request.name);

    // Visible on the status board
    let response = server.get("/api/v1/reservations/status").await.unwrap();
    let groups: Vec<DateReservationsResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let group = groups.iter().find(|g| g.date == request.date).expect("date group");
    assert!(group.reservations.iter().any(|r| r.id == created.id));

    // Found by contact lookup
    let response = server
        .post("/api/v1/reservations/lookup", &request.contact())
        .await
        .unwrap();
    let mine: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, created.id);

    // Someone else cannot cancel it
    let stranger = ContactRequest {
        name: request.name.clone(),
        phone_number: "010-0000-0000".to_string(),
    };
    let response = server
        .delete_with_body(&format!("/api/v1/reservations/{}", created.id), &stranger)
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_RESERVATION_OWNER");

    // The owner can
    let response = server
        .delete_with_body(&format!("/api/v1/reservations/{}", created.id), &request.contact())
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .post("/api/v1/reservations/lookup", &request.contact())
        .await
        .unwrap();
    let mine: Vec<ReservationResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.is_empty());
}

#[tokio::test]
async fn test_reservation_rejects_unoffered_slot() {
    if !check_test_env().await {
        return;
    }

    let (server, _token) = admin_server().await;
    let mut request = CreateReservationRequest::unique(unique_future_date(server.today()));
    request.time = "11:00 PM".to_string();

    let response = server.post("/api/v1/reservations", &request).await.unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "SLOT_NOT_OFFERED");
}

#[tokio::test]
async fn test_same_day_cancellation_refused() {
    if !check_test_env().await {
        return;
    }

    let (server, _token) = admin_server().await;
    let request = CreateReservationRequest::unique(server.today());
    let created = book(&server, &request).await;

    let response = server
        .delete_with_body(&format!("/api/v1/reservations/{}", created.id), &request.contact())
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "SAME_DAY_CANCELLATION");
}

// ============================================================================
// Confirmation Tests
// ============================================================================

#[tokio::test]
async fn test_confirm_with_staged_place_and_unconfirm() {
    if !check_test_env().await {
        return;
    }

    let (server, token) = admin_server().await;
    let date = unique_future_date(server.today());
    let first = CreateReservationRequest::unique(date);
    let second = CreateReservationRequest::unique(date);
    book(&server, &first).await;
    book(&server, &second).await;

    // Unconfirmed on the board
    let response = server.get_auth("/api/v1/admin/confirmations", &token).await.unwrap();
    let board: Vec<BoardEntryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = board
        .iter()
        .find(|e| e.date == date && e.time == first.time)
        .expect("board entry");
    assert!(!entry.confirmed);
    assert!(entry.participants.contains(&first.name));
    assert!(entry.participants.contains(&second.name));

    // Stage a place, then confirm without one
    let stage = StagePlaceRequest {
        date,
        time: first.time.clone(),
        place: "보드게임 카페".to_string(),
    };
    let response = server
        .put_auth("/api/v1/admin/confirmations/place", &token, &stage)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let confirm = ConfirmMeetingRequest {
        date,
        time: first.time.clone(),
        place: None,
    };
    let response = server
        .post_auth("/api/v1/admin/confirmations", &token, &confirm)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(meeting.place, "보드게임 카페");
    assert!(meeting.participants.contains(&first.name));
    assert!(meeting.participants.contains(&second.name));

    // Confirming again returns the same meeting
    let response = server
        .post_auth("/api/v1/admin/confirmations", &token, &confirm)
        .await
        .unwrap();
    let again: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(again.id, meeting.id);

    let path = format!(
        "/api/v1/admin/confirmations?date={date}&time={}",
        first.time.replace(' ', "%20")
    );
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    let code = assert_error_code(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_MEETING");
}

#[tokio::test]
async fn test_confirm_rejects_today() {
    if !check_test_env().await {
        return;
    }

    let (server, token) = admin_server().await;
    let request = CreateReservationRequest::unique(server.today());
    book(&server, &request).await;

    let confirm = ConfirmMeetingRequest {
        date: request.date,
        time: request.time.clone(),
        place: None,
    };
    let response = server
        .post_auth("/api/v1/admin/confirmations", &token, &confirm)
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "NOT_CONFIRMABLE");
}

// ============================================================================
// Member & Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_member_add_and_deactivate() {
    if !check_test_env().await {
        return;
    }

    let (server, token) = admin_server().await;
    let request = AddMemberRequest::unique(None);
    let response = server
        .post_auth("/api/v1/admin/members", &token, &request)
        .await
        .unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(member.joined_at, Some(server.today()));
    // Three calendar months out, so 89 to 92 days depending on today
    let days_left = member.days_left.expect("joined today has a deadline");
    assert!((89..=92).contains(&days_left));
    assert_eq!(member.expulsion_label, format!("{days_left}일 남음"));

    let path = format!("/api/v1/admin/members/{}", member.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server.get_auth("/api/v1/admin/members", &token).await.unwrap();
    let active: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(active.iter().all(|m| m.id != member.id));

    let response = server.get_auth("/api/v1/admin/members/all", &token).await.unwrap();
    let all: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|m| m.id == member.id));
}

#[tokio::test]
async fn test_attendance_updates_participation() {
    if !check_test_env().await {
        return;
    }

    let (server, token) = admin_server().await;
    let date = unique_future_date(server.today());
    let reservation = CreateReservationRequest::unique(date);
    book(&server, &reservation).await;

    let confirm = ConfirmMeetingRequest {
        date,
        time: reservation.time.clone(),
        place: Some("2호점".to_string()),
    };
    let response = server
        .post_auth("/api/v1/admin/confirmations", &token, &confirm)
        .await
        .unwrap();
    let meeting: MeetingResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/admin/members", &token, &AddMemberRequest::unique(None))
        .await
        .unwrap();
    let member: MemberResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let set = SetAttendanceRequest {
        member_id: member.id,
        meeting_id: meeting.id,
        status: "attended".to_string(),
    };
    let response = server
        .put_auth("/api/v1/admin/attendance", &token, &set)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/v1/admin/members", &token).await.unwrap();
    let active: Vec<MemberResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = active.iter().find(|m| m.id == member.id).expect("member listed");
    assert_eq!(updated.last_participation_date, Some(date));

    let bad = SetAttendanceRequest {
        member_id: member.id,
        meeting_id: meeting.id,
        status: "maybe".to_string(),
    };
    let response = server
        .put_auth("/api/v1/admin/attendance", &token, &bad)
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_ATTENDANCE_STATUS");
}

// ============================================================================
// Notice & Review Tests
// ============================================================================

#[tokio::test]
async fn test_notice_create_and_latest() {
    if !check_test_env().await {
        return;
    }

    let (server, token) = admin_server().await;
    let request = CreateNoticeRequest {
        title: format!("공지 {}", unique_suffix()),
        content: "이번 주 모임 안내".to_string(),
    };
    let response = server
        .post_auth("/api/v1/admin/notices", &token, &request)
        .await
        .unwrap();
    let notice: NoticeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(notice.date, server.today());

    let response = server.get("/api/v1/notices").await.unwrap();
    let notices: Vec<NoticeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(notices.iter().any(|n| n.id == notice.id));

    // Anonymous visitors cannot post
    let response = server.post("/api/v1/admin/notices", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_review_pin_flow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateReviewRequest::unique("1234");
    let response = server.post("/api/v1/reviews", &request).await.unwrap();
    let review: ReviewResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/reviews/{}", review.id);

    let update = UpdateReviewRequest {
        title: "Edited".to_string(),
        content: "Edited content".to_string(),
        games: Vec::new(),
        password: "9999".to_string(),
    };
    let response = server.patch(&path, &update).await.unwrap();
    let code = assert_error_code(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "WRONG_REVIEW_PASSWORD");

    let update = UpdateReviewRequest {
        password: "1234".to_string(),
        ..update
    };
    let response = server.patch(&path, &update).await.unwrap();
    let edited: ReviewResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.title, "Edited");

    let response = server
        .delete_with_body(&path, &ReviewPasswordRequest { password: "1234".to_string() })
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .delete_with_body(&path, &ReviewPasswordRequest { password: "1234".to_string() })
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_review_rejects_non_numeric_pin() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/reviews", &CreateReviewRequest::unique("abcd"))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_next_meeting_is_null_or_upcoming() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/meetings/next").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    if !body.is_null() {
        let date = body["date"].as_str().expect("date field");
        let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        assert!(date >= server.today());
        assert!(date.year() >= 2000);
    }
}
