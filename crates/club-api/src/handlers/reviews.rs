//! Review handlers
//!
//! Reviews are public; edits and deletes need the review's PIN.

use axum::{extract::State, Json};
use club_service::dto::{
    CreateReviewRequest, ReviewPasswordRequest, ReviewResponse, UpdateReviewRequest,
};
use club_service::ReviewService;

use crate::extractors::{ApiPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /reviews
pub async fn list_reviews(State(state): State<AppState>) -> ApiResult<Json<Vec<ReviewResponse>>> {
    let response = ReviewService::new(state.service_context()).list().await?;
    Ok(Json(response))
}

/// POST /reviews
pub async fn create_review(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> ApiResult<Created<Json<ReviewResponse>>> {
    let response = ReviewService::new(state.service_context()).create(request).await?;
    Ok(Created(Json(response)))
}

/// PATCH /reviews/:review_id
pub async fn update_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let response = ReviewService::new(state.service_context())
        .update(review_id, request)
        .await?;
    Ok(Json(response))
}

/// DELETE /reviews/:review_id
pub async fn delete_review(
    State(state): State<AppState>,
    ApiPath(review_id): ApiPath<i64>,
    ValidatedJson(request): ValidatedJson<ReviewPasswordRequest>,
) -> ApiResult<NoContent> {
    ReviewService::new(state.service_context())
        .delete(review_id, &request.password)
        .await?;
    Ok(NoContent)
}
