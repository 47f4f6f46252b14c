//! Notice service

use club_core::entities::NewNotice;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateNoticeRequest, NoticeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Notice service
pub struct NoticeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoticeService<'a> {
    /// Create a new NoticeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn latest(&self) -> ServiceResult<Option<NoticeResponse>> {
        Ok(self.ctx.notice_repo().latest().await?.map(Into::into))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<NoticeResponse>> {
        let notices = self.ctx.notice_repo().list().await?;
        Ok(notices.into_iter().map(Into::into).collect())
    }

    /// Post a notice dated today
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateNoticeRequest) -> ServiceResult<NoticeResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let title = request.title.trim();
        let content = request.content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(ServiceError::validation("Title and content are required"));
        }

        let notice = self
            .ctx
            .notice_repo()
            .create(&NewNotice {
                title: title.to_string(),
                content: content.to_string(),
                date: self.ctx.today(),
            })
            .await?;

        info!(notice_id = notice.id, "Notice created");

        Ok(notice.into())
    }
}
