//! Member service
//!
//! Roster management. Expulsion standing is derived on every read from the
//! member's dates and today's date.

use club_core::entities::NewMember;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{AddMemberRequest, MemberResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active members with their expulsion standing
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list_active().await?;
        let today = self.ctx.today();
        Ok(members
            .into_iter()
            .map(|m| MemberResponse::from_member(m, today))
            .collect())
    }

    /// Every member, deactivated ones included
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<MemberResponse>> {
        let members = self.ctx.member_repo().list_all().await?;
        let today = self.ctx.today();
        Ok(members
            .into_iter()
            .map(|m| MemberResponse::from_member(m, today))
            .collect())
    }

    /// Add a member; the join date defaults to today
    #[instrument(skip(self, request))]
    pub async fn add(&self, request: AddMemberRequest) -> ServiceResult<MemberResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let nickname = request.nickname.trim();
        if nickname.is_empty() {
            return Err(ServiceError::validation("Nickname is required"));
        }

        let today = self.ctx.today();
        let member = self
            .ctx
            .member_repo()
            .create(&NewMember {
                nickname: nickname.to_string(),
                joined_at: request.joined_at.unwrap_or(today),
                source: request.source,
            })
            .await?;

        info!(member_id = member.id, source = %request.source, "Member added");

        Ok(MemberResponse::from_member(member, today))
    }

    /// Deactivate a member. There is no way back.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, member_id: i64) -> ServiceResult<()> {
        self.ctx.member_repo().deactivate(member_id).await?;
        info!(member_id, "Member deactivated");
        Ok(())
    }
}
