//! Member entity <-> model mapper

use club_core::entities::{Admin, Member};
use club_core::value_objects::MemberStatus;
use tracing::warn;

use crate::models::{AdminModel, MemberModel};

impl From<MemberModel> for Member {
    fn from(model: MemberModel) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            warn!(member_id = model.id, status = %model.status, "Unknown member status");
            MemberStatus::Active
        });
        let source = model.source.as_deref().and_then(|s| s.parse().ok());

        Member {
            id: model.id,
            nickname: model.nickname,
            joined_at: model.joined_at,
            last_participation_date: model.last_participation_date,
            warning_count: model.warning,
            status,
            source,
            created_at: model.created_at,
        }
    }
}

impl From<AdminModel> for Admin {
    fn from(model: AdminModel) -> Self {
        Admin {
            id: model.id,
            email: model.email,
            created_at: model.created_at,
        }
    }
}
