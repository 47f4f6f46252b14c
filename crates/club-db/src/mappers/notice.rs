//! Notice entity <-> model mapper

use club_core::entities::Notice;

use crate::models::NoticeModel;

impl From<NoticeModel> for Notice {
    fn from(model: NoticeModel) -> Self {
        Notice {
            id: model.id,
            title: model.title,
            content: model.content,
            date: model.date,
            created_at: model.created_at,
        }
    }
}
