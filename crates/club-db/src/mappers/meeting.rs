//! Meeting entity <-> model mapper

use club_core::entities::Meeting;

use crate::models::MeetingModel;

impl From<MeetingModel> for Meeting {
    fn from(model: MeetingModel) -> Self {
        Meeting {
            id: model.id,
            date: model.date,
            time: model.time,
            place: model.place,
            participants: model.participants,
            created_at: model.created_at,
        }
    }
}
