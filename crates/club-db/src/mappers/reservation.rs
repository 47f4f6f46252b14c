//! Reservation entity <-> model mapper

use club_core::entities::Reservation;

use crate::models::ReservationModel;

impl From<ReservationModel> for Reservation {
    fn from(model: ReservationModel) -> Self {
        Reservation {
            id: model.id,
            date: model.date,
            time: model.time,
            name: model.name,
            phone_number: model.phone_number,
            created_at: model.created_at,
        }
    }
}
