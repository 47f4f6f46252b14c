//! Entity to model mappers
//!
//! Conversions between domain entities (club-core) and database models.
//! Loosely typed columns (weekday lists, status strings, game lists) are
//! normalized here so nothing past this layer sees raw stored values.

mod attendance;
mod member;
mod meeting;
mod notice;
mod reservation;
mod review;
mod settings;

pub use review::games_from_json;
pub use settings::{weekdays_from_json, SettingsInsert};
