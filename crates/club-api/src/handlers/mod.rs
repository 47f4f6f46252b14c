//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod attendance;
pub mod auth;
pub mod confirmations;
pub mod health;
pub mod meetings;
pub mod members;
pub mod notices;
pub mod reservations;
pub mod reviews;
pub mod schedule;
