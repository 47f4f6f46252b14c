//! Error handling utilities for repositories

use club_core::error::DomainError;
use club_core::value_objects::MeetingKey;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Check for a foreign key violation, e.g. attendance for a deleted meeting
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

pub fn reservation_not_found(id: i64) -> DomainError {
    DomainError::ReservationNotFound(id)
}

pub fn meeting_not_found(key: &MeetingKey) -> DomainError {
    DomainError::MeetingNotFound(key.clone())
}

pub fn member_not_found(id: i64) -> DomainError {
    DomainError::MemberNotFound(id)
}

pub fn review_not_found(id: i64) -> DomainError {
    DomainError::ReviewNotFound(id)
}
