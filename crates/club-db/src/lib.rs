//! # club-db
//!
//! Database layer implementing the repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `club-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers (the weekday normalization boundary)
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::{create_pool, run_migrations, DatabaseConfig, PgReservationRepository};
//! use club_core::traits::ReservationRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgres://localhost/club", 10, 1);
//!     let pool = create_pool(&config).await?;
//!     run_migrations(&pool).await?;
//!     let reservations = PgReservationRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAdminRepository, PgAttendanceRepository, PgMeetingRepository, PgMemberRepository,
    PgNoticeRepository, PgReservationRepository, PgReviewRepository, PgSettingsRepository,
};
