//! Axum extractors for request handling
//!
//! Custom extractors for admin sessions, validation, and path/query parsing.

mod auth;
mod path;
mod validated;

pub use auth::AdminSession;
pub use path::{ApiPath, ApiQuery};
pub use validated::ValidatedJson;
