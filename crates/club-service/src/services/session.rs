//! Admin session registry
//!
//! A signed token is only honored while its session id is registered here.
//! Signing out removes the entry, so the token stops working before it
//! expires.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// A signed-in admin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub session_id: String,
    pub admin_id: i64,
    pub email: String,
    pub issued_at: DateTime<Utc>,
    /// Unix timestamp at which the token expires
    pub expires_at: i64,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() > self.expires_at
    }
}

/// Concurrent map of live sessions, keyed by session id
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<DashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, session: Session) {
        self.sessions.insert(session.session_id.clone(), session);
    }

    pub fn get(&self, session_id: &str) -> Option<Session> {
        self.sessions.get(session_id).map(|entry| entry.value().clone())
    }

    /// Remove a session, returning it if it was live
    pub fn remove(&self, session_id: &str) -> Option<Session> {
        self.sessions.remove(session_id).map(|(_, session)| session)
    }

    /// Drop every expired session; returns how many were removed
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now));
        before - self.sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
