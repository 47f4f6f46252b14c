//! Review entity - a play report written by a visitor

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A game played during the session and a short note about it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedGame {
    pub name: String,
    #[serde(default)]
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Names of the games mentioned, blanks skipped
    pub fn game_names(&self) -> Vec<&str> {
        self.games
            .iter()
            .map(|g| g.name.trim())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
    pub nickname: String,
}

/// Editable part of a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewUpdate {
    pub title: String,
    pub content: String,
    pub games: Vec<PlayedGame>,
}
