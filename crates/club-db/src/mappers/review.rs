//! Review entity <-> model mapper

use club_core::entities::{PlayedGame, Review};
use serde_json::Value;

use crate::models::ReviewModel;

/// Read a stored game list; bare strings become games without a memo
pub fn games_from_json(value: &Value) -> Vec<PlayedGame> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::String(name) => Some(PlayedGame {
                name: name.clone(),
                memo: String::new(),
            }),
            other => serde_json::from_value(other.clone()).ok(),
        })
        .collect()
}

impl From<ReviewModel> for Review {
    fn from(model: ReviewModel) -> Self {
        Review {
            id: model.id,
            title: model.title,
            content: model.content,
            games: games_from_json(&model.games),
            nickname: model.nickname,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_games_from_objects_and_strings() {
        let games = games_from_json(&json!([
            {"name": "Azul", "memo": "close game"},
            "Splendor",
            {"name": "Catan"},
            42
        ]));
        assert_eq!(games.len(), 3);
        assert_eq!(games[0].memo, "close game");
        assert_eq!(games[1].name, "Splendor");
        assert_eq!(games[2].memo, "");
    }

    #[test]
    fn test_games_from_non_array() {
        assert!(games_from_json(&json!(null)).is_empty());
    }
}
