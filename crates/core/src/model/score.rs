use thiserror::Error;

use crate::model::{CategoryId, Difficulty, QuizSelection};

const MAX_PLAYER_NAME_CHARS: usize = 64;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerNameError {
    #[error("player name is empty")]
    Empty,
    #[error("player name is too long ({len} chars, max {max})")]
    TooLong { len: usize, max: usize },
}

/// Username attached to a submitted score.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate and trim a raw name.
    ///
    /// # Errors
    ///
    /// Returns `PlayerNameError` if the trimmed name is empty or too long.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PlayerNameError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        let len = trimmed.chars().count();
        if len > MAX_PLAYER_NAME_CHARS {
            return Err(PlayerNameError::TooLong {
                len,
                max: MAX_PLAYER_NAME_CHARS,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Final result of one completed session, sent to the score service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub username: PlayerName,
    pub score: u32,
    pub category: CategoryId,
    pub difficulty: Difficulty,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(username: PlayerName, score: u32, selection: &QuizSelection) -> Self {
        Self {
            username,
            score,
            category: selection.category.clone(),
            difficulty: selection.difficulty,
        }
    }
}

/// One leaderboard row. Rank is not stored; it follows from position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: u32,
}

/// Leaderboard rows in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    #[must_use]
    pub fn new(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}
