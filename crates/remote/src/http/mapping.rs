use serde::{Deserialize, Serialize};
use trivia_core::model::{
    Category, CategoryId, Difficulty, LeaderboardEntry, Question, ScoreRecord,
};

use crate::repository::RemoteError;

fn payload<E: core::fmt::Display>(e: E) -> RemoteError {
    RemoteError::Payload(e.to_string())
}

/// Category ids arrive as JSON numbers or strings depending on the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum WireCategoryId {
    Number(i64),
    Text(String),
}

impl From<WireCategoryId> for CategoryId {
    fn from(id: WireCategoryId) -> Self {
        match id {
            WireCategoryId::Number(n) => CategoryId::new(n.to_string()),
            WireCategoryId::Text(s) => CategoryId::new(s),
        }
    }
}

impl From<&CategoryId> for WireCategoryId {
    /// Echo numeric ids back as numbers so the service sees the type it issued.
    fn from(id: &CategoryId) -> Self {
        match id.as_str().parse::<i64>() {
            Ok(n) if n.to_string() == id.as_str() => WireCategoryId::Number(n),
            _ => WireCategoryId::Text(id.as_str().to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireCategory {
    id: WireCategoryId,
    name: String,
}

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category::new(wire.id.into(), wire.name)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

pub(crate) fn map_batch(batch: Vec<WireQuestion>) -> Result<Vec<Question>, RemoteError> {
    batch
        .into_iter()
        .enumerate()
        .map(|(index, wire)| {
            Question::new(wire.question, wire.correct_answer, wire.incorrect_answers)
                .map_err(|e| payload(format!("question {index}: {e}")))
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireLeaderboardEntry {
    username: String,
    score: u32,
}

impl From<WireLeaderboardEntry> for LeaderboardEntry {
    fn from(wire: WireLeaderboardEntry) -> Self {
        LeaderboardEntry {
            username: wire.username,
            score: wire.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct WireScoreRecord<'a> {
    username: &'a str,
    score: u32,
    category: WireCategoryId,
    difficulty: Difficulty,
}

impl<'a> From<&'a ScoreRecord> for WireScoreRecord<'a> {
    fn from(record: &'a ScoreRecord) -> Self {
        Self {
            username: record.username.as_str(),
            score: record.score,
            category: WireCategoryId::from(&record.category),
            difficulty: record.difficulty,
        }
    }
}
