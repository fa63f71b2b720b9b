use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use trivia_core::model::{
    Category, Leaderboard, LeaderboardEntry, Question, QuizSelection, ScoreRecord,
};

/// Errors surfaced by remote service adapters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("service responded with status {0}")]
    Status(u16),

    #[error("invalid payload: {0}")]
    Payload(String),
}

/// Category list used to populate the menu selector.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Fetch every category the service offers.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails or the body cannot be decoded.
    async fn list_categories(&self) -> Result<Vec<Category>, RemoteError>;
}

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch one batch of questions for the selection.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails or any question is invalid.
    async fn fetch_batch(&self, selection: &QuizSelection) -> Result<Vec<Question>, RemoteError>;
}

#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Submit a final score. Called at most once per completed session.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` on transport failure or a non-success status.
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), RemoteError>;
}

#[async_trait]
pub trait LeaderboardRepository: Send + Sync {
    /// Fetch the ranked leaderboard, already ordered by the service.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails or the body cannot be decoded.
    async fn fetch_leaderboard(&self, selection: &QuizSelection)
    -> Result<Leaderboard, RemoteError>;
}

/// One of the four service endpoints, used to inject failures in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    Quiz,
    Leaderboard,
    SaveScore,
}

#[derive(Default)]
struct InMemoryState {
    categories: Vec<Category>,
    batches: HashMap<QuizSelection, Vec<Question>>,
    leaderboards: HashMap<QuizSelection, Vec<LeaderboardEntry>>,
    submitted: Vec<ScoreRecord>,
    submit_attempts: usize,
    failing: HashSet<Endpoint>,
}

/// In-memory stand-in for the trivia service, for tests and offline demos.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, RemoteError> {
        self.state
            .lock()
            .map_err(|e| RemoteError::Connection(e.to_string()))
    }

    fn check(state: &InMemoryState, endpoint: Endpoint) -> Result<(), RemoteError> {
        if state.failing.contains(&endpoint) {
            return Err(RemoteError::Status(503));
        }
        Ok(())
    }

    /// Replace the category list.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn set_categories(&self, categories: Vec<Category>) -> Result<(), RemoteError> {
        self.lock()?.categories = categories;
        Ok(())
    }

    /// Register the batch served for a selection.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn set_batch(
        &self,
        selection: QuizSelection,
        questions: Vec<Question>,
    ) -> Result<(), RemoteError> {
        self.lock()?.batches.insert(selection, questions);
        Ok(())
    }

    /// Register the leaderboard served for a selection.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn set_leaderboard(
        &self,
        selection: QuizSelection,
        entries: Vec<LeaderboardEntry>,
    ) -> Result<(), RemoteError> {
        self.lock()?.leaderboards.insert(selection, entries);
        Ok(())
    }

    /// Make every subsequent call to `endpoint` fail with a 503.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn fail(&self, endpoint: Endpoint) -> Result<(), RemoteError> {
        self.lock()?.failing.insert(endpoint);
        Ok(())
    }

    /// Undo a previous `fail`.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn recover(&self, endpoint: Endpoint) -> Result<(), RemoteError> {
        self.lock()?.failing.remove(&endpoint);
        Ok(())
    }

    /// Score records accepted so far, in submission order.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn submitted_scores(&self) -> Result<Vec<ScoreRecord>, RemoteError> {
        Ok(self.lock()?.submitted.clone())
    }

    /// Number of submit calls, including failed ones.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Connection` if the state lock is poisoned.
    pub fn submit_attempts(&self) -> Result<usize, RemoteError> {
        Ok(self.lock()?.submit_attempts)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
        let guard = self.lock()?;
        Self::check(&guard, Endpoint::Categories)?;
        Ok(guard.categories.clone())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn fetch_batch(&self, selection: &QuizSelection) -> Result<Vec<Question>, RemoteError> {
        let guard = self.lock()?;
        Self::check(&guard, Endpoint::Quiz)?;
        Ok(guard.batches.get(selection).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), RemoteError> {
        let mut guard = self.lock()?;
        guard.submit_attempts += 1;
        Self::check(&guard, Endpoint::SaveScore)?;
        guard.submitted.push(record.clone());
        Ok(())
    }
}

#[async_trait]
impl LeaderboardRepository for InMemoryRepository {
    async fn fetch_leaderboard(
        &self,
        selection: &QuizSelection,
    ) -> Result<Leaderboard, RemoteError> {
        let guard = self.lock()?;
        Self::check(&guard, Endpoint::Leaderboard)?;
        let entries = guard.leaderboards.get(selection).cloned().unwrap_or_default();
        Ok(Leaderboard::new(entries))
    }
}

/// Aggregates the service endpoints behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Remote {
    pub categories: Arc<dyn CategoryRepository>,
    pub questions: Arc<dyn QuestionRepository>,
    pub scores: Arc<dyn ScoreRepository>,
    pub leaderboards: Arc<dyn LeaderboardRepository>,
}

impl Remote {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    /// Wrap an existing in-memory repository so callers keep a handle for seeding.
    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let categories: Arc<dyn CategoryRepository> = Arc::new(repo.clone());
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let scores: Arc<dyn ScoreRepository> = Arc::new(repo.clone());
        let leaderboards: Arc<dyn LeaderboardRepository> = Arc::new(repo);
        Self {
            categories,
            questions,
            scores,
            leaderboards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{CategoryId, Difficulty, PlayerName};

    fn selection() -> QuizSelection {
        QuizSelection::new(CategoryId::from(9), Difficulty::Easy)
    }

    #[tokio::test]
    async fn serves_seeded_batch_for_matching_selection_only() {
        let repo = InMemoryRepository::new();
        let q = Question::new("2+2?", "4", vec!["3".into()]).unwrap();
        repo.set_batch(selection(), vec![q.clone()]).unwrap();

        assert_eq!(repo.fetch_batch(&selection()).await.unwrap(), vec![q]);

        let other = QuizSelection::new(CategoryId::from(9), Difficulty::Hard);
        assert!(repo.fetch_batch(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failing_submit_is_counted_but_not_recorded() {
        let repo = InMemoryRepository::new();
        repo.fail(Endpoint::SaveScore).unwrap();
        let record = ScoreRecord::new(PlayerName::new("amy").unwrap(), 2, &selection());

        let err = repo.submit_score(&record).await.unwrap_err();
        assert_eq!(err, RemoteError::Status(503));
        assert_eq!(repo.submit_attempts().unwrap(), 1);
        assert!(repo.submitted_scores().unwrap().is_empty());

        repo.recover(Endpoint::SaveScore).unwrap();
        repo.submit_score(&record).await.unwrap();
        assert_eq!(repo.submitted_scores().unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn leaderboard_keeps_seeded_order() {
        let repo = InMemoryRepository::new();
        repo.set_leaderboard(
            selection(),
            vec![
                LeaderboardEntry { username: "b".into(), score: 3 },
                LeaderboardEntry { username: "a".into(), score: 5 },
            ],
        )
        .unwrap();

        let board = repo.fetch_leaderboard(&selection()).await.unwrap();
        let names: Vec<_> = board.entries().iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
