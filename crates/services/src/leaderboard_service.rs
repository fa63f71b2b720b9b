use std::sync::Arc;

use remote::LeaderboardRepository;
use trivia_core::model::{Leaderboard, QuizSelection};

use crate::error::LeaderboardError;

/// Fetches ranked scores for a category and difficulty.
#[derive(Clone)]
pub struct LeaderboardService {
    leaderboards: Arc<dyn LeaderboardRepository>,
}

impl LeaderboardService {
    #[must_use]
    pub fn new(leaderboards: Arc<dyn LeaderboardRepository>) -> Self {
        Self { leaderboards }
    }

    /// Fetch the leaderboard for `selection`, keeping the service's ranking.
    ///
    /// # Errors
    ///
    /// Returns `LeaderboardError::Remote` if the request fails.
    pub async fn leaderboard(
        &self,
        selection: &QuizSelection,
    ) -> Result<Leaderboard, LeaderboardError> {
        let board = self
            .leaderboards
            .fetch_leaderboard(selection)
            .await
            .inspect_err(|e| log::warn!("loading leaderboard failed: {e}"))?;
        Ok(board)
    }
}
