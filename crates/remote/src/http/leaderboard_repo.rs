use trivia_core::model::{Leaderboard, LeaderboardEntry, QuizSelection};

use super::mapping::WireLeaderboardEntry;
use super::{HttpRepository, ensure_success, transport};
use crate::repository::{LeaderboardRepository, RemoteError};

#[async_trait::async_trait]
impl LeaderboardRepository for HttpRepository {
    async fn fetch_leaderboard(
        &self,
        selection: &QuizSelection,
    ) -> Result<Leaderboard, RemoteError> {
        let url = self.endpoint("leaderboard")?;
        log::debug!(
            "GET {url} category={} difficulty={}",
            selection.category,
            selection.difficulty
        );
        let response = self
            .client
            .get(url)
            .query(&[
                ("category", selection.category.as_str()),
                ("difficulty", selection.difficulty.as_str()),
            ])
            .send()
            .await
            .map_err(transport)?;
        let wire: Vec<WireLeaderboardEntry> = ensure_success(response)?
            .json()
            .await
            .map_err(transport)?;
        Ok(Leaderboard::new(
            wire.into_iter().map(LeaderboardEntry::from).collect(),
        ))
    }
}
