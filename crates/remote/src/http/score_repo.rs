use trivia_core::model::ScoreRecord;

use super::mapping::WireScoreRecord;
use super::{HttpRepository, ensure_success, transport};
use crate::repository::{RemoteError, ScoreRepository};

#[async_trait::async_trait]
impl ScoreRepository for HttpRepository {
    async fn submit_score(&self, record: &ScoreRecord) -> Result<(), RemoteError> {
        let url = self.endpoint("save-score")?;
        log::debug!("POST {url} score={}", record.score);
        let response = self
            .client
            .post(url)
            .json(&WireScoreRecord::from(record))
            .send()
            .await
            .map_err(transport)?;
        // Only the status matters; the body is not part of the contract.
        ensure_success(response)?;
        Ok(())
    }
}
