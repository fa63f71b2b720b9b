use trivia_core::model::{Question, QuizSelection};

use super::mapping::{WireQuestion, map_batch};
use super::{HttpRepository, ensure_success, transport};
use crate::repository::{QuestionRepository, RemoteError};

#[async_trait::async_trait]
impl QuestionRepository for HttpRepository {
    async fn fetch_batch(&self, selection: &QuizSelection) -> Result<Vec<Question>, RemoteError> {
        let url = self.endpoint("quiz")?;
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
        let wire: Vec<WireQuestion> = ensure_success(response)?
            .json()
            .await
            .map_err(transport)?;
        map_batch(wire)
    }
}
