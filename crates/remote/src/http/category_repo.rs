use trivia_core::model::Category;

use super::mapping::WireCategory;
use super::{HttpRepository, ensure_success, transport};
use crate::repository::{CategoryRepository, RemoteError};

#[async_trait::async_trait]
impl CategoryRepository for HttpRepository {
    async fn list_categories(&self) -> Result<Vec<Category>, RemoteError> {
        let url = self.endpoint("categories")?;
        log::debug!("GET {url}");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let wire: Vec<WireCategory> = ensure_success(response)?
            .json()
            .await
            .map_err(transport)?;
        Ok(wire.into_iter().map(Category::from).collect())
    }
}
