use std::sync::Arc;

use remote::CategoryRepository;
use trivia_core::model::Category;

use crate::error::CatalogError;

/// Loads the categories offered on the menu.
#[derive(Clone)]
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
}

impl CatalogService {
    #[must_use]
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// List categories in the order the service returned them.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Remote` if the category request fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self
            .categories
            .list_categories()
            .await
            .inspect_err(|e| log::warn!("loading categories failed: {e}"))?;
        log::debug!("loaded {} categories", categories.len());
        Ok(categories)
    }
}
