use services::CatalogService;
use trivia_core::model::{Category, CategoryId, Difficulty, PlayerName, QuizSelection};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuRequest {
    StartQuiz,
    Leaderboard,
}

/// Form state of the menu screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuVm {
    pub player_name: String,
    pub category: Option<CategoryId>,
    pub difficulty: Option<Difficulty>,
    /// At most one request runs at a time.
    pub pending: Option<MenuRequest>,
}

impl MenuVm {
    /// Mark `request` as in flight. Returns `false` if one already is.
    pub fn begin(&mut self, request: MenuRequest) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(request);
        true
    }

    pub fn finish(&mut self) {
        self.pending = None;
    }

    pub fn set_player_name(&mut self, raw: String) {
        self.player_name = raw;
    }

    /// Select a category by its option value. An empty value clears it.
    pub fn select_category(&mut self, raw: &str) {
        let id = CategoryId::new(raw);
        self.category = (!id.is_empty()).then_some(id);
    }

    /// Select a difficulty by its wire value. Anything else clears it.
    pub fn select_difficulty(&mut self, raw: &str) {
        self.difficulty = raw.parse().ok();
    }

    #[must_use]
    pub fn player(&self) -> Option<PlayerName> {
        PlayerName::new(&self.player_name).ok()
    }

    #[must_use]
    pub fn selection(&self) -> Option<QuizSelection> {
        let category = self.category.clone()?;
        let difficulty = self.difficulty?;
        Some(QuizSelection::new(category, difficulty))
    }

    #[must_use]
    pub fn can_start(&self) -> bool {
        self.pending.is_none() && self.player().is_some() && self.selection().is_some()
    }

    #[must_use]
    pub fn can_view_leaderboard(&self) -> bool {
        self.pending.is_none() && self.selection().is_some()
    }

    #[must_use]
    pub fn category_value(&self) -> &str {
        self.category.as_ref().map_or("", CategoryId::as_str)
    }

    #[must_use]
    pub fn difficulty_value(&self) -> &'static str {
        self.difficulty.map_or("", Difficulty::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DifficultyOptionVm {
    pub value: &'static str,
    pub label: &'static str,
}

#[must_use]
pub fn map_category_options(categories: &[Category]) -> Vec<CategoryOptionVm> {
    categories
        .iter()
        .map(|category| CategoryOptionVm {
            value: category.id.as_str().to_string(),
            label: category.name.clone(),
        })
        .collect()
}

#[must_use]
pub fn difficulty_options() -> Vec<DifficultyOptionVm> {
    Difficulty::ALL
        .iter()
        .map(|difficulty| DifficultyOptionVm {
            value: difficulty.as_str(),
            label: difficulty.label(),
        })
        .collect()
}

/// # Errors
///
/// Returns `ViewError::Unreachable` when the category list cannot be fetched.
pub async fn load_category_options(
    catalog: &CatalogService,
) -> Result<Vec<CategoryOptionVm>, ViewError> {
    let categories = catalog
        .list_categories()
        .await
        .map_err(|_| ViewError::Unreachable)?;
    Ok(map_category_options(&categories))
}
