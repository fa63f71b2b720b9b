use std::sync::Arc;

use dioxus::prelude::*;
use services::{CatalogService, LeaderboardService, QuizLoopService};

use crate::vm::{AnswerWait, LeaderboardVm, MenuVm, QuizVm};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
    fn leaderboard(&self) -> Arc<LeaderboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
    leaderboard: Arc<LeaderboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            quiz_loop: app.quiz_loop(),
            leaderboard: app.leaderboard(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Arc<LeaderboardService> {
        Arc::clone(&self.leaderboard)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// State that outlives a single route: the menu form, the quiz in progress
/// and the last fetched leaderboard. Provided once at the app root.
#[derive(Clone, Copy)]
pub struct UiSlots {
    pub menu: Signal<MenuVm>,
    pub quiz: Signal<Option<QuizVm>>,
    /// Set while `quiz` is lent out to an answer in flight.
    pub answer_wait: Signal<Option<AnswerWait>>,
    pub leaderboard: Signal<Option<LeaderboardVm>>,
}

/// Create the slots in the current scope and provide them to descendants.
pub fn use_ui_slots_provider() -> UiSlots {
    use_context_provider(|| UiSlots {
        menu: Signal::new(MenuVm::default()),
        quiz: Signal::new(None),
        answer_wait: Signal::new(None),
        leaderboard: Signal::new(None),
    })
}
