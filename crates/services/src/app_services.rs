use std::sync::Arc;

use remote::Remote;

use crate::catalog_service::CatalogService;
use crate::leaderboard_service::LeaderboardService;
use crate::sessions::QuizLoopService;

/// Assembles the app-facing services over one `Remote` backend.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    quiz_loop: Arc<QuizLoopService>,
    leaderboard: Arc<LeaderboardService>,
}

impl AppServices {
    #[must_use]
    pub fn new(remote: &Remote) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&remote.categories)));
        let quiz_loop = Arc::new(QuizLoopService::new(
            Arc::clone(&remote.questions),
            Arc::clone(&remote.scores),
        ));
        let leaderboard = Arc::new(LeaderboardService::new(Arc::clone(&remote.leaderboards)));

        Self {
            catalog,
            quiz_loop,
            leaderboard,
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
