#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod leaderboard_service;
pub mod sessions;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{CatalogError, LeaderboardError, QuizError, SessionError};
pub use leaderboard_service::LeaderboardService;

pub use sessions::{
    ActiveQuiz, AnswerOutcome, Completion, QuizAnswerResult, QuizLoopService, RunnerState,
    SessionBuilder, SessionProgress, SessionRunner, SubmissionOutcome,
};
