//! Shared error types for the services crate.

use thiserror::Error;

use remote::RemoteError;

/// Errors emitted by the session runner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session already completed")]
    Completed,
}

/// Errors emitted while starting or playing a quiz.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for this selection")]
    NoQuestions,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Fetch(#[from] RemoteError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Errors emitted by `LeaderboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LeaderboardError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
}
