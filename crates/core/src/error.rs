use thiserror::Error;

use crate::model::{DifficultyError, PlayerNameError, QuestionError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Difficulty(#[from] DifficultyError),
    #[error(transparent)]
    PlayerName(#[from] PlayerNameError),
}
