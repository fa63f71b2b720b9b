mod builder;
mod progress;
mod runner;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::{QuizError, SessionError};
pub use builder::SessionBuilder;
pub use progress::SessionProgress;
pub use runner::{AnswerOutcome, Completion, RunnerState, SessionRunner};
pub use workflow::{ActiveQuiz, QuizAnswerResult, QuizLoopService, SubmissionOutcome};
