mod category;
mod ids;
mod question;
mod score;
mod session;

pub use ids::CategoryId;

pub use category::{Category, Difficulty, DifficultyError, QuizSelection};
pub use question::{PresentedQuestion, Question, QuestionError};
pub use score::{Leaderboard, LeaderboardEntry, PlayerName, PlayerNameError, ScoreRecord};
pub use session::QuizSession;
