mod leaderboard_vm;
mod menu_vm;
mod quiz_vm;

pub use leaderboard_vm::{LeaderboardRowVm, LeaderboardVm, load_leaderboard, map_leaderboard};
pub use menu_vm::{
    CategoryOptionVm, DifficultyOptionVm, MenuRequest, MenuVm, difficulty_options,
    load_category_options, map_category_options,
};
pub use quiz_vm::{AnswerWait, QuizOutcome, QuizScreen, QuizVm, start_quiz};
