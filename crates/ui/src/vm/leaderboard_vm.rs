use services::LeaderboardService;
use trivia_core::model::{Leaderboard, QuizSelection};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRowVm {
    pub rank: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardVm {
    pub difficulty_label: &'static str,
    pub rows: Vec<LeaderboardRowVm>,
}

#[must_use]
pub fn map_leaderboard(selection: &QuizSelection, board: &Leaderboard) -> LeaderboardVm {
    let rows = board
        .ranked()
        .map(|(rank, entry)| LeaderboardRowVm {
            rank,
            label: format!("{rank}. {}: {}", entry.username, entry.score),
        })
        .collect();
    LeaderboardVm {
        difficulty_label: selection.difficulty.label(),
        rows,
    }
}

/// # Errors
///
/// Returns `ViewError::Unreachable` when the leaderboard cannot be fetched.
pub async fn load_leaderboard(
    leaderboards: &LeaderboardService,
    selection: &QuizSelection,
) -> Result<LeaderboardVm, ViewError> {
    let board = leaderboards
        .leaderboard(selection)
        .await
        .map_err(|_| ViewError::Unreachable)?;
    Ok(map_leaderboard(selection, &board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::model::{CategoryId, Difficulty, LeaderboardEntry};

    #[test]
    fn rows_are_ranked_in_service_order() {
        let selection = QuizSelection::new(CategoryId::from(9), Difficulty::Hard);
        let board = Leaderboard::new(vec![
            LeaderboardEntry {
                username: "alice".into(),
                score: 9,
            },
            LeaderboardEntry {
                username: "bob".into(),
                score: 10,
            },
        ]);

        let vm = map_leaderboard(&selection, &board);

        assert_eq!(vm.difficulty_label, "Hard");
        let labels: Vec<_> = vm.rows.iter().map(|row| row.label.as_str()).collect();
        assert_eq!(labels, vec!["1. alice: 9", "2. bob: 10"]);
    }
}
