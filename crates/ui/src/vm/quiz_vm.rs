use services::{ActiveQuiz, QuizError, QuizLoopService, SubmissionOutcome};
use trivia_core::model::{PlayerName, QuizSelection};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOutcome {
    Continue,
    Completed { saved: bool },
}

/// Render-ready snapshot of the quiz screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question {
        score_label: String,
        text: String,
        choices: Vec<String>,
    },
    Completed {
        title: &'static str,
        detail: String,
        dismiss_label: &'static str,
    },
}

/// What the quiz screen shows while an answer is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerWait {
    Checking,
    /// The last answer; the score submission rides on it.
    Submitting,
}

impl AnswerWait {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Checking => "Checking answer...",
            Self::Submitting => "Submitting score...",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct CompletionVm {
    final_score: u32,
    total: usize,
    submission: SubmissionOutcome,
}

pub struct QuizVm {
    quiz: ActiveQuiz,
    completion: Option<CompletionVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: ActiveQuiz) -> Self {
        Self {
            quiz,
            completion: None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completion.is_some()
    }

    /// The wait the next answer will put the screen in.
    #[must_use]
    pub fn answer_wait(&self) -> AnswerWait {
        if self.quiz.progress().remaining <= 1 {
            AnswerWait::Submitting
        } else {
            AnswerWait::Checking
        }
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        let progress = self.quiz.progress();
        format!("Score: {}/{}", progress.score, progress.total)
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        if let Some(completion) = &self.completion {
            let detail = format!(
                "Your score: {}/{}",
                completion.final_score, completion.total
            );
            return match completion.submission {
                SubmissionOutcome::Saved => QuizScreen::Completed {
                    title: "Quiz Completed",
                    detail,
                    dismiss_label: "OK",
                },
                SubmissionOutcome::Failed { .. } => QuizScreen::Completed {
                    title: "Failed to submit score.",
                    detail,
                    dismiss_label: "Dismiss",
                },
            };
        }

        let (text, choices) = self.quiz.current_question().map_or_else(
            || (String::new(), Vec::new()),
            |question| {
                (
                    question.text().to_string(),
                    question.answer_choices().to_vec(),
                )
            },
        );
        QuizScreen::Question {
            score_label: self.score_label(),
            text,
            choices,
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the quiz had already completed.
    pub async fn answer(
        &mut self,
        quiz_loop: &QuizLoopService,
        choice: &str,
    ) -> Result<QuizOutcome, ViewError> {
        let result = quiz_loop
            .answer_current(&mut self.quiz, choice)
            .await
            .map_err(|_| ViewError::Unknown)?;

        match (result.answer.completion, result.submission) {
            (Some(completion), Some(submission)) => {
                let saved = submission == SubmissionOutcome::Saved;
                self.completion = Some(CompletionVm {
                    final_score: completion.final_score,
                    total: completion.total,
                    submission,
                });
                Ok(QuizOutcome::Completed { saved })
            }
            _ => Ok(QuizOutcome::Continue),
        }
    }

    /// Drop the quiz without submitting anything.
    pub fn abandon(self, quiz_loop: &QuizLoopService) {
        quiz_loop.abandon(self.quiz);
    }
}

/// # Errors
///
/// Returns `ViewError::NoQuestions` for an empty batch,
/// `ViewError::Unreachable` when the batch cannot be fetched.
pub async fn start_quiz(
    quiz_loop: &QuizLoopService,
    player: PlayerName,
    selection: QuizSelection,
) -> Result<QuizVm, ViewError> {
    match quiz_loop.start_quiz(player, selection).await {
        Ok(quiz) => Ok(QuizVm::new(quiz)),
        Err(QuizError::NoQuestions) => Err(ViewError::NoQuestions),
        Err(QuizError::Fetch(_)) => Err(ViewError::Unreachable),
        Err(_) => Err(ViewError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use remote::{Endpoint, InMemoryRepository};
    use trivia_core::model::{CategoryId, Difficulty, Question};

    fn selection() -> QuizSelection {
        QuizSelection::new(CategoryId::from(9), Difficulty::Easy)
    }

    fn quiz_loop(repo: &InMemoryRepository) -> QuizLoopService {
        QuizLoopService::new(Arc::new(repo.clone()), Arc::new(repo.clone())).with_shuffle_seed(3)
    }

    fn two_question_repo() -> InMemoryRepository {
        let repo = InMemoryRepository::new();
        repo.set_batch(
            selection(),
            vec![
                Question::new("1+1?", "2", vec!["3".into()]).unwrap(),
                Question::new("2+2?", "4", vec!["5".into()]).unwrap(),
            ],
        )
        .unwrap();
        repo
    }

    async fn started(repo: &InMemoryRepository) -> (QuizLoopService, QuizVm) {
        let svc = quiz_loop(repo);
        let vm = start_quiz(&svc, PlayerName::new("alice").unwrap(), selection())
            .await
            .unwrap();
        (svc, vm)
    }

    #[tokio::test]
    async fn question_screen_shows_running_score() {
        let repo = two_question_repo();
        let (svc, mut vm) = started(&repo).await;

        assert_eq!(vm.score_label(), "Score: 0/2");
        assert_eq!(vm.answer(&svc, "2").await.unwrap(), QuizOutcome::Continue);

        match vm.screen() {
            QuizScreen::Question {
                score_label,
                text,
                mut choices,
            } => {
                assert_eq!(score_label, "Score: 1/2");
                assert_eq!(text, "2+2?");
                choices.sort();
                assert_eq!(choices, vec!["4", "5"]);
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[tokio::test]
    async fn last_answer_waits_on_submission() {
        let repo = two_question_repo();
        let (svc, mut vm) = started(&repo).await;

        assert_eq!(vm.answer_wait(), AnswerWait::Checking);
        vm.answer(&svc, "2").await.unwrap();
        assert_eq!(vm.answer_wait(), AnswerWait::Submitting);
        assert_eq!(vm.answer_wait().label(), "Submitting score...");
    }

    #[tokio::test]
    async fn completion_screen_reports_saved_score() {
        let repo = two_question_repo();
        let (svc, mut vm) = started(&repo).await;

        vm.answer(&svc, "2").await.unwrap();
        let outcome = vm.answer(&svc, "5").await.unwrap();

        assert_eq!(outcome, QuizOutcome::Completed { saved: true });
        assert_eq!(
            vm.screen(),
            QuizScreen::Completed {
                title: "Quiz Completed",
                detail: "Your score: 1/2".to_string(),
                dismiss_label: "OK",
            }
        );
    }

    #[tokio::test]
    async fn completion_screen_reports_failed_submission() {
        let repo = two_question_repo();
        repo.fail(Endpoint::SaveScore).unwrap();
        let (svc, mut vm) = started(&repo).await;

        vm.answer(&svc, "2").await.unwrap();
        let outcome = vm.answer(&svc, "4").await.unwrap();

        assert_eq!(outcome, QuizOutcome::Completed { saved: false });
        assert!(matches!(
            vm.screen(),
            QuizScreen::Completed {
                title: "Failed to submit score.",
                dismiss_label: "Dismiss",
                ..
            }
        ));
        assert_eq!(vm.answer(&svc, "4").await.unwrap_err(), ViewError::Unknown);
    }

    #[tokio::test]
    async fn start_maps_empty_and_unreachable() {
        let repo = InMemoryRepository::new();
        let svc = quiz_loop(&repo);

        let empty = start_quiz(&svc, PlayerName::new("bob").unwrap(), selection()).await;
        assert_eq!(empty.err(), Some(ViewError::NoQuestions));

        repo.fail(Endpoint::Quiz).unwrap();
        let down = start_quiz(&svc, PlayerName::new("bob").unwrap(), selection()).await;
        assert_eq!(down.err(), Some(ViewError::Unreachable));
    }

    #[tokio::test]
    async fn abandon_submits_nothing() {
        let repo = two_question_repo();
        let (svc, mut vm) = started(&repo).await;
        vm.answer(&svc, "2").await.unwrap();

        vm.abandon(&svc);

        assert_eq!(repo.submit_attempts().unwrap(), 0);
    }
}
