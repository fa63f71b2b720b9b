use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use remote::{QuestionRepository, ScoreRepository};
use trivia_core::model::{PlayerName, PresentedQuestion, QuizSelection, ScoreRecord};

use super::builder::SessionBuilder;
use super::progress::SessionProgress;
use super::runner::{AnswerOutcome, SessionRunner};
use crate::error::QuizError;

/// How the single end-of-session submission went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Saved,
    Failed { reason: String },
}

/// Result of answering a single question in a quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizAnswerResult {
    pub answer: AnswerOutcome,
    /// Present only on the answer that completed the session.
    pub submission: Option<SubmissionOutcome>,
}

impl QuizAnswerResult {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answer.completion.is_some()
    }
}

/// A quiz in progress: the runner plus who is playing what.
#[derive(Debug)]
pub struct ActiveQuiz {
    runner: SessionRunner,
    player: PlayerName,
    selection: QuizSelection,
}

impl ActiveQuiz {
    #[must_use]
    pub fn runner(&self) -> &SessionRunner {
        &self.runner
    }

    #[must_use]
    pub fn player(&self) -> &PlayerName {
        &self.player
    }

    #[must_use]
    pub fn selection(&self) -> &QuizSelection {
        &self.selection
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&PresentedQuestion> {
        self.runner.current_question()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.runner.progress()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.runner.is_complete()
    }
}

/// Orchestrates quiz start, answering, and the end-of-session submission.
#[derive(Clone)]
pub struct QuizLoopService {
    questions: Arc<dyn QuestionRepository>,
    scores: Arc<dyn ScoreRepository>,
    shuffle_seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self {
            questions,
            scores,
            shuffle_seed: None,
        }
    }

    /// Pin answer ordering to a seed instead of thread-local entropy.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Fetch a batch for `selection` and start a quiz on it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Fetch` if the batch cannot be fetched and
    /// `QuizError::NoQuestions` if the service returned an empty batch.
    pub async fn start_quiz(
        &self,
        player: PlayerName,
        selection: QuizSelection,
    ) -> Result<ActiveQuiz, QuizError> {
        let batch = self
            .questions
            .fetch_batch(&selection)
            .await
            .inspect_err(|e| log::warn!("fetching quiz batch failed: {e}"))?;

        if batch.is_empty() {
            log::info!(
                "no questions for category={} difficulty={}",
                selection.category,
                selection.difficulty
            );
            return Err(QuizError::NoQuestions);
        }

        let session = match self.shuffle_seed {
            Some(seed) => SessionBuilder::with_rng(StdRng::seed_from_u64(seed)).build(&batch),
            None => SessionBuilder::new().build(&batch),
        };
        log::info!(
            "quiz started: {} questions, category={} difficulty={}",
            session.len(),
            selection.category,
            selection.difficulty
        );

        Ok(ActiveQuiz {
            runner: SessionRunner::new(session),
            player,
            selection,
        })
    }

    /// Answer the current question; on the final answer, submit the score once.
    ///
    /// A failed submission is reported in the result rather than as an error:
    /// the quiz has ended either way and is not retried.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` if the quiz had already completed.
    pub async fn answer_current(
        &self,
        quiz: &mut ActiveQuiz,
        choice: &str,
    ) -> Result<QuizAnswerResult, QuizError> {
        let answer = quiz.runner.submit_answer(choice)?;
        log::debug!(
            "answered question {}: correct={} score={}",
            answer.index,
            answer.correct,
            answer.score
        );

        let Some(completion) = answer.completion else {
            return Ok(QuizAnswerResult {
                answer,
                submission: None,
            });
        };

        log::info!(
            "quiz completed: {}/{}",
            completion.final_score,
            completion.total
        );
        let record = ScoreRecord::new(
            quiz.player.clone(),
            completion.final_score,
            &quiz.selection,
        );
        let submission = match self.scores.submit_score(&record).await {
            Ok(()) => SubmissionOutcome::Saved,
            Err(e) => {
                log::warn!("submitting score failed: {e}");
                SubmissionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        Ok(QuizAnswerResult {
            answer,
            submission: Some(submission),
        })
    }

    /// Leave a quiz before it completes. Nothing is submitted.
    pub fn abandon(&self, quiz: ActiveQuiz) {
        if !quiz.is_complete() {
            let progress = quiz.progress();
            log::info!(
                "quiz abandoned after {}/{} answers",
                progress.answered,
                progress.total
            );
        }
    }
}
