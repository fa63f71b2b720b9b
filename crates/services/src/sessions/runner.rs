use std::fmt;

use trivia_core::model::{PresentedQuestion, QuizSession};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Where the runner stands. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    AwaitingAnswer(usize),
    Completed(u32),
}

/// Emitted once, by the answer that ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub final_score: u32,
    pub total: usize,
}

/// What a single `submit_answer` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub index: usize,
    pub correct: bool,
    pub score: u32,
    pub completion: Option<Completion>,
}

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// State machine that walks a `QuizSession` one answer at a time.
///
/// Owns the session, the cursor and the running score. There is no way to go
/// back or skip; every call to `submit_answer` consumes the current question.
pub struct SessionRunner {
    session: QuizSession,
    state: RunnerState,
    score: u32,
}

impl SessionRunner {
    /// Start a runner. An empty session starts out `Completed(0)` and never
    /// produces a `Completion`.
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let state = if session.is_empty() {
            RunnerState::Completed(0)
        } else {
            RunnerState::AwaitingAnswer(0)
        };
        Self {
            session,
            state,
            score: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> RunnerState {
        self.state
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total(&self) -> usize {
        self.session.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, RunnerState::Completed(_))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            RunnerState::AwaitingAnswer(index) => Some(index),
            RunnerState::Completed(_) => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&PresentedQuestion> {
        self.current_index().and_then(|index| self.session.get(index))
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total();
        let answered = self.current_index().unwrap_or(total);
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            score: self.score,
            is_complete: self.is_complete(),
        }
    }

    /// Answer the current question and advance.
    ///
    /// The choice is compared to the correct answer exactly (case-sensitive,
    /// untrimmed). Answering the last question moves to `Completed` and the
    /// returned outcome carries the `Completion`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session has already ended.
    /// The runner is left unchanged.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        let RunnerState::AwaitingAnswer(index) = self.state else {
            return Err(SessionError::Completed);
        };
        let question = self.session.get(index).ok_or(SessionError::Completed)?;

        let correct = question.is_correct(choice);
        if correct {
            self.score = self.score.saturating_add(1);
        }

        let next = index + 1;
        let completion = if next < self.session.len() {
            self.state = RunnerState::AwaitingAnswer(next);
            None
        } else {
            self.state = RunnerState::Completed(self.score);
            Some(Completion {
                final_score: self.score,
                total: self.session.len(),
            })
        };

        Ok(AnswerOutcome {
            index,
            correct,
            score: self.score,
            completion,
        })
    }
}

impl fmt::Debug for SessionRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionRunner")
            .field("questions_len", &self.session.len())
            .field("state", &self.state)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
