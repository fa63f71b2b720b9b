use std::collections::HashSet;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a question from the question bank.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question has no incorrect answers")]
    NoIncorrectAnswers,

    #[error("correct answer is also listed as incorrect: {0}")]
    CorrectListedAsIncorrect(String),

    #[error("duplicate incorrect answer: {0}")]
    DuplicateIncorrectAnswer(String),
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A multiple-choice question exactly as the question bank returns it.
///
/// Identity is positional within a batch; there is no question id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

impl Question {
    /// Create a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if there are no incorrect answers, or if the
    /// answer set contains duplicates (including the correct answer listed
    /// among the incorrect ones).
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Result<Self, QuestionError> {
        let correct_answer = correct_answer.into();
        if incorrect_answers.is_empty() {
            return Err(QuestionError::NoIncorrectAnswers);
        }

        let mut seen = HashSet::with_capacity(incorrect_answers.len());
        for answer in &incorrect_answers {
            if *answer == correct_answer {
                return Err(QuestionError::CorrectListedAsIncorrect(answer.clone()));
            }
            if !seen.insert(answer.as_str()) {
                return Err(QuestionError::DuplicateIncorrectAnswer(answer.clone()));
            }
        }

        Ok(Self {
            text: text.into(),
            correct_answer,
            incorrect_answers,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn incorrect_answers(&self) -> &[String] {
        &self.incorrect_answers
    }

    /// Number of answer choices a presented form of this question will offer.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.incorrect_answers.len() + 1
    }
}

//
// ─── PRESENTED QUESTION ───────────────────────────────────────────────────────
//

/// A question paired with the order its answer choices are shown in.
///
/// The order is fixed when the session is built and never re-shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    question: Question,
    answer_choices: Vec<String>,
}

impl PresentedQuestion {
    /// Build the presented form of `question`.
    ///
    /// The choice pool is `incorrect_answers` followed by `correct_answer`;
    /// `arrange` receives it as a slice and may reorder it in place. Because
    /// it only gets a slice, it cannot add or drop choices.
    pub fn arrange(question: &Question, arrange: impl FnOnce(&mut [String])) -> Self {
        let mut answer_choices = Vec::with_capacity(question.choice_count());
        answer_choices.extend(question.incorrect_answers.iter().cloned());
        answer_choices.push(question.correct_answer.clone());
        arrange(answer_choices.as_mut_slice());

        Self {
            question: question.clone(),
            answer_choices,
        }
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.question.text()
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        self.question.correct_answer()
    }

    #[must_use]
    pub fn answer_choices(&self) -> &[String] {
        &self.answer_choices
    }

    /// Exact, case-sensitive comparison against the correct answer.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.question.correct_answer
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
