use crate::model::PresentedQuestion;

/// Ordered questions of one playthrough, fixed at build time.
///
/// An empty session is legal and represents a degenerate playthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<PresentedQuestion>,
}

impl QuizSession {
    #[must_use]
    pub fn new(questions: Vec<PresentedQuestion>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&PresentedQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[PresentedQuestion] {
        &self.questions
    }
}
