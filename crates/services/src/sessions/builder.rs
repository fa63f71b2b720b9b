use rand::Rng;
use rand::rngs::ThreadRng;

use trivia_core::model::{PresentedQuestion, Question, QuizSession};

/// Turns a fetched batch into a session with per-question answer orders.
///
/// Pure transformation: no I/O, and the input batch is left untouched. The
/// random source is injectable so tests can pin the presentation order.
pub struct SessionBuilder<R = ThreadRng> {
    rng: R,
}

impl SessionBuilder<ThreadRng> {
    /// Builder backed by the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for SessionBuilder<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SessionBuilder<R> {
    /// Builder backed by the given generator, e.g. a seeded `StdRng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build a session from `batch`, shuffling each question's choices once.
    ///
    /// An empty batch yields an empty session.
    pub fn build(&mut self, batch: &[Question]) -> QuizSession {
        let rng = &mut self.rng;
        let mut questions = Vec::with_capacity(batch.len());
        for question in batch {
            questions.push(PresentedQuestion::arrange(question, |choices| {
                fisher_yates(choices, &mut *rng);
            }));
        }
        QuizSession::new(questions)
    }
}

/// Unbiased in-place Fisher–Yates: walk from the last index down to 1 and
/// swap each slot with a uniformly chosen index in `[0, i]`.
pub(crate) fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
