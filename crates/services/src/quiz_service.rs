use std::fmt;
use std::sync::Arc;

use quiz_core::{CategoryFilter, QuestionBank, QuizError, QuizSession};

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    SelectCategory(CategoryFilter),
    Start,
    Answer(String),
    Next,
    GoTo(usize),
    BackToStart,
    Restart,
}

impl QuizIntent {
    fn name(&self) -> &'static str {
        match self {
            Self::SelectCategory(_) => "select_category",
            Self::Start => "start",
            Self::Answer(_) => "answer",
            Self::Next => "next",
            Self::GoTo(_) => "go_to",
            Self::BackToStart => "back_to_start",
            Self::Restart => "restart",
        }
    }
}

/// Single writer for a quiz session over a shared question bank.
#[derive(Clone)]
pub struct QuizService {
    bank: Arc<QuestionBank>,
    session: QuizSession,
}

impl QuizService {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            session: QuizSession::new(),
        }
    }

    /// Preselect a category on the start screen.
    #[must_use]
    pub fn with_filter(mut self, filter: CategoryFilter) -> Self {
        self.session = QuizSession::with_filter(filter);
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// Number of questions the current filter would select.
    #[must_use]
    pub fn preview_count(&self) -> usize {
        self.bank.count_matching(self.session.category_filter())
    }

    /// Apply one intent to the session.
    ///
    /// # Errors
    ///
    /// Returns the `QuizError` describing why the intent was ignored. The session
    /// is unchanged in that case.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<(), QuizError> {
        let name = intent.name();
        let was_finished = self.session.is_finished();
        let result = match intent {
            QuizIntent::SelectCategory(filter) => self.session.set_category_filter(filter),
            QuizIntent::Start => self.session.start(&self.bank),
            QuizIntent::Answer(answer) => self.session.submit_answer(answer),
            QuizIntent::Next => self.session.advance(),
            QuizIntent::GoTo(index) => self.session.go_to_question(index),
            QuizIntent::BackToStart => {
                self.session.reset();
                Ok(())
            }
            QuizIntent::Restart => self.session.restart(&self.bank),
        };

        match &result {
            Ok(()) => tracing::debug!(
                intent = name,
                phase = %self.session.phase(),
                index = self.session.current_index(),
                answered = self.session.answered_count(),
                "quiz intent applied"
            ),
            Err(err) => tracing::trace!(intent = name, error = %err, "quiz intent ignored"),
        }
        if !was_finished && self.session.is_finished() {
            let outcome = self.session.outcome();
            tracing::info!(
                score = outcome.score,
                total = outcome.total,
                percentage = outcome.percentage,
                "quiz finished"
            );
        }
        result
    }
}

impl fmt::Debug for QuizService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizService")
            .field("bank_len", &self.bank.len())
            .field("phase", &self.session.phase())
            .field("current", &self.session.current_index())
            .field("answered", &self.session.answered_count())
            .finish_non_exhaustive()
    }
}

impl PartialEq for QuizService {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bank, &other.bank) && self.session == other.session
    }
}
