use std::collections::BTreeMap;
use std::fmt;

use crate::error::QuizError;
use crate::model::{CategoryFilter, Question, QuestionBank};
use crate::outcome::QuizOutcome;
use crate::reveal::{OptionReveal, QuestionStatus, question_status, reveal_options};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

impl QuizPhase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session: category filter, frozen question set, and locked answers.
///
/// Every transition checks its own preconditions. A rejected transition returns
/// `Err` and leaves the session exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    filter: CategoryFilter,
    active: Vec<Question>,
    current: usize,
    answers: BTreeMap<usize, String>,
    phase: QuizPhase,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session with `filter` preselected.
    #[must_use]
    pub fn with_filter(filter: CategoryFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != QuizPhase::NotStarted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    #[must_use]
    pub fn category_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Questions frozen at `start`. Empty before the first start.
    #[must_use]
    pub fn active_questions(&self) -> &[Question] {
        &self.active
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question on screen while the quiz is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == QuizPhase::InProgress {
            self.active.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn answer_at(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&str> {
        self.answer_at(self.current)
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<usize, String> {
        &self.answers
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Whether `advance` from here finishes the quiz.
    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.active.len()
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Choose the category before starting.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` once the quiz has started.
    pub fn set_category_filter(&mut self, filter: CategoryFilter) -> Result<(), QuizError> {
        self.require(QuizPhase::NotStarted, "set_category_filter")?;
        self.filter = filter;
        Ok(())
    }

    /// Freeze the questions matching the current filter and begin the quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if already started.
    /// Returns `QuizError::EmptySelection` if no question matches the filter.
    pub fn start(&mut self, bank: &QuestionBank) -> Result<(), QuizError> {
        self.require(QuizPhase::NotStarted, "start")?;
        self.begin(bank)
    }

    /// Record the answer for the current question. The first answer is final.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless in progress.
    /// Returns `QuizError::AnswerLocked` if the current question is already answered.
    pub fn submit_answer(&mut self, answer: impl Into<String>) -> Result<(), QuizError> {
        self.require(QuizPhase::InProgress, "submit_answer")?;
        if self.answers.contains_key(&self.current) {
            return Err(QuizError::AnswerLocked {
                index: self.current,
            });
        }
        self.answers.insert(self.current, answer.into());
        Ok(())
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless in progress.
    /// Returns `QuizError::Unanswered` if the current question has no answer.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        self.require(QuizPhase::InProgress, "advance")?;
        if !self.answers.contains_key(&self.current) {
            return Err(QuizError::Unanswered {
                index: self.current,
            });
        }
        if self.is_last_question() {
            self.phase = QuizPhase::Finished;
        } else {
            self.current += 1;
        }
        Ok(())
    }

    /// Jump to any question, answered or not.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` unless in progress.
    /// Returns `QuizError::OutOfRange` if `index` is not a valid question index.
    pub fn go_to_question(&mut self, index: usize) -> Result<(), QuizError> {
        self.require(QuizPhase::InProgress, "go_to_question")?;
        if index >= self.active.len() {
            return Err(QuizError::OutOfRange {
                index,
                len: self.active.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Abandon everything and return to the start screen with the default filter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Begin a new attempt with the same filter, re-selecting from `bank`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTransition` if the quiz has not started.
    /// Returns `QuizError::EmptySelection` if the filter no longer matches anything.
    pub fn restart(&mut self, bank: &QuestionBank) -> Result<(), QuizError> {
        if self.phase == QuizPhase::NotStarted {
            return Err(self.invalid("restart"));
        }
        self.begin(bank)
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    /// Number of recorded answers that match their question's correct answer.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|(index, answer)| {
                self.active
                    .get(**index)
                    .is_some_and(|question| question.is_correct(answer))
            })
            .count()
    }

    #[must_use]
    pub fn outcome(&self) -> QuizOutcome {
        QuizOutcome::new(self.score(), self.total())
    }

    /// Reveal status for each option of the current question.
    #[must_use]
    pub fn option_reveals(&self) -> Vec<OptionReveal> {
        self.current_question()
            .map(|question| reveal_options(question, self.current_answer()))
            .unwrap_or_default()
    }

    /// Answered/correct status of every active question, in order.
    #[must_use]
    pub fn question_statuses(&self) -> Vec<QuestionStatus> {
        self.active
            .iter()
            .enumerate()
            .map(|(index, question)| question_status(question, self.answer_at(index)))
            .collect()
    }

    //
    // ─── HELPERS ───────────────────────────────────────────────────────────────
    //

    fn begin(&mut self, bank: &QuestionBank) -> Result<(), QuizError> {
        let active = bank.filtered(&self.filter);
        if active.is_empty() {
            return Err(QuizError::EmptySelection);
        }
        self.active = active;
        self.current = 0;
        self.answers.clear();
        self.phase = QuizPhase::InProgress;
        Ok(())
    }

    fn require(&self, phase: QuizPhase, operation: &'static str) -> Result<(), QuizError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(self.invalid(operation))
        }
    }

    fn invalid(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
