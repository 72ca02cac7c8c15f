use thiserror::Error;

use crate::quiz::QuizPhase;

/// Reasons a quiz transition was rejected.
///
/// A rejected transition never mutates the session, so callers that only
/// care about the resulting state may drop these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("`{operation}` is not valid while the quiz is {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: QuizPhase,
    },

    #[error("question index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("no questions match the selected category")]
    EmptySelection,

    #[error("question {index} already has a locked answer")]
    AnswerLocked { index: usize },

    #[error("question {index} has not been answered yet")]
    Unanswered { index: usize },
}
