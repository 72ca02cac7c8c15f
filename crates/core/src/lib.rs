#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod outcome;
pub mod quiz;
pub mod reveal;

pub use error::QuizError;
pub use model::{CategoryFilter, Question, QuestionBank};
pub use outcome::{Grade, QuizOutcome};
pub use quiz::{QuizPhase, QuizSession};
pub use reveal::{OptionReveal, QuestionStatus};
