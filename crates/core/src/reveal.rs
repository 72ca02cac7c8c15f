//! Per-option and per-question feedback derived from recorded answers.

use crate::model::Question;

/// How an option button should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionReveal {
    /// The question has no answer yet; the option is selectable.
    Hidden,
    /// The option is the correct answer.
    Correct,
    /// The user picked this option and it is wrong.
    SelectedIncorrect,
    /// Any other option once the question is answered.
    Dimmed,
}

impl OptionReveal {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Navigation status of one question in the active set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    Correct,
    Incorrect,
}

/// Classify every option of `question` given the recorded answer, if any.
#[must_use]
pub fn reveal_options(question: &Question, answer: Option<&str>) -> Vec<OptionReveal> {
    question
        .options()
        .iter()
        .map(|option| match answer {
            None => OptionReveal::Hidden,
            Some(_) if question.is_correct(option) => OptionReveal::Correct,
            Some(selected) if selected == option => OptionReveal::SelectedIncorrect,
            Some(_) => OptionReveal::Dimmed,
        })
        .collect()
}

#[must_use]
pub fn question_status(question: &Question, answer: Option<&str>) -> QuestionStatus {
    match answer {
        None => QuestionStatus::Unanswered,
        Some(answer) if question.is_correct(answer) => QuestionStatus::Correct,
        Some(_) => QuestionStatus::Incorrect,
    }
}
