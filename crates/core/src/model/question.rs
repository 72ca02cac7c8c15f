use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// The serialized field names follow the question bank file format
/// (`question`, `correctAnswer`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    category: String,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    #[serde(rename = "correctAnswer")]
    correct_answer: String,
}

impl Question {
    /// Build a question record.
    ///
    /// `correct_answer` is expected to equal one of `options`; this is not checked.
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            prompt: prompt.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
