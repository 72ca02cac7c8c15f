use crate::model::{CategoryFilter, Question};

/// Ordered, read-only source of every question the app knows about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Append a question. Sessions that already started keep their own copy.
    pub fn push(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Distinct categories in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for question in &self.questions {
            if !out.contains(&question.category()) {
                out.push(question.category());
            }
        }
        out
    }

    #[must_use]
    pub fn count_in(&self, category: &str) -> usize {
        self.questions
            .iter()
            .filter(|q| q.category() == category)
            .count()
    }

    #[must_use]
    pub fn count_matching(&self, filter: &CategoryFilter) -> usize {
        self.questions.iter().filter(|q| filter.matches(q)).count()
    }

    /// Owned, order-preserving selection for `filter`.
    #[must_use]
    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect()
    }
}

impl From<Vec<Question>> for QuestionBank {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
