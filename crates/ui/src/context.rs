use std::sync::Arc;

use quiz_core::{CategoryFilter, QuestionBank};
use services::QuizService;

pub trait UiApp: Send + Sync {
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn initial_filter(&self) -> CategoryFilter;
}

#[derive(Clone)]
pub struct AppContext {
    bank: Arc<QuestionBank>,
    initial_filter: CategoryFilter,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            bank: app.question_bank(),
            initial_filter: app.initial_filter(),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    #[must_use]
    pub fn initial_filter(&self) -> &CategoryFilter {
        &self.initial_filter
    }

    /// A fresh quiz on the start screen with the configured category preselected.
    #[must_use]
    pub fn new_quiz(&self) -> QuizService {
        QuizService::new(self.question_bank()).with_filter(self.initial_filter.clone())
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
