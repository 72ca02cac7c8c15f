use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::{CategoryFilter, Question, QuestionBank};
use services::QuizService;

use crate::context::{UiApp, build_app_context};
use crate::views::{QuizPage, QuizView};

pub struct TestApp {
    pub bank: Arc<QuestionBank>,
    pub filter: CategoryFilter,
}

impl UiApp for TestApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn initial_filter(&self) -> CategoryFilter {
        self.filter.clone()
    }
}

pub fn sample_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::new(vec![
        Question::new(
            "Optics",
            "Optical power of a lens is measured in:",
            vec!["Lux".into(), "Diopters".into(), "Lumens".into()],
            "Diopters",
        ),
        Question::new(
            "Acoustics",
            "Sound intensity level is measured in:",
            vec!["Hertz".into(), "Decibels".into()],
            "Decibels",
        ),
        Question::new(
            "Optics",
            "Myopia is corrected with which lens?",
            vec!["Converging".into(), "Diverging".into()],
            "Diverging",
        ),
    ]))
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[allow(non_snake_case)]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizView {} }
}

#[derive(Props, Clone, PartialEq)]
struct PageHarnessProps {
    service: QuizService,
}

#[allow(non_snake_case)]
fn PageHarness(props: PageHarnessProps) -> Element {
    let quiz = use_signal(|| props.service.clone());
    rsx! { QuizPage { quiz } }
}

/// Render the full quiz view the way the desktop app mounts it.
pub fn render_app(app: TestApp) -> String {
    let mut dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app: Arc::new(app) });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render the quiz page for a service already driven into some state.
pub fn render_page(service: QuizService) -> String {
    let mut dom = VirtualDom::new_with_props(PageHarness, PageHarnessProps { service });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
