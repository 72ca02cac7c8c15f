use dioxus::prelude::*;

use quiz_core::{CategoryFilter, QuizPhase};
use services::{QuizIntent, QuizService};

use crate::context::AppContext;
use crate::views::{QuestionScreen, ResultsScreen, StartScreen};
use crate::vm::{map_question, map_results, map_start};

fn dispatch(mut quiz: Signal<QuizService>, intent: QuizIntent) {
    // Rejected intents are traced by the service and leave the quiz untouched.
    let _ = quiz.write().apply(intent);
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz = use_signal(move || ctx.new_quiz());

    rsx! { QuizPage { quiz } }
}

/// Renders whichever screen matches the quiz phase and forwards clicks as intents.
#[component]
pub fn QuizPage(quiz: Signal<QuizService>) -> Element {
    let phase = quiz.read().session().phase();

    match phase {
        QuizPhase::NotStarted => {
            let vm = {
                let quiz = quiz.read();
                map_start(quiz.bank(), quiz.session().category_filter())
            };
            rsx! {
                StartScreen {
                    vm,
                    on_select: move |key: String| {
                        dispatch(quiz, QuizIntent::SelectCategory(CategoryFilter::from_key(&key)));
                    },
                    on_start: move |()| dispatch(quiz, QuizIntent::Start),
                }
            }
        }
        QuizPhase::InProgress => {
            let Some(vm) = map_question(quiz.read().session()) else {
                return rsx! {};
            };
            rsx! {
                QuestionScreen {
                    vm,
                    on_back: move |()| dispatch(quiz, QuizIntent::BackToStart),
                    on_answer: move |answer: String| dispatch(quiz, QuizIntent::Answer(answer)),
                    on_next: move |()| dispatch(quiz, QuizIntent::Next),
                    on_go_to: move |index: usize| dispatch(quiz, QuizIntent::GoTo(index)),
                }
            }
        }
        QuizPhase::Finished => {
            let vm = map_results(&quiz.read().session().outcome());
            rsx! {
                ResultsScreen {
                    vm,
                    on_restart: move |()| dispatch(quiz, QuizIntent::Restart),
                }
            }
        }
    }
}
