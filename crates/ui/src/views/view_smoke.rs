use std::sync::Arc;

use quiz_core::{CategoryFilter, Question, QuestionBank};
use services::{QuizIntent, QuizService};

use super::test_harness::{TestApp, render_app, render_page, sample_bank};

fn service() -> QuizService {
    QuizService::new(sample_bank())
}

#[test]
fn start_screen_lists_categories_with_counts() {
    let html = render_app(TestApp {
        bank: sample_bank(),
        filter: CategoryFilter::All,
    });

    assert!(html.contains("Medical Physics"), "missing title in {html}");
    assert!(html.contains("All questions (3)"), "missing all entry in {html}");
    assert!(html.contains("Optics (2)"), "missing optics entry in {html}");
    assert!(html.contains("Acoustics (1)"), "missing acoustics entry in {html}");
    assert!(html.contains("Start the test"), "missing start button in {html}");
}

#[test]
fn preselected_category_limits_question_count() {
    let html = render_app(TestApp {
        bank: sample_bank(),
        filter: CategoryFilter::category("Acoustics"),
    });
    assert!(
        html.contains(">1</span>"),
        "missing filtered count in {html}"
    );
}

#[test]
fn question_screen_hides_next_until_answered() {
    let mut svc = service();
    svc.apply(QuizIntent::Start).unwrap();

    let html = render_page(svc);
    assert!(html.contains("Question 1 / 3"), "missing position in {html}");
    assert!(html.contains("Optical power of a lens"), "missing prompt in {html}");
    assert!(html.contains("option-open"), "missing open options in {html}");
    assert!(!html.contains("Next question"), "next shown early in {html}");
    assert!(html.contains("Correct answers: 0 / 0"), "missing score in {html}");
}

#[test]
fn answered_question_reveals_feedback() {
    let mut svc = service();
    svc.apply(QuizIntent::Start).unwrap();
    svc.apply(QuizIntent::Answer("Lux".into())).unwrap();

    let html = render_page(svc);
    assert!(html.contains("option-correct"), "missing correct option in {html}");
    assert!(html.contains("option-incorrect"), "missing wrong option in {html}");
    assert!(html.contains("option-dimmed"), "missing dimmed option in {html}");
    assert!(html.contains("Next question"), "missing next button in {html}");
    assert!(html.contains("dot-incorrect dot-current"), "missing nav dot in {html}");
    assert!(html.contains("Correct answers: 0 / 1"), "missing score in {html}");
}

#[test]
fn results_screen_shows_percentage_and_grade() {
    let mut svc = service();
    svc.apply(QuizIntent::Start).unwrap();
    for answer in ["Diopters", "Decibels", "Converging"] {
        svc.apply(QuizIntent::Answer(answer.into())).unwrap();
        svc.apply(QuizIntent::Next).unwrap();
    }

    let html = render_page(svc);
    assert!(html.contains("Test complete!"), "missing heading in {html}");
    assert!(html.contains("67%"), "missing percentage in {html}");
    assert!(html.contains("2 of 3 correct answers"), "missing summary in {html}");
    assert!(html.contains("grade-good"), "missing grade in {html}");
    assert!(html.contains("Take it again"), "missing restart in {html}");
}

#[test]
fn repeated_distractor_renders_every_option_after_answering() {
    let bank = QuestionBank::new(vec![Question::new(
        "Optics",
        "Pick the odd one out",
        vec!["Lux".into(), "Lux".into(), "Diopters".into()],
        "Diopters",
    )]);
    let mut svc = QuizService::new(Arc::new(bank));
    svc.apply(QuizIntent::Start).unwrap();
    svc.apply(QuizIntent::Answer("Lux".into())).unwrap();

    let html = render_page(svc);
    assert_eq!(html.matches("option-incorrect").count(), 2, "in {html}");
    assert_eq!(html.matches("option-correct").count(), 1, "in {html}");
    assert_eq!(html.matches(">Lux<").count(), 2, "in {html}");
}
