use std::sync::Arc;

use quiz_core::{CategoryFilter, Grade, QuestionStatus, QuizError, QuizPhase};
use services::{BankSource, QuizIntent, QuizService};

fn embedded_service() -> QuizService {
    let bank = BankSource::Embedded.load().expect("embedded bank");
    QuizService::new(Arc::new(bank))
}

fn correct_answer(svc: &QuizService) -> String {
    svc.session()
        .current_question()
        .expect("question in progress")
        .correct_answer()
        .to_string()
}

#[test]
fn full_category_run_reaches_results() {
    let mut svc = embedded_service();
    svc.apply(QuizIntent::SelectCategory(CategoryFilter::category("Optics")))
        .unwrap();
    assert_eq!(svc.preview_count(), svc.bank().count_in("Optics"));
    assert!(svc.preview_count() >= 3, "flow needs three optics questions");
    svc.apply(QuizIntent::Start).unwrap();
    while svc.session().current_index() + 3 < svc.session().total() {
        let answer = correct_answer(&svc);
        svc.apply(QuizIntent::Answer(answer)).unwrap();
        svc.apply(QuizIntent::Next).unwrap();
    }
    let leading = svc.session().answered_count();

    // Last three: right, wrong, right.
    let first = correct_answer(&svc);
    svc.apply(QuizIntent::Answer(first)).unwrap();
    svc.apply(QuizIntent::Next).unwrap();
    svc.apply(QuizIntent::Answer("not an option".into())).unwrap();
    svc.apply(QuizIntent::Next).unwrap();
    let third = correct_answer(&svc);
    svc.apply(QuizIntent::Answer(third)).unwrap();
    assert!(svc.session().is_last_question());
    svc.apply(QuizIntent::Next).unwrap();

    assert_eq!(svc.session().phase(), QuizPhase::Finished);
    let outcome = svc.session().outcome();
    let total = svc.bank().count_in("Optics");
    assert_eq!((outcome.score, outcome.total), (leading + 2, total));
    assert_eq!(outcome.percentage, quiz_core::outcome::percentage(leading + 2, total));
    assert_eq!(outcome.grade, Grade::from_percentage(outcome.percentage));
}

#[test]
fn navigation_dots_reflect_out_of_order_answers() {
    let mut svc = embedded_service();
    svc.apply(QuizIntent::Start).unwrap();
    let total = svc.session().total();

    svc.apply(QuizIntent::GoTo(total - 1)).unwrap();
    let last = correct_answer(&svc);
    svc.apply(QuizIntent::Answer(last)).unwrap();
    svc.apply(QuizIntent::GoTo(1)).unwrap();
    svc.apply(QuizIntent::Answer("wrong".into())).unwrap();

    let statuses = svc.session().question_statuses();
    assert_eq!(statuses.len(), total);
    assert_eq!(statuses[0], QuestionStatus::Unanswered);
    assert_eq!(statuses[1], QuestionStatus::Incorrect);
    assert_eq!(statuses[total - 1], QuestionStatus::Correct);
    assert_eq!(svc.session().score(), 1);

    assert_eq!(
        svc.apply(QuizIntent::GoTo(total)),
        Err(QuizError::OutOfRange { index: total, len: total })
    );
    assert_eq!(svc.session().current_index(), 1);
}

#[test]
fn restart_keeps_category_and_back_to_start_clears_it() {
    let mut svc = embedded_service().with_filter(CategoryFilter::category("Acoustics"));
    svc.apply(QuizIntent::Start).unwrap();
    svc.apply(QuizIntent::Answer("x".into())).unwrap();

    svc.apply(QuizIntent::Restart).unwrap();
    assert_eq!(svc.session().phase(), QuizPhase::InProgress);
    assert_eq!(svc.session().total(), svc.bank().count_in("Acoustics"));
    assert_eq!(svc.session().answered_count(), 0);

    svc.apply(QuizIntent::BackToStart).unwrap();
    assert_eq!(svc.session().phase(), QuizPhase::NotStarted);
    assert_eq!(svc.session().category_filter(), &CategoryFilter::All);
    assert_eq!(svc.preview_count(), svc.bank().len());
}

#[test]
fn unknown_category_cannot_start() {
    let mut svc = embedded_service().with_filter(CategoryFilter::category("Thermodynamics"));
    assert_eq!(svc.preview_count(), 0);
    assert_eq!(svc.apply(QuizIntent::Start), Err(QuizError::EmptySelection));
    assert_eq!(svc.session().phase(), QuizPhase::NotStarted);
}
