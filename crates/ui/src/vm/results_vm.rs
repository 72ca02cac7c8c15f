use quiz_core::{Grade, QuizOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub percentage_label: String,
    pub summary_label: String,
    pub message: &'static str,
    pub message_class: &'static str,
}

fn grade_message(grade: Grade) -> (&'static str, &'static str) {
    match grade {
        Grade::Excellent => ("Excellent! You know the material very well!", "grade grade-excellent"),
        Grade::Good => ("Good! But there is room to grow.", "grade grade-good"),
        Grade::NeedsReview => ("We recommend reviewing the material.", "grade grade-review"),
    }
}

#[must_use]
pub fn map_results(outcome: &QuizOutcome) -> ResultsVm {
    let (message, message_class) = grade_message(outcome.grade);
    ResultsVm {
        percentage_label: format!("{}%", outcome.percentage),
        summary_label: format!("{} of {} correct answers", outcome.score, outcome.total),
        message,
        message_class,
    }
}
