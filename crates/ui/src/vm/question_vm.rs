use quiz_core::{OptionReveal, QuestionStatus, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub class: &'static str,
    pub marker: Option<&'static str>,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavDotVm {
    pub index: usize,
    pub label: String,
    pub class: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub category: String,
    pub position_label: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub next_label: Option<&'static str>,
    pub dots: Vec<NavDotVm>,
    pub score_label: String,
}

fn option_class(reveal: OptionReveal) -> &'static str {
    match reveal {
        OptionReveal::Hidden => "option option-open",
        OptionReveal::Correct => "option option-correct",
        OptionReveal::SelectedIncorrect => "option option-incorrect",
        OptionReveal::Dimmed => "option option-dimmed",
    }
}

fn option_marker(reveal: OptionReveal) -> Option<&'static str> {
    match reveal {
        OptionReveal::Correct => Some("✓"),
        OptionReveal::SelectedIncorrect => Some("✗"),
        OptionReveal::Hidden | OptionReveal::Dimmed => None,
    }
}

fn dot_class(status: QuestionStatus, current: bool) -> String {
    let base = match status {
        QuestionStatus::Unanswered => "nav-dot dot-unanswered",
        QuestionStatus::Correct => "nav-dot dot-correct",
        QuestionStatus::Incorrect => "nav-dot dot-incorrect",
    };
    if current {
        format!("{base} dot-current")
    } else {
        base.to_string()
    }
}

/// Question screen for the session's current question. `None` unless in progress.
#[must_use]
pub fn map_question(session: &QuizSession) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let answered = session.current_answer().is_some();

    let options = question
        .options()
        .iter()
        .zip(session.option_reveals())
        .enumerate()
        .map(|(index, (text, reveal))| OptionVm {
            index,
            text: text.clone(),
            class: option_class(reveal),
            marker: option_marker(reveal),
            disabled: reveal.is_revealed(),
        })
        .collect();

    let next_label = answered.then(|| {
        if session.is_last_question() {
            "Show results"
        } else {
            "Next question"
        }
    });

    let current = session.current_index();
    let dots = session
        .question_statuses()
        .into_iter()
        .enumerate()
        .map(|(index, status)| NavDotVm {
            index,
            label: (index + 1).to_string(),
            class: dot_class(status, index == current),
        })
        .collect();

    Some(QuestionVm {
        category: question.category().to_string(),
        position_label: format!("Question {} / {}", current + 1, session.total()),
        prompt: question.prompt().to_string(),
        options,
        next_label,
        dots,
        score_label: format!(
            "Correct answers: {} / {}",
            session.score(),
            session.answered_count()
        ),
    })
}
