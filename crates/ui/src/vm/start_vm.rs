use quiz_core::{CategoryFilter, QuestionBank};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptionVm {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub categories: Vec<CategoryOptionVm>,
    pub question_count: usize,
    pub can_start: bool,
}

/// Start screen: category selector entries with counts and the live selection size.
#[must_use]
pub fn map_start(bank: &QuestionBank, filter: &CategoryFilter) -> StartVm {
    let mut categories = Vec::with_capacity(bank.categories().len() + 1);
    categories.push(CategoryOptionVm {
        key: CategoryFilter::ALL_KEY.to_string(),
        label: format!("All questions ({})", bank.len()),
        selected: *filter == CategoryFilter::All,
    });
    categories.extend(bank.categories().into_iter().map(|name| CategoryOptionVm {
        key: name.to_string(),
        label: format!("{name} ({})", bank.count_in(name)),
        selected: filter.key() == name && *filter != CategoryFilter::All,
    }));

    let question_count = bank.count_matching(filter);
    StartVm {
        categories,
        question_count,
        can_start: question_count > 0,
    }
}
