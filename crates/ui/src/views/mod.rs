mod question;
mod quiz;
mod results;
mod start;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use question::QuestionScreen;
pub use quiz::{QuizPage, QuizView};
pub use results::ResultsScreen;
pub use start::StartScreen;
