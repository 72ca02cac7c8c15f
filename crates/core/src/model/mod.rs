mod bank;
mod category;
mod question;

pub use bank::QuestionBank;
pub use category::CategoryFilter;
pub use question::Question;
