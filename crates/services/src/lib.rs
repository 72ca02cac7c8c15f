#![forbid(unsafe_code)]

pub mod bank_source;
pub mod error;
pub mod quiz_service;

pub use bank_source::{BankSource, parse_bank};
pub use error::BankError;
pub use quiz_service::{QuizIntent, QuizService};
