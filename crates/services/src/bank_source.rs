use std::path::{Path, PathBuf};

use quiz_core::model::{Question, QuestionBank};

use crate::error::BankError;

const EMBEDDED_BANK: &str = include_str!("../assets/questions.json");

/// Where the question bank comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BankSource {
    /// The medical physics bank compiled into the binary.
    #[default]
    Embedded,
    /// A JSON array of question records on disk.
    File(PathBuf),
}

impl BankSource {
    /// Load the bank from this source.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Io` if the file cannot be read.
    /// Returns `BankError::Parse` if the content is not a valid question list.
    pub fn load(&self) -> Result<QuestionBank, BankError> {
        match self {
            Self::Embedded => parse_bank(EMBEDDED_BANK),
            Self::File(path) => load_bank_file(path),
        }
    }
}

/// Parse a JSON array of `{ category, question, options, correctAnswer }` records.
///
/// # Errors
///
/// Returns `BankError::Parse` for malformed input.
pub fn parse_bank(raw: &str) -> Result<QuestionBank, BankError> {
    let questions: Vec<Question> = serde_json::from_str(raw)?;
    let bank = QuestionBank::new(questions);
    tracing::debug!(
        questions = bank.len(),
        categories = bank.categories().len(),
        "parsed question bank"
    );
    Ok(bank)
}

fn load_bank_file(path: &Path) -> Result<QuestionBank, BankError> {
    let raw = std::fs::read_to_string(path).map_err(|source| BankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_bank(&raw)
}
