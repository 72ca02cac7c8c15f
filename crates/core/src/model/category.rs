use std::fmt;

use crate::model::Question;

/// Which questions a session draws from the bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    /// Value used by selectors for the `All` entry.
    pub const ALL_KEY: &'static str = "all";

    #[must_use]
    pub fn category(name: impl Into<String>) -> Self {
        Self::Category(name.into())
    }

    /// Parse a selector value; `"all"` maps to [`CategoryFilter::All`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        if key == Self::ALL_KEY {
            Self::All
        } else {
            Self::Category(key.to_string())
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => Self::ALL_KEY,
            Self::Category(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, question: &Question) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => question.category() == name,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
