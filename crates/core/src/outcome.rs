/// Feedback tier for a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    /// 80% and above.
    Excellent,
    /// 60% up to 80%.
    Good,
    /// Below 60%.
    NeedsReview,
}

impl Grade {
    #[must_use]
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            80.. => Self::Excellent,
            60..80 => Self::Good,
            _ => Self::NeedsReview,
        }
    }
}

/// Final (or running) result of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub grade: Grade,
}

impl QuizOutcome {
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }
}

/// `score / total` as a whole percentage, rounded half up. Zero when `total` is zero.
#[must_use]
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let score = score.min(total) as u64;
    let total = total as u64;
    let rounded = (score * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(100)
}
