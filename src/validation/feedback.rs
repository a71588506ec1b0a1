/*!
 * Feedback tiers keyed by accuracy percentage.
 *
 * Two independent tables exist. `ValidityTier` describes the back-translation
 * result for diagnostics; `LearnerTier` is what the learner sees on the
 * classic path and the fallback on the AI path. The two tables use different
 * boundaries.
 */

/// Shown to the learner when no percentage could be computed
pub const GENERIC_FEEDBACK: &str = "Try again. Review the translation";

/// Internal validity message of a back-translation score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidityTier {
    Excellent,
    VeryGood,
    Acceptable,
    NoticeableDifferences,
    Incorrect,
}

impl ValidityTier {
    /// ≥90, ≥80, ≥70, ≥50, else
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            90.. => Self::Excellent,
            80..=89 => Self::VeryGood,
            70..=79 => Self::Acceptable,
            50..=69 => Self::NoticeableDifferences,
            _ => Self::Incorrect,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent translation",
            Self::VeryGood => "Very good translation",
            Self::Acceptable => "Acceptable translation",
            Self::NoticeableDifferences => "Translation with noticeable differences",
            Self::Incorrect => "Incorrect or very different translation",
        }
    }
}

/// Learner-facing feedback tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnerTier {
    Perfect,
    VeryGood,
    Correct,
    AlmostCorrect,
    TryAgain,
}

impl LearnerTier {
    /// ≥95, ≥85, ≥70, ≥50, else
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage {
            95.. => Self::Perfect,
            85..=94 => Self::VeryGood,
            70..=84 => Self::Correct,
            50..=69 => Self::AlmostCorrect,
            _ => Self::TryAgain,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Perfect => "Perfect! Your translation is excellent",
            Self::VeryGood => "Very good! Your translation is very good",
            Self::Correct => "Well done. Your translation is correct",
            Self::AlmostCorrect => "Almost correct. Review some details",
            Self::TryAgain => GENERIC_FEEDBACK,
        }
    }
}

/// Learner feedback for an optional percentage
pub fn learner_feedback(percentage: Option<u8>) -> &'static str {
    match percentage {
        Some(p) => LearnerTier::from_percentage(p).message(),
        None => GENERIC_FEEDBACK,
    }
}
