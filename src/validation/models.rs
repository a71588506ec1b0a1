/*!
 * Request and result types shared by both validation strategies.
 */

use serde::{Deserialize, Serialize, Serializer};

use super::feedback::GENERIC_FEEDBACK;

/// Three-valued correctness verdict
///
/// `Unknown` means an upstream failure prevented a decision. It serializes to
/// `null`, the other two to `true`/`false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    Correct,
    Incorrect,
    #[default]
    Unknown,
}

impl Verdict {
    /// `Some(bool)` for a decided verdict, `None` for `Unknown`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Correct => Some(true),
            Self::Incorrect => Some(false),
            Self::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Self::Correct } else { Self::Incorrect }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_bool().serialize(serializer)
    }
}

/// A learner's answer to validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    /// Spanish prompt shown to the learner
    pub original_text: String,
    /// Learner's Quechua attempt, may be empty
    pub candidate_text: String,
    /// Expected answer, echoed back unscored
    #[serde(default)]
    pub correct_reference: String,
}

impl ValidationRequest {
    pub fn new(
        original_text: impl Into<String>,
        candidate_text: impl Into<String>,
        correct_reference: impl Into<String>,
    ) -> Self {
        Self {
            original_text: original_text.into(),
            candidate_text: candidate_text.into(),
            correct_reference: correct_reference.into(),
        }
    }
}

/// Outcome of a single validation strategy
///
/// Build it through `scored` or `unknown` so that a decided verdict always
/// carries a percentage and feedback is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_correct: Verdict,
    /// 0-100, absent when the verdict is `Unknown`
    pub accuracy_percentage: Option<u8>,
    pub feedback: String,
    /// Back-translation (classic path) or model suggestion (AI path)
    pub back_translation_or_suggestion: Option<String>,
    /// Technical detail for diagnostics
    pub message: Option<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A decided result; the percentage is clamped into 0-100
    pub fn scored(percentage: i64, is_correct: bool, feedback: impl Into<String>) -> Self {
        Self {
            is_correct: Verdict::from(is_correct),
            accuracy_percentage: Some(percentage.clamp(0, 100) as u8),
            feedback: non_empty(feedback.into()),
            back_translation_or_suggestion: None,
            message: None,
            errors: Vec::new(),
        }
    }

    /// An undecided result carrying the failure cause
    pub fn unknown(feedback: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            is_correct: Verdict::Unknown,
            accuracy_percentage: None,
            feedback: non_empty(feedback.into()),
            back_translation_or_suggestion: None,
            message: Some(message.into()),
            errors: Vec::new(),
        }
    }

    pub fn with_back_translation_or_suggestion(mut self, text: Option<String>) -> Self {
        self.back_translation_or_suggestion = text;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

fn non_empty(feedback: String) -> String {
    if feedback.trim().is_empty() {
        GENERIC_FEEDBACK.to_string()
    } else {
        feedback
    }
}

/// What the orchestrator returns to its caller
///
/// The strategy result plus the reference and candidate, echoed unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    #[serde(flatten)]
    pub result: ValidationResult,
    pub correct_reference: String,
    pub candidate_text: String,
}
