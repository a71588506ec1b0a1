/*!
 * Back-translation validation.
 *
 * The learner's answer is translated back into the source language and
 * compared to the original prompt by edit-distance similarity.
 */

use log::{debug, error, info};
use std::sync::Arc;

use crate::errors::ValidationError;
use crate::providers::TranslationCapability;

use super::feedback::{GENERIC_FEEDBACK, ValidityTier};
use super::models::ValidationResult;
use super::similarity::similarity_percentage;

/// Minimum percentage, inclusive, for an answer to count as correct
pub const DEFAULT_ACCEPTANCE_THRESHOLD: u8 = 70;

/// Scores answers by back-translating them
#[derive(Debug, Clone)]
pub struct BackTranslationValidator {
    translator: Arc<dyn TranslationCapability>,
    /// Language of the prompt, e.g. "es"
    source_language: String,
    /// Language of the learner's answer, e.g. "qu"
    target_language: String,
    acceptance_threshold: u8,
}

impl BackTranslationValidator {
    /// Create a validator for the Spanish → Quechua pair
    pub fn new(translator: Arc<dyn TranslationCapability>) -> Self {
        Self {
            translator,
            source_language: "es".to_string(),
            target_language: "qu".to_string(),
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
        }
    }

    /// Override the language pair
    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.source_language = source.into();
        self.target_language = target.into();
        self
    }

    /// Override the acceptance threshold, capped at 100
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.acceptance_threshold = threshold.min(100);
        self
    }

    /// Validate `candidate` against `original`; never fails
    pub async fn validate(&self, original: &str, candidate: &str) -> ValidationResult {
        match self.score(original, candidate).await {
            Ok(result) => result,
            Err(e) => {
                error!("Back-translation validation failed: {}", e);
                ValidationResult::unknown(GENERIC_FEEDBACK, format!("could not validate: {}", e))
            }
        }
    }

    async fn score(&self, original: &str, candidate: &str) -> Result<ValidationResult, ValidationError> {
        ValidationError::check_original(original)?;
        let back_translated = self
            .translator
            .translate(candidate, &self.target_language, &self.source_language)
            .await?;
        debug!("Back-translation of '{}': '{}'", candidate, back_translated);

        Ok(self.classify(original, back_translated))
    }

    /// Score an already back-translated answer
    pub fn classify(&self, original: &str, back_translated: String) -> ValidationResult {
        let percentage = similarity_percentage(original, &back_translated);
        let is_correct = percentage >= self.acceptance_threshold;
        let tier = ValidityTier::from_percentage(percentage);
        info!("Back-translation score {}% ({:?})", percentage, tier);

        ValidationResult::scored(i64::from(percentage), is_correct, tier.message())
            .with_message(tier.message())
            .with_back_translation_or_suggestion(Some(back_translated))
    }
}
