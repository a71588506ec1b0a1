/*!
 * Public entry points for answer validation.
 *
 * `validate_classic` runs the back-translation strategy and
 * `validate_with_ai` the generative one. Both normalize into the same
 * `ValidationResponse` and neither ever returns an error.
 */

use log::{info, warn};
use std::sync::Arc;

use crate::providers::{GenerativeTextCapability, TranslationCapability};

use super::back_translation::BackTranslationValidator;
use super::feedback::learner_feedback;
use super::generative::GenerativeAnswerValidator;
use super::models::{ValidationRequest, ValidationResponse, ValidationResult};

/// Message used on the AI path when the model reported no errors
pub const NO_ERRORS_MESSAGE: &str = "no errors detected";

/// Dispatches validation requests to one of the two strategies
///
/// Holds no mutable state; share it behind an `Arc` or clone it freely.
#[derive(Debug, Clone)]
pub struct AnswerValidationOrchestrator {
    back_translation: BackTranslationValidator,
    generative: GenerativeAnswerValidator,
}

impl AnswerValidationOrchestrator {
    /// Build an orchestrator from already configured validators
    pub fn new(back_translation: BackTranslationValidator, generative: GenerativeAnswerValidator) -> Self {
        Self {
            back_translation,
            generative,
        }
    }

    /// Build an orchestrator with default validator settings
    pub fn from_capabilities(
        translator: Arc<dyn TranslationCapability>,
        generator: Arc<dyn GenerativeTextCapability>,
    ) -> Self {
        Self::new(
            BackTranslationValidator::new(translator),
            GenerativeAnswerValidator::new(generator),
        )
    }

    /// Validate by back-translation and edit distance
    pub async fn validate_classic(&self, request: &ValidationRequest) -> ValidationResponse {
        info!("Classic validation of '{}'", request.original_text);
        let mut result = self
            .back_translation
            .validate(&request.original_text, &request.candidate_text)
            .await;

        if result.accuracy_percentage.is_none() {
            warn!("Classic validation degraded to unknown");
        }
        result.feedback = learner_feedback(result.accuracy_percentage).to_string();

        Self::respond(result, request)
    }

    /// Validate with the generative model
    pub async fn validate_with_ai(&self, request: &ValidationRequest) -> ValidationResponse {
        info!("AI validation of '{}'", request.original_text);
        let mut result = self
            .generative
            .validate(&request.original_text, &request.candidate_text)
            .await;

        if result.is_correct.is_known() {
            result.message = Some(if result.errors.is_empty() {
                NO_ERRORS_MESSAGE.to_string()
            } else {
                result.errors.join(", ")
            });
        } else {
            warn!("AI validation degraded to unknown");
        }

        Self::respond(result, request)
    }

    fn respond(result: ValidationResult, request: &ValidationRequest) -> ValidationResponse {
        ValidationResponse {
            result,
            correct_reference: request.correct_reference.clone(),
            candidate_text: request.candidate_text.clone(),
        }
    }
}
