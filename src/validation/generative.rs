/*!
 * AI validation through a generative text model.
 *
 * The model is asked for a single JSON line describing the answer. Its reply
 * goes through `extract_json_object` before strict parsing, and every failure
 * along the way becomes an `Unknown` result instead of an error.
 */

use log::{debug, error, info};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

use crate::errors::{ProviderError, ValidationError};
use crate::providers::{GenerationParams, GenerativeTextCapability};

use super::extractor::extract_json_object;
use super::feedback::learner_feedback;
use super::models::ValidationResult;

/// Structured judgement parsed from the model reply
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerativeScore {
    #[serde(deserialize_with = "deserialize_accuracy")]
    pub accuracy: i64,
    pub is_correct: bool,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// Accept integral or fractional accuracies, rounding the latter
fn deserialize_accuracy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom("accuracy is not a finite number"));
    }
    // saturating cast, the result is clamped to 0-100 later
    Ok(value.round() as i64)
}

/// Scores answers by asking a generative model
#[derive(Debug, Clone)]
pub struct GenerativeAnswerValidator {
    generator: Arc<dyn GenerativeTextCapability>,
    params: GenerationParams,
}

impl GenerativeAnswerValidator {
    /// Create a validator with the deterministic default decoding parameters
    pub fn new(generator: Arc<dyn GenerativeTextCapability>) -> Self {
        Self {
            generator,
            params: GenerationParams::default(),
        }
    }

    /// Override the decoding parameters
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Few-shot prompt asking for one JSON line about `candidate`
    pub fn build_prompt(original: &str, candidate: &str) -> String {
        // JSON-quote user text so embedded quotes cannot break the template
        let original = serde_json::to_string(original).unwrap_or_default();
        let candidate = serde_json::to_string(candidate).unwrap_or_default();

        format!(
            r#"DO NOT THINK. DO NOT ANALYZE. ANSWER IMMEDIATELY.
You grade Spanish to Quechua translations written by learners.
Reply with exactly one line of JSON and nothing else:
{{"accuracy":<0-100>,"is_correct":<true|false>,"feedback":"<short feedback in Spanish>","errors":["<error>",...],"suggestion":<"<corrected Quechua>"|null>}}

EXAMPLES:
Spanish="Hola" Quechua="Allinllachu" → {{"accuracy":95,"is_correct":true,"feedback":"correcto","errors":[],"suggestion":null}}
Spanish="Adiós" Quechua="Tupananchiskama" → {{"accuracy":90,"is_correct":true,"feedback":"bien","errors":[],"suggestion":null}}

NOW COPY THE EXACT FORMAT:
Spanish={original} Quechua={candidate} →"#
        )
    }

    /// Validate `candidate` against `original`; never fails
    pub async fn validate(&self, original: &str, candidate: &str) -> ValidationResult {
        match self.evaluate(original, candidate).await {
            Ok(score) => {
                info!(
                    "AI validation: accuracy {}%, correct: {}",
                    score.accuracy, score.is_correct
                );
                Self::to_result(score)
            }
            Err(e) => {
                error!("AI validation failed: {}", e);
                let cause = format!("could not validate: {}", e);
                ValidationResult::unknown(cause.clone(), cause)
            }
        }
    }

    async fn evaluate(&self, original: &str, candidate: &str) -> Result<GenerativeScore, ValidationError> {
        ValidationError::check_original(original)?;

        let prompt = Self::build_prompt(original, candidate);
        let envelope = self
            .generator
            .generate(&prompt, &self.params)
            .await
            .map_err(|e| match e {
                // The service answered, but not with a readable envelope
                ProviderError::ParseError(detail) => {
                    ValidationError::MissingResponseContent(format!("unreadable response envelope: {}", detail))
                }
                other => ValidationError::UpstreamUnavailable(other),
            })?;

        let text = envelope.first_text().ok_or_else(|| {
            ValidationError::MissingResponseContent(
                "candidates[0].content.parts[0].text".to_string(),
            )
        })?;
        debug!("Raw model reply: {}", text);

        Self::parse_reply(text)
    }

    /// Extract, repair and parse a raw model reply
    pub fn parse_reply(text: &str) -> Result<GenerativeScore, ValidationError> {
        let json = extract_json_object(text)?;
        debug!("Extracted model JSON: {}", json);
        Ok(serde_json::from_str::<GenerativeScore>(&json)?)
    }

    fn to_result(score: GenerativeScore) -> ValidationResult {
        let percentage = score.accuracy.clamp(0, 100);
        let feedback = if score.feedback.trim().is_empty() {
            // clamped above, the cast is lossless
            learner_feedback(Some(percentage as u8)).to_string()
        } else {
            score.feedback
        };

        ValidationResult::scored(percentage, score.is_correct, feedback)
            .with_errors(score.errors)
            .with_back_translation_or_suggestion(score.suggestion)
    }
}
