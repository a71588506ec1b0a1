/*!
 * Answer validation for Spanish → Quechua exercises.
 *
 * # Architecture
 *
 * - `similarity`: normalized Levenshtein similarity
 * - `extractor`: JSON extraction and truncation repair for model replies
 * - `feedback`: percentage-keyed feedback tiers
 * - `models`: request, result and tri-state verdict types
 * - `back_translation`: back-translation strategy
 * - `generative`: generative-model strategy
 * - `orchestrator`: the two public entry points
 */

pub mod back_translation;
pub mod extractor;
pub mod feedback;
pub mod generative;
pub mod models;
pub mod orchestrator;
pub mod similarity;

// Re-export main types
pub use back_translation::BackTranslationValidator;
pub use extractor::extract_json_object;
pub use generative::{GenerativeAnswerValidator, GenerativeScore};
pub use models::{ValidationRequest, ValidationResponse, ValidationResult, Verdict};
pub use orchestrator::AnswerValidationOrchestrator;
pub use similarity::{levenshtein_distance, similarity};
