/*!
 * # Lengua Validator
 *
 * A Rust library that grades Spanish → Quechua translations written by
 * language learners.
 *
 * ## Features
 *
 * - Classic validation: back-translate the answer with a translation service
 *   and compare it to the prompt with a normalized edit distance
 * - AI validation: ask a generative model for a structured JSON judgement
 * - Recovery of JSON objects from chatty or truncated model replies
 * - Tri-state verdicts: upstream failures become "unknown", never errors
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `app_controller`: Wires configuration to the validators
 * - `validation`: Validation strategies and their shared types:
 *   - `validation::similarity`: Levenshtein similarity
 *   - `validation::extractor`: JSON extraction from model output
 *   - `validation::orchestrator`: The two public entry points
 * - `providers`: Capability traits and HTTP clients:
 *   - `providers::google_translate`: Google Cloud Translation v2 client
 *   - `providers::gemini`: Gemini generateContent client
 *   - `providers::mock`: Test doubles for both capabilities
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod validation;

// Re-export main types for easier usage
pub use app_config::{Config, ValidationStrategy};
pub use app_controller::Controller;
pub use errors::{AppError, ExtractionError, ProviderError, ValidationError};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part2t};
pub use validation::{
    AnswerValidationOrchestrator, ValidationRequest, ValidationResponse, ValidationResult, Verdict,
};
