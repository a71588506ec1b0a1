/*!
 * Provider implementations for the upstream services the validators consume.
 *
 * This module contains the two capability traits and their clients:
 * - `google_translate`: REST translation client used for back-translation
 * - `gemini`: generative-text client used for AI validation
 * - `mock`: in-process capabilities for tests and offline runs
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

pub use self::gemini::GenerateContentResponse;

/// Decoding parameters sent with every generation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    /// Sampling temperature, 0 for the most deterministic output
    pub temperature: f32,
    /// Ceiling on generated tokens
    pub max_output_tokens: u32,
    /// Top k tokens to consider
    pub top_k: u32,
    /// Top probability mass to consider (nucleus sampling)
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            max_output_tokens: 4096,
            top_k: 1,
            top_p: 1.0,
        }
    }
}

/// Translates text between two languages
///
/// Implementations report every transport or status failure as an error;
/// callers decide how to degrade.
#[async_trait]
pub trait TranslationCapability: Send + Sync + Debug {
    /// Translate `text` from `source_lang` to `target_lang`
    ///
    /// # Arguments
    /// * `text` - The text to translate
    /// * `source_lang` - ISO code of the language `text` is written in
    /// * `target_lang` - ISO code of the language to translate into
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError>;
}

/// Completes a prompt with a generative text model
#[async_trait]
pub trait GenerativeTextCapability: Send + Sync + Debug {
    /// Send `prompt` with the given decoding parameters and return the raw envelope
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerateContentResponse, ProviderError>;
}

pub mod gemini;
pub mod google_translate;
pub mod mock;
