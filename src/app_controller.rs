use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::app_config::{Config, ValidationStrategy};
use crate::providers::gemini::Gemini;
use crate::providers::google_translate::GoogleTranslate;
use crate::providers::{GenerativeTextCapability, TranslationCapability};
use crate::validation::{
    AnswerValidationOrchestrator, BackTranslationValidator, GenerativeAnswerValidator,
    ValidationRequest, ValidationResponse,
};

// @module: Application controller for answer validation

/// Main application controller wiring configuration to the validators
#[derive(Debug)]
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Validation entry points
    orchestrator: AnswerValidationOrchestrator,
}

impl Controller {
    // @method: Create a controller talking to the configured HTTP services
    pub fn with_config(config: Config) -> Result<Self> {
        let translation = &config.translation;
        let translator = Arc::new(GoogleTranslate::new(
            translation.api_key.clone(),
            translation.endpoint.clone(),
            translation.timeout_secs,
        ));

        let generative = &config.generative;
        let generator = Arc::new(Gemini::new(
            generative.api_key.clone(),
            generative.endpoint.clone(),
            generative.model.clone(),
            generative.timeout_secs,
        ));

        Ok(Self::with_capabilities(config, translator, generator))
    }

    /// Create a controller over arbitrary capability implementations
    pub fn with_capabilities(
        config: Config,
        translator: Arc<dyn TranslationCapability>,
        generator: Arc<dyn GenerativeTextCapability>,
    ) -> Self {
        let back_translation = BackTranslationValidator::new(translator)
            .with_languages(&config.source_language, &config.target_language)
            .with_threshold(config.acceptance_threshold);
        let generative = GenerativeAnswerValidator::new(generator)
            .with_params(config.generative.generation_params());

        debug!(
            "Controller ready: {} -> {}, threshold {}%",
            config.source_language, config.target_language, config.acceptance_threshold
        );

        Self {
            config,
            orchestrator: AnswerValidationOrchestrator::new(back_translation, generative),
        }
    }

    /// Configuration the controller was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validate one answer with the given strategy
    pub async fn run(&self, strategy: ValidationStrategy, request: &ValidationRequest) -> ValidationResponse {
        info!("Validating answer with the {} strategy", strategy);
        match strategy {
            ValidationStrategy::Classic => self.orchestrator.validate_classic(request).await,
            ValidationStrategy::Ai => self.orchestrator.validate_with_ai(request).await,
        }
    }

    /// Validate one answer and render the response as pretty JSON
    pub async fn run_to_json(&self, strategy: ValidationStrategy, request: &ValidationRequest) -> Result<String> {
        let response = self.run(strategy, request).await;
        serde_json::to_string_pretty(&response).context("Failed to serialize validation response")
    }
}
