use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;

use crate::errors::AppError;
use crate::providers::GenerationParams;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Language of the prompts shown to learners (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Language learners answer in (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation service used for back-translation
    #[serde(default)]
    pub translation: TranslationServiceConfig,

    /// Generative model used for AI validation
    #[serde(default)]
    pub generative: GenerativeConfig,

    /// Minimum back-translation percentage, inclusive, counted as correct
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: u8,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Validation strategy
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    // @strategy: back-translation + edit distance
    #[default]
    Classic,
    // @strategy: generative model
    Ai,
}

impl std::fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Ai => write!(f, "ai"),
        }
    }
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationServiceConfig {
    /// Full translate endpoint URL
    #[serde(default = "default_translation_endpoint")]
    pub endpoint: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    #[serde(default = "default_translation_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TranslationServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_translation_endpoint(),
            api_key: String::new(),
            timeout_secs: default_translation_timeout_secs(),
        }
    }
}

/// Generative model configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GenerativeConfig {
    /// API base URL
    #[serde(default = "default_generative_endpoint")]
    pub endpoint: String,

    /// Model name (e.g., "gemini-2.5-flash")
    #[serde(default = "default_generative_model")]
    pub model: String,

    /// API key for the service
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Request timeout in seconds
    ///
    /// Large-model replies are slow, so this is measured in minutes rather
    /// than seconds.
    #[serde(default = "default_generative_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    #[serde(default)]
    pub temperature: f32,

    /// Top k tokens to consider
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Top probability mass to consider
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Ceiling on generated tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GenerativeConfig {
    fn default() -> Self {
        Self {
            endpoint: default_generative_endpoint(),
            model: default_generative_model(),
            api_key: String::new(),
            timeout_secs: default_generative_timeout_secs(),
            temperature: 0.0,
            top_k: default_top_k(),
            top_p: default_top_p(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

impl GenerativeConfig {
    /// Decoding parameters sent with each request
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            top_k: self.top_k,
            top_p: self.top_p,
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_source_language() -> String {
    "es".to_string()
}

fn default_target_language() -> String {
    "qu".to_string()
}

fn default_acceptance_threshold() -> u8 {
    70
}

fn default_translation_endpoint() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}

fn default_translation_timeout_secs() -> u64 {
    10
}

fn default_generative_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_generative_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_generative_timeout_secs() -> u64 {
    120
}

fn default_top_k() -> u32 {
    1
}

fn default_top_p() -> f32 {
    1.0
}

fn default_max_output_tokens() -> u32 {
    4096
}

impl Config {
    /// Load the configuration at `path`, writing the defaults there when it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            return serde_json::from_str(&content).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
            });
        }

        warn!("Config file not found at '{}', creating default config.", path.display());
        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .map_err(|e| AppError::Config(format!("Failed to serialize default config: {}", e)))?;
        std::fs::write(path, config_json)?;

        Ok(config)
    }

    /// Validate the configuration for the given strategy
    pub fn validate(&self, strategy: ValidationStrategy) -> Result<(), AppError> {
        // Validate languages
        crate::language_utils::get_language_name(&self.source_language)
            .map_err(|e| AppError::Config(format!("source_language: {}", e)))?;
        crate::language_utils::get_language_name(&self.target_language)
            .map_err(|e| AppError::Config(format!("target_language: {}", e)))?;
        if crate::language_utils::language_codes_match(&self.source_language, &self.target_language) {
            return Err(AppError::Config(format!(
                "source_language and target_language must differ, both are '{}'",
                self.source_language
            )));
        }

        if self.acceptance_threshold > 100 {
            return Err(AppError::Config(format!(
                "acceptance_threshold must be at most 100, got {}",
                self.acceptance_threshold
            )));
        }

        match strategy {
            ValidationStrategy::Classic => {
                let service = &self.translation;
                check_service("translation", &service.endpoint, &service.api_key, service.timeout_secs)
            }
            ValidationStrategy::Ai => {
                let service = &self.generative;
                check_service("generative", &service.endpoint, &service.api_key, service.timeout_secs)?;
                if service.model.trim().is_empty() {
                    return Err(AppError::Config("generative.model is required".to_string()));
                }
                Ok(())
            }
        }
    }
}

fn check_service(name: &str, endpoint: &str, api_key: &str, timeout_secs: u64) -> Result<(), AppError> {
    if endpoint.trim().is_empty() {
        return Err(AppError::Config(format!("{}.endpoint is required", name)));
    }
    if api_key.trim().is_empty() {
        return Err(AppError::Config(format!("{}.api_key is required", name)));
    }
    if timeout_secs == 0 {
        return Err(AppError::Config(format!("{}.timeout_secs must be positive", name)));
    }
    Ok(())
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            translation: TranslationServiceConfig::default(),
            generative: GenerativeConfig::default(),
            acceptance_threshold: default_acceptance_threshold(),
            log_level: LogLevel::default(),
        }
    }
}
