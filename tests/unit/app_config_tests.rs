/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use lengua_validator::app_config::{Config, LogLevel, ValidationStrategy};
use lengua_validator::errors::AppError;

use crate::common;

fn configured() -> Config {
    let mut config = Config::default();
    config.translation.api_key = "translate-key".to_string();
    config.generative.api_key = "gemini-key".to_string();
    config
}

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.source_language, "es");
    assert_eq!(config.target_language, "qu");
    assert_eq!(config.acceptance_threshold, 70);
    assert_eq!(config.translation.timeout_secs, 10);
    assert_eq!(config.generative.timeout_secs, 120);
    assert_eq!(config.generative.model, "gemini-2.5-flash");
    assert_eq!(config.log_level, LogLevel::Info);

    let params = config.generative.generation_params();
    assert_eq!(params.temperature, 0.0);
    assert_eq!(params.top_k, 1);
    assert_eq!(params.top_p, 1.0);
    assert_eq!(params.max_output_tokens, 4096);
}

#[test]
fn test_loadOrCreate_missingFile_shouldWriteDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("conf.json");

    let config = Config::load_or_create(&path)?;

    assert!(path.exists());
    assert_eq!(config.target_language, "qu");

    // The written file loads back to the same settings
    let reloaded = Config::load_or_create(&path)?;
    assert_eq!(reloaded.generative.model, config.generative.model);
    assert_eq!(reloaded.acceptance_threshold, config.acceptance_threshold);
    Ok(())
}

#[test]
fn test_loadOrCreate_partialFile_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"acceptance_threshold": 80, "generative": {"api_key": "abc", "top_k": 3}}"#,
    )?;

    let config = Config::load_or_create(&path)?;

    assert_eq!(config.acceptance_threshold, 80);
    assert_eq!(config.generative.api_key, "abc");
    assert_eq!(config.generative.top_k, 3);
    assert_eq!(config.generative.max_output_tokens, 4096);
    assert_eq!(config.source_language, "es");
    Ok(())
}

#[test]
fn test_loadOrCreate_invalidJson_shouldReturnConfigError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ not json")?;

    let result = Config::load_or_create(&path);

    assert!(matches!(result, Err(AppError::Config(_))));
    Ok(())
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = configured();
    assert!(config.validate(ValidationStrategy::Classic).is_ok());
    assert!(config.validate(ValidationStrategy::Ai).is_ok());

    // Invalid source language
    config.source_language = "xx".to_string();
    assert!(config.validate(ValidationStrategy::Classic).is_err());
    config.source_language = "es".to_string();

    // Same language on both sides
    config.target_language = "spa".to_string();
    assert!(config.validate(ValidationStrategy::Classic).is_err());
    config.target_language = "qu".to_string();

    // Threshold above 100
    config.acceptance_threshold = 101;
    assert!(config.validate(ValidationStrategy::Classic).is_err());
    config.acceptance_threshold = 100;
    assert!(config.validate(ValidationStrategy::Classic).is_ok());
}

#[test]
fn test_config_validation_missingKeys_shouldOnlyFailUsedStrategy() {
    let mut config = configured();

    config.generative.api_key.clear();
    assert!(config.validate(ValidationStrategy::Classic).is_ok());
    assert!(config.validate(ValidationStrategy::Ai).is_err());

    config.generative.api_key = "gemini-key".to_string();
    config.translation.api_key = "   ".to_string();
    assert!(config.validate(ValidationStrategy::Classic).is_err());
    assert!(config.validate(ValidationStrategy::Ai).is_ok());
}

#[test]
fn test_config_validation_emptyModelOrZeroTimeout_shouldFail() {
    let mut config = configured();
    config.generative.model = String::new();
    let error = config.validate(ValidationStrategy::Ai).unwrap_err();
    assert!(error.to_string().contains("generative.model"));

    let mut config = configured();
    config.translation.timeout_secs = 0;
    let error = config.validate(ValidationStrategy::Classic).unwrap_err();
    assert!(error.to_string().contains("translation.timeout_secs"));
}

#[test]
fn test_validationStrategy_display_shouldBeLowercase() {
    assert_eq!(ValidationStrategy::Classic.to_string(), "classic");
    assert_eq!(ValidationStrategy::Ai.to_string(), "ai");
    assert_eq!(ValidationStrategy::default(), ValidationStrategy::Classic);
}
