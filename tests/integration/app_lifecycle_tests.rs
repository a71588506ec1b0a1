/*!
 * Integration tests for application lifecycle
 */

use anyhow::Result;
use std::sync::Arc;

use lengua_validator::app_config::{Config, ValidationStrategy};
use lengua_validator::app_controller::Controller;
use lengua_validator::providers::mock::MockGenerator;
use lengua_validator::validation::Verdict;

use crate::common;
use crate::common::mock_providers::DictionaryTranslator;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::with_config(Config::default())?;

    assert_eq!(controller.config().source_language, "es");
    Ok(())
}

/// Test the full flow from a config file on disk to a JSON response
#[tokio::test]
async fn test_controller_fromConfigFile_shouldRenderResponse() -> Result<()> {
    common::init_logging();
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"translation": {"api_key": "k"}, "acceptance_threshold": 90, "log_level": "debug"}"#,
    )?;
    let config = Config::load_or_create(&path)?;
    config.validate(ValidationStrategy::Classic)?;

    let controller = Controller::with_capabilities(
        config,
        Arc::new(DictionaryTranslator::quechua_glossary()),
        Arc::new(MockGenerator::failing()),
    );

    let json = controller
        .run_to_json(ValidationStrategy::Classic, &common::hola_request())
        .await?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["isCorrect"], true);
    assert_eq!(value["accuracyPercentage"], 100);
    assert_eq!(value["candidateText"], "Allinllachu");
    Ok(())
}

/// Unknown answers degrade rather than error, whatever the strategy
#[tokio::test]
async fn test_controller_unknownAnswer_shouldDegradeToUnknown() -> Result<()> {
    let controller = Controller::with_capabilities(
        Config::default(),
        Arc::new(DictionaryTranslator::quechua_glossary()),
        Arc::new(MockGenerator::missing_content()),
    );
    let request = lengua_validator::ValidationRequest::new("Hola", "Wawa", "Allinllachu");

    let classic = controller.run(ValidationStrategy::Classic, &request).await;
    let ai = controller.run(ValidationStrategy::Ai, &request).await;

    assert_eq!(classic.result.is_correct, Verdict::Unknown);
    assert_eq!(ai.result.is_correct, Verdict::Unknown);
    Ok(())
}
