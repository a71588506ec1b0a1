/*!
 * End-to-end validation tests over in-process capabilities
 */

use std::sync::Arc;
use std::time::Duration;

use lengua_validator::providers::mock::{MockBehavior, MockGenerator, MockTranslator};
use lengua_validator::validation::feedback::{GENERIC_FEEDBACK, LearnerTier};
use lengua_validator::validation::{AnswerValidationOrchestrator, ValidationRequest, Verdict};

use crate::common;
use crate::common::mock_providers::DictionaryTranslator;

#[tokio::test]
async fn test_classicValidation_exactBackTranslation_shouldBePerfect() {
    common::init_logging();
    let orchestrator = common::orchestrator(DictionaryTranslator::quechua_glossary(), MockGenerator::failing());

    let response = orchestrator.validate_classic(&common::hola_request()).await;

    assert_eq!(response.result.is_correct, Verdict::Correct);
    assert_eq!(response.result.accuracy_percentage, Some(100));
    assert_eq!(response.result.feedback, LearnerTier::Perfect.message());
    assert_eq!(response.result.back_translation_or_suggestion.as_deref(), Some("Hola"));
    assert_eq!(response.correct_reference, "Allinllachu");
    assert_eq!(response.candidate_text, "Allinllachu");
}

#[tokio::test]
async fn test_classicValidation_upstreamUnavailable_shouldBeUnknown() {
    let orchestrator = common::orchestrator(MockTranslator::timing_out(), MockGenerator::failing());

    let response = orchestrator.validate_classic(&common::hola_request()).await;

    assert_eq!(response.result.is_correct, Verdict::Unknown);
    assert_eq!(response.result.accuracy_percentage, None);
    assert_eq!(response.result.feedback, GENERIC_FEEDBACK);

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["isCorrect"].is_null());
    assert!(json["accuracyPercentage"].is_null());
    assert_eq!(json["correctReference"], "Allinllachu");
}

#[tokio::test]
async fn test_classicValidation_emptyAnswer_shouldScoreZero() {
    // An empty payload keeps the (empty) input as the back-translation
    let orchestrator = common::orchestrator(MockTranslator::new(MockBehavior::Empty), MockGenerator::failing());

    let response = orchestrator
        .validate_classic(&ValidationRequest::new("Hola", "", "Allinllachu"))
        .await;

    assert_eq!(response.result.accuracy_percentage, Some(0));
    assert_eq!(response.result.is_correct, Verdict::Incorrect);
    assert_eq!(response.result.feedback, GENERIC_FEEDBACK);
}

#[tokio::test]
async fn test_aiValidation_wrappedReply_shouldProduceFullResult() {
    common::init_logging();
    let generator = MockGenerator::returning(
        "Aquí tienes:\n```json\n{\"accuracy\":95,\"is_correct\":true,\"feedback\":\"correcto\",\"errors\":[],\"suggestion\":null}\n```",
    );
    let orchestrator = common::orchestrator(MockTranslator::failing(), generator.clone());

    let response = orchestrator.validate_with_ai(&common::hola_request()).await;

    assert_eq!(response.result.is_correct, Verdict::Correct);
    assert_eq!(response.result.accuracy_percentage, Some(95));
    assert_eq!(response.result.feedback, "correcto");
    assert_eq!(response.result.message.as_deref(), Some("no errors detected"));
    assert_eq!(generator.call_count(), 1);

    let prompt = generator.last_prompt().unwrap();
    assert!(prompt.contains(r#"Spanish="Hola" Quechua="Allinllachu""#));
}

#[tokio::test]
async fn test_aiValidation_truncatedReply_shouldStillGrade() {
    let generator = MockGenerator::returning(r#"{"accuracy":90,"is_correct":true,"feedback":"bien"#);
    let orchestrator = common::orchestrator(MockTranslator::failing(), generator);

    let response = orchestrator.validate_with_ai(&common::hola_request()).await;

    assert_eq!(response.result.is_correct, Verdict::Correct);
    assert_eq!(response.result.accuracy_percentage, Some(90));
    assert_eq!(response.result.feedback, "bien");
}

#[tokio::test]
async fn test_aiValidation_proseOnlyReply_shouldBeUnknown() {
    let generator = MockGenerator::returning("Lo siento, no puedo evaluar esta respuesta.");
    let orchestrator = common::orchestrator(MockTranslator::failing(), generator);

    let response = orchestrator.validate_with_ai(&common::hola_request()).await;

    assert_eq!(response.result.is_correct, Verdict::Unknown);
    assert!(response.result.message.unwrap().contains("malformed model output"));
}

#[tokio::test]
async fn test_concurrentValidations_shouldNotInterfere() {
    let orchestrator = Arc::new(common::orchestrator(
        DictionaryTranslator::quechua_glossary(),
        MockGenerator::failing(),
    ));

    let exercises = [
        ("Hola", "Allinllachu"),
        ("Adiós", "Tupananchiskama"),
        ("Gracias", "Sulpayki"),
        ("Buenos días", "Allin p'unchaw"),
        ("Hola", "Sulpayki"),
    ];

    let handles: Vec<_> = exercises
        .iter()
        .map(|(original, answer)| {
            let orchestrator = Arc::clone(&orchestrator);
            let request = ValidationRequest::new(*original, *answer, "");
            tokio::spawn(async move { orchestrator.validate_classic(&request).await })
        })
        .collect();

    let mut verdicts = Vec::new();
    for handle in handles {
        verdicts.push(handle.await.unwrap().result.is_correct);
    }

    assert_eq!(
        verdicts,
        vec![
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Correct,
            Verdict::Incorrect,
        ]
    );
}

#[tokio::test]
async fn test_bothStrategies_joined_shouldRunIndependently() {
    let orchestrator = common::orchestrator(
        DictionaryTranslator::quechua_glossary(),
        MockGenerator::returning(r#"{"accuracy":40,"is_correct":false,"feedback":"revisa","errors":["orden"]}"#),
    );
    let request = common::hola_request();

    let (classic, ai) = tokio::join!(
        orchestrator.validate_classic(&request),
        orchestrator.validate_with_ai(&request)
    );

    assert_eq!(classic.result.is_correct, Verdict::Correct);
    assert_eq!(ai.result.is_correct, Verdict::Incorrect);
    assert_eq!(ai.result.message.as_deref(), Some("orden"));
}

#[tokio::test]
async fn test_droppedValidation_shouldNotAffectLaterCalls() {
    let translator = MockTranslator::new(MockBehavior::Slow {
        delay_ms: 5_000,
        reply: "Hola".to_string(),
    });
    let orchestrator = AnswerValidationOrchestrator::from_capabilities(
        Arc::new(translator.clone()),
        Arc::new(MockGenerator::failing()),
    );

    let request = common::hola_request();
    let outcome = tokio::time::timeout(Duration::from_millis(50), orchestrator.validate_classic(&request)).await;
    assert!(outcome.is_err(), "slow validation should have been cancelled");
    assert_eq!(translator.call_count(), 1);

    // A fresh orchestrator over a fast translator is unaffected
    let fast = common::orchestrator(MockTranslator::returning("Hola"), MockGenerator::failing());
    let response = fast.validate_classic(&request).await;
    assert_eq!(response.result.is_correct, Verdict::Correct);
}
