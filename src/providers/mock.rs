/*!
 * Mock capability implementations for testing.
 *
 * - `MockTranslator` stands in for the translation service
 * - `MockGenerator` stands in for the generative-text service
 *
 * Both share `MockBehavior`, count their calls across clones and remember the
 * last input they received so tests can inspect it.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{
    GenerateContentResponse, GenerationParams, GenerativeTextCapability, TranslationCapability,
};

/// Behavior mode for the mock capabilities
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with the given text
    Reply(String),
    /// Always fails with an API error
    Failing,
    /// Always fails as if the request timed out
    TimingOut,
    /// Succeeds with an empty payload (no translation, no candidates)
    Empty,
    /// Answers with a body that does not decode
    Garbled,
    /// Sleeps before replying, for cancellation and timeout tests
    Slow { delay_ms: u64, reply: String },
}

#[derive(Debug, Clone)]
struct CallLog {
    count: Arc<AtomicUsize>,
    last_input: Arc<Mutex<Option<String>>>,
}

impl CallLog {
    fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
            last_input: Arc::new(Mutex::new(None)),
        }
    }

    fn record(&self, input: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_input.lock() {
            *last = Some(input.to_string());
        }
    }

    fn last(&self) -> Option<String> {
        self.last_input.lock().ok().and_then(|last| last.clone())
    }
}

/// Mock translation capability
#[derive(Debug, Clone)]
pub struct MockTranslator {
    behavior: MockBehavior,
    calls: CallLog,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: CallLog::new(),
        }
    }

    /// Translator that always answers `text`
    pub fn returning(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    /// Translator that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Translator that always times out
    pub fn timing_out() -> Self {
        Self::new(MockBehavior::TimingOut)
    }

    /// Number of calls made so far, across clones
    pub fn call_count(&self) -> usize {
        self.calls.count.load(Ordering::SeqCst)
    }

    /// Text of the last translate call
    pub fn last_text(&self) -> Option<String> {
        self.calls.last()
    }
}

#[async_trait]
impl TranslationCapability for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, ProviderError> {
        self.calls.record(text);

        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(reply.clone()),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 503,
                message: "Simulated translation failure".to_string(),
            }),
            MockBehavior::TimingOut => Err(ProviderError::Timeout(10)),
            // An empty payload degrades to the input, as the real client does
            MockBehavior::Empty => Ok(text.to_string()),
            MockBehavior::Garbled => Err(ProviderError::ParseError("expected value at line 1 column 1".to_string())),
            MockBehavior::Slow { delay_ms, reply } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(reply.clone())
            }
        }
    }
}

/// Mock generative-text capability
#[derive(Debug, Clone)]
pub struct MockGenerator {
    behavior: MockBehavior,
    calls: CallLog,
    last_params: Arc<Mutex<Option<GenerationParams>>>,
}

impl MockGenerator {
    /// Create a new mock generator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: CallLog::new(),
            last_params: Arc::new(Mutex::new(None)),
        }
    }

    /// Generator whose single candidate text is `text`
    pub fn returning(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Reply(text.into()))
    }

    /// Generator that returns an envelope without candidates
    pub fn missing_content() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Generator that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Generator whose response body cannot be decoded
    pub fn garbled() -> Self {
        Self::new(MockBehavior::Garbled)
    }

    /// Generator that always times out
    pub fn timing_out() -> Self {
        Self::new(MockBehavior::TimingOut)
    }

    /// Number of calls made so far, across clones
    pub fn call_count(&self) -> usize {
        self.calls.count.load(Ordering::SeqCst)
    }

    /// Prompt of the last generate call
    pub fn last_prompt(&self) -> Option<String> {
        self.calls.last()
    }

    /// Decoding parameters of the last generate call
    pub fn last_params(&self) -> Option<GenerationParams> {
        self.last_params.lock().ok().and_then(|p| *p)
    }
}

#[async_trait]
impl GenerativeTextCapability for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerateContentResponse, ProviderError> {
        self.calls.record(prompt);
        if let Ok(mut last) = self.last_params.lock() {
            *last = Some(*params);
        }

        match &self.behavior {
            MockBehavior::Reply(reply) => Ok(GenerateContentResponse::from_text(reply.clone())),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated generation failure".to_string(),
            }),
            MockBehavior::TimingOut => Err(ProviderError::Timeout(120)),
            MockBehavior::Empty => Ok(GenerateContentResponse::default()),
            MockBehavior::Garbled => Err(ProviderError::ParseError("expected value at line 1 column 1".to_string())),
            MockBehavior::Slow { delay_ms, reply } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(*delay_ms)).await;
                Ok(GenerateContentResponse::from_text(reply.clone()))
            }
        }
    }
}
