use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::{GenerationParams, GenerativeTextCapability};

/// User agent sent with every generation request
const USER_AGENT: &str = "lengua-validator/1.0";

/// Gemini client for the `generateContent` REST API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL
    endpoint: String,
    /// Model name, e.g. "gemini-2.5-flash"
    model: String,
    /// Request timeout, kept for error reporting
    timeout_secs: u64,
}

/// Request body for `generateContent`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns, a single user turn here
    contents: Vec<RequestContent>,
    /// Decoding parameters
    generation_config: GenerationParams,
}

/// One content turn of a request
#[derive(Debug, Serialize)]
pub struct RequestContent {
    parts: Vec<RequestPart>,
}

/// A text part of a request turn
#[derive(Debug, Serialize)]
pub struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    /// Create a single-turn request for `prompt`
    pub fn new(prompt: impl Into<String>, params: GenerationParams) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt.into() }],
            }],
            generation_config: params,
        }
    }
}

/// Response envelope of `generateContent`
///
/// Every link is optional: the service may omit candidates (safety blocks) or
/// parts (token exhaustion). Unrecognized siblings such as `finishReason` or
/// `usageMetadata` are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// A generated candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content block of a candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

/// Text part of a candidate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Build an envelope holding a single text part
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: Some(vec![Candidate {
                content: Some(CandidateContent {
                    parts: Some(vec![CandidatePart {
                        text: Some(text.into()),
                    }]),
                }),
            }]),
        }
    }

    /// Text of `candidates[0].content.parts[0]`, if every link is present
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()?
            .text
            .as_deref()
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            timeout_secs,
        }
    }

    /// Full URL of the `generateContent` method for the configured model
    pub fn api_url(&self) -> Result<Url, ProviderError> {
        let base = format!("{}/", self.endpoint.trim_end_matches('/'));
        let mut url = Url::parse(&base)
            .and_then(|u| u.join(&format!("v1/models/{}:generateContent", self.model)))
            .map_err(|e| ProviderError::RequestFailed(format!("Invalid Gemini endpoint: {}", e)))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Complete a generation request
    pub async fn complete(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let url = self.api_url()?;

        if log::log_enabled!(log::Level::Debug) {
            if let Ok(body) = serde_json::to_string(request) {
                debug!("Gemini request body: {}", body);
            }
        }

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let raw = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;
        debug!("Gemini response ({} chars): {}", raw.chars().count(), raw);

        serde_json::from_str::<GenerateContentResponse>(&raw)
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl GenerativeTextCapability for Gemini {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let request = GenerateContentRequest::new(prompt, *params);
        self.complete(&request).await
    }
}
