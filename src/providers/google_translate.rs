use async_trait::async_trait;
use log::{debug, error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ProviderError;
use crate::providers::TranslationCapability;

/// Client for a Google Cloud Translation v2 style REST endpoint
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Full translate endpoint URL
    endpoint: String,
    /// Request timeout, kept for error reporting
    timeout_secs: u64,
}

/// Translate request body
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Input format, always plain text
    format: &'a str,
}

/// Translate response body
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

/// Payload of a translate response
#[derive(Debug, Deserialize)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<TranslationItem>,
}

/// A single translation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationItem {
    pub translated_text: String,
}

impl<'a> TranslateRequest<'a> {
    /// Create a plain-text translate request
    pub fn new(text: &'a str, source: &'a str, target: &'a str) -> Self {
        Self {
            q: text,
            source,
            target,
            format: "text",
        }
    }
}

impl TranslateResponse {
    /// First translated text, falling back to `original` when the service returned none
    pub fn into_text_or(self, original: &str) -> String {
        match self.data.translations.into_iter().next() {
            Some(item) => item.translated_text,
            None => {
                warn!("Translation response had no entries, keeping input text");
                original.to_string()
            }
        }
    }
}

impl GoogleTranslate {
    /// Create a new translation client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            timeout_secs,
        }
    }

    /// Endpoint URL with the API key attached
    pub fn api_url(&self) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| {
            ProviderError::RequestFailed(format!("Invalid translation endpoint: {}", e))
        })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl TranslationCapability for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = self.api_url()?;
        let request = TranslateRequest::new(text, source_lang, target_lang);
        debug!("Translating {} chars {} -> {}", text.chars().count(), source_lang, target_lang);

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(e, self.timeout_secs))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, error_text);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        let parsed = response
            .json::<TranslateResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(parsed.into_text_or(text))
    }
}
