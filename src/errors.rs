/*!
 * Error types for the lengua-validator engine.
 *
 * Provider errors describe what went wrong talking to an upstream service.
 * Validation errors are the local-only taxonomy the validators use internally;
 * none of them ever reaches the caller of the orchestrator, they are turned
 * into an `Unknown` verdict instead.
 */

use thiserror::Error;

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),
}

impl ProviderError {
    /// Classify a reqwest error into the matching provider error
    ///
    /// The request URL is dropped first: it carries the API key.
    pub fn from_reqwest(error: reqwest::Error, timeout_secs: u64) -> Self {
        let error = error.without_url();
        if error.is_timeout() {
            Self::Timeout(timeout_secs)
        } else if error.is_connect() {
            Self::ConnectionError(error.to_string())
        } else if error.is_decode() {
            Self::ParseError(error.to_string())
        } else {
            Self::RequestFailed(error.to_string())
        }
    }
}

/// Raised when no JSON object can be located in a model reply
#[derive(Error, Debug, PartialEq)]
#[error("no JSON object found in model output")]
pub struct ExtractionError;

/// Local failure taxonomy of the validators
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Translation or generative capability unreachable, timed out or non-2xx
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] ProviderError),

    /// No JSON object locatable, or repaired text still fails to parse
    #[error("malformed model output: {0}")]
    MalformedModelOutput(String),

    /// Expected nested field absent in the generative response envelope
    #[error("missing response content: {0}")]
    MissingResponseContent(String),

    /// Request rejected before any upstream call
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ValidationError {
    /// Reject a request whose prompt text is blank
    pub fn check_original(original: &str) -> Result<(), Self> {
        if original.trim().is_empty() {
            return Err(Self::InvalidRequest("original text is empty".to_string()));
        }
        Ok(())
    }
}

impl From<ExtractionError> for ValidationError {
    fn from(error: ExtractionError) -> Self {
        Self::MalformedModelOutput(error.to_string())
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(error: serde_json::Error) -> Self {
        Self::MalformedModelOutput(error.to_string())
    }
}

/// Main application error type used by the binary
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
