//! LLM types: request shape, errors, and the text-generation seam.

use serde_json::Value;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The required API key is not configured.
    #[error("missing API key: {var} not set")]
    MissingApiKey { var: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider answered without any text.
    #[error("API response contained no text")]
    EmptyResponse,
}

// =============================================================================
// REQUEST
// =============================================================================

/// A single-turn text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    /// When set, the provider is asked for JSON matching this schema.
    pub response_schema: Option<Value>,
}

impl GenerateRequest {
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), response_schema: None }
    }

    #[must_use]
    pub fn json(prompt: impl Into<String>, schema: Value) -> Self {
        Self { prompt: prompt.into(), response_schema: Some(schema) }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Single-turn text generation. Not `Send` so browser futures qualify.
#[async_trait::async_trait(?Send)]
pub trait LlmText {
    /// Generate text for `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response has no text.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError>;
}
