//! Gemini configuration from runtime or build-time environment.

use super::types::LlmError;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "GEMINI_MODEL";
pub const BASE_URL_VAR: &str = "GEMINI_BASE_URL";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl LlmConfig {
    /// Config with the default model and endpoint.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), model: DEFAULT_MODEL.to_owned(), base_url: DEFAULT_BASE_URL.to_owned() }
    }

    /// Build typed config from process environment variables.
    ///
    /// Required: `GEMINI_API_KEY`. Optional: `GEMINI_MODEL`, `GEMINI_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] if the key is unset or blank.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_values(
            std::env::var(API_KEY_VAR).ok().as_deref(),
            std::env::var(MODEL_VAR).ok().as_deref(),
            std::env::var(BASE_URL_VAR).ok().as_deref(),
        )
    }

    /// Build typed config from values baked in at compile time.
    ///
    /// The browser build has no process environment, so the key is captured
    /// by `option_env!` when the client is compiled.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] if the key was not set at build time.
    pub fn from_build_env() -> Result<Self, LlmError> {
        Self::from_values(option_env!("GEMINI_API_KEY"), option_env!("GEMINI_MODEL"), option_env!("GEMINI_BASE_URL"))
    }

    /// Build typed config from optional raw values.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::MissingApiKey`] if `api_key` is absent or blank.
    pub fn from_values(api_key: Option<&str>, model: Option<&str>, base_url: Option<&str>) -> Result<Self, LlmError> {
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: API_KEY_VAR.to_owned() })?;
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODEL);
        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/');
        Ok(Self { api_key: api_key.to_owned(), model: model.to_owned(), base_url: base_url.to_owned() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
