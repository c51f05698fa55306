//! AI helpers used by the projects and resources pages.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so a missing key or a failed request
//! becomes an inline message instead of a panic.

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use clubhub::assistant::{self, ProjectIdea};
use clubhub::llm::{GeminiClient, LlmConfig};

pub const AI_DISABLED_MESSAGE: &str = "AI features are disabled: no Gemini API key was configured.";
pub const IDEA_FAILED_MESSAGE: &str = "The assistant could not come up with an idea. Try another topic.";
pub const SUMMARY_FAILED_MESSAGE: &str = "The assistant could not summarize this resource.";

/// Build a Gemini client from the optional config in context.
pub fn client_for(config: Option<LlmConfig>) -> Result<GeminiClient, String> {
    let config = config.ok_or_else(|| AI_DISABLED_MESSAGE.to_owned())?;
    GeminiClient::new(config).map_err(|e| {
        leptos::logging::warn!("gemini client unavailable: {e}");
        AI_DISABLED_MESSAGE.to_owned()
    })
}

/// Suggest a club project for `topic`.
pub async fn suggest_project(config: Option<LlmConfig>, topic: String) -> Result<ProjectIdea, String> {
    let client = client_for(config)?;
    assistant::generate_project_idea(&client, &topic)
        .await
        .ok_or_else(|| IDEA_FAILED_MESSAGE.to_owned())
}

/// Summarize resource text for students.
pub async fn summarize(config: Option<LlmConfig>, content: String) -> Result<String, String> {
    let client = client_for(config)?;
    assistant::summarize_resource(&client, &content)
        .await
        .ok_or_else(|| SUMMARY_FAILED_MESSAGE.to_owned())
}
