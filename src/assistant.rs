//! AI assistant: project-idea suggestions and resource summaries.
//!
//! ERROR HANDLING
//! ==============
//! Both operations are best-effort. Transport and parse failures are logged
//! and surface as `None`; views render "no result" instead of an error.

#[cfg(test)]
#[path = "assistant_test.rs"]
mod assistant_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::llm::{GenerateRequest, LlmText};

/// Characters of resource content forwarded for summarization.
pub const SUMMARY_INPUT_LIMIT: usize = 2000;

/// Structured project proposal returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
}

fn project_idea_prompt(topic: &str) -> String {
    format!(
        "Suggest a high-impact ICT club project for the topic: \"{topic}\". \
         Provide a title, detailed description, and a suggested tech stack."
    )
}

fn project_idea_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "techStack": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "description", "techStack"]
    })
}

fn summary_prompt(content: &str) -> String {
    format!(
        "Summarize the following resource content for students: {}",
        truncate_chars(content, SUMMARY_INPUT_LIMIT)
    )
}

/// Longest prefix of `text` with at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn parse_project_idea(raw: &str) -> Option<ProjectIdea> {
    match serde_json::from_str::<ProjectIdea>(raw.trim()) {
        Ok(idea) if !idea.title.trim().is_empty() => Some(idea),
        Ok(_) => {
            warn!("AI project idea had an empty title");
            None
        }
        Err(e) => {
            warn!(error = %e, "failed to parse AI project idea");
            None
        }
    }
}

/// Ask the model for a club project proposal on `topic`.
///
/// Returns `None` for a blank topic, a failed request, or an unparseable reply.
pub async fn generate_project_idea(llm: &dyn LlmText, topic: &str) -> Option<ProjectIdea> {
    let topic = topic.trim();
    if topic.is_empty() {
        return None;
    }
    let request = GenerateRequest::json(project_idea_prompt(topic), project_idea_schema());
    let raw = match llm.generate(&request).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(error = %e, "AI project idea request failed");
            return None;
        }
    };
    let idea = parse_project_idea(&raw)?;
    info!(title = %idea.title, "AI project idea generated");
    Some(idea)
}

/// Summarize resource `content` for students.
///
/// Returns `None` for blank content or a failed request.
pub async fn summarize_resource(llm: &dyn LlmText, content: &str) -> Option<String> {
    if content.trim().is_empty() {
        return None;
    }
    let request = GenerateRequest::text(summary_prompt(content));
    match llm.generate(&request).await {
        Ok(summary) => Some(summary.trim().to_owned()),
        Err(e) => {
            warn!(error = %e, "AI resource summary failed");
            None
        }
    }
}
