use super::*;
use crate::llm::LlmError;
use std::cell::RefCell;

// =========================================================================
// MockLlm
// =========================================================================

struct MockLlm {
    reply: Result<String, u16>,
    requests: RefCell<Vec<GenerateRequest>>,
}

impl MockLlm {
    fn ok(text: &str) -> Self {
        Self { reply: Ok(text.to_owned()), requests: RefCell::new(Vec::new()) }
    }

    fn failing(status: u16) -> Self {
        Self { reply: Err(status), requests: RefCell::new(Vec::new()) }
    }

    fn calls(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl LlmText for MockLlm {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, LlmError> {
        self.requests.borrow_mut().push(request.clone());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::ApiResponse { status: *status, body: String::new() }),
        }
    }
}

// =========================================================================
// prompts
// =========================================================================

#[test]
fn project_prompt_mentions_topic() {
    let prompt = project_idea_prompt("robotics");
    assert!(prompt.contains("\"robotics\""));
    assert!(prompt.contains("ICT club project"));
}

#[test]
fn project_schema_requires_all_fields() {
    let schema = project_idea_schema();
    assert_eq!(schema["required"], serde_json::json!(["title", "description", "techStack"]));
}

#[test]
fn truncate_chars_respects_char_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("abc", 10), "abc");
    assert_eq!(truncate_chars("", 3), "");
}

#[test]
fn summary_prompt_caps_content_length() {
    let content = "x".repeat(SUMMARY_INPUT_LIMIT + 500);
    let prompt = summary_prompt(&content);
    let xs = prompt.chars().filter(|c| *c == 'x').count();
    assert_eq!(xs, SUMMARY_INPUT_LIMIT);
}

// =========================================================================
// generate_project_idea
// =========================================================================

#[tokio::test]
async fn project_idea_parses_json_reply() {
    let llm = MockLlm::ok(r#"{"title":"Campus Mesh","description":"Build a mesh network.","techStack":["Rust","LoRa"]}"#);
    let idea = generate_project_idea(&llm, " mesh networking ").await.unwrap();
    assert_eq!(idea.title, "Campus Mesh");
    assert_eq!(idea.tech_stack, vec!["Rust".to_owned(), "LoRa".to_owned()]);

    let requests = llm.requests.borrow();
    assert!(requests[0].response_schema.is_some());
    assert!(requests[0].prompt.contains("\"mesh networking\""));
}

#[tokio::test]
async fn project_idea_unparseable_reply_is_none() {
    let llm = MockLlm::ok("Sure! Here is an idea: build a robot.");
    assert_eq!(generate_project_idea(&llm, "robots").await, None);
}

#[tokio::test]
async fn project_idea_missing_fields_is_none() {
    let llm = MockLlm::ok(r#"{"title":"Half"}"#);
    assert_eq!(generate_project_idea(&llm, "robots").await, None);
}

#[tokio::test]
async fn project_idea_request_failure_is_none() {
    let llm = MockLlm::failing(503);
    assert_eq!(generate_project_idea(&llm, "robots").await, None);
}

#[tokio::test]
async fn project_idea_blank_topic_skips_request() {
    let llm = MockLlm::ok("{}");
    assert_eq!(generate_project_idea(&llm, "   ").await, None);
    assert_eq!(llm.calls(), 0);
}

// =========================================================================
// summarize_resource
// =========================================================================

#[tokio::test]
async fn summary_returns_trimmed_text() {
    let llm = MockLlm::ok("  Git tracks changes.\n");
    let summary = summarize_resource(&llm, "Introduction to Git").await;
    assert_eq!(summary.as_deref(), Some("Git tracks changes."));
    assert!(llm.requests.borrow()[0].response_schema.is_none());
}

#[tokio::test]
async fn summary_failure_is_none() {
    let llm = MockLlm::failing(429);
    assert_eq!(summarize_resource(&llm, "content").await, None);
}

#[tokio::test]
async fn summary_blank_content_skips_request() {
    let llm = MockLlm::ok("unused");
    assert_eq!(summarize_resource(&llm, " ").await, None);
    assert_eq!(llm.calls(), 0);
}
