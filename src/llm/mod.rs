//! LLM: generative-AI text adapter.
//!
//! DESIGN
//! ======
//! [`LlmText`] is the seam the assistant operations depend on; [`GeminiClient`]
//! is the production implementation. Configuration comes from the process
//! environment natively and from build-time values in the browser.

pub mod config;
pub mod gemini;
pub mod types;

pub use config::LlmConfig;
pub use gemini::GeminiClient;
pub use types::{GenerateRequest, LlmError, LlmText};
