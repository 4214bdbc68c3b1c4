//! Prompt Feed LLM
//!
//! The remote half of prompt acquisition: a provider trait that any
//! generative backend can implement, the shared error taxonomy, and the
//! Gemini implementation used by default.

pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use provider::{missing_api_key_error, parse_http_error, PromptProvider};
pub use types::*;
