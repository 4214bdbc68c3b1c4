//! Prompt Provider Trait
//!
//! Defines the common interface for remote prompt sources.

use async_trait::async_trait;

use super::types::{FetchCriteria, ProviderError, ProviderResult};
use prompt_feed_core::Prompt;

/// Trait that all remote prompt providers must implement.
///
/// A provider is an opaque capability: latency is unbounded and any call may
/// fail. Callers must not assume the returned records honour the requested
/// category.
#[async_trait]
pub trait PromptProvider: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Fetch a batch of prompt records for the given criteria.
    async fn fetch_prompts(&self, criteria: &FetchCriteria) -> ProviderResult<Vec<Prompt>>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> ProviderError {
    ProviderError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> ProviderError {
    match status {
        401 => ProviderError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => ProviderError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => ProviderError::ModelNotFound {
            model: body.to_string(),
        },
        429 => ProviderError::RateLimited {
            message: body.to_string(),
            retry_after: None,
        },
        400 => {
            // Gemini reports a bad key as 400 INVALID_ARGUMENT
            if body.contains("API_KEY_INVALID") || body.contains("API key not valid") {
                ProviderError::AuthenticationFailed {
                    message: format!("{}: Invalid API key", provider),
                }
            } else {
                ProviderError::InvalidRequest {
                    message: body.to_string(),
                }
            }
        }
        500..=599 => ProviderError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => ProviderError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
