//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients for providers.

use std::time::Duration;

use crate::types::{ProviderError, ProviderResult};

/// Build a `reqwest::Client` with the given per-request timeout.
///
/// Environment proxies are ignored; the feed only talks to the configured
/// provider endpoint.
pub fn build_http_client(timeout: Duration) -> ProviderResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .map_err(|e| ProviderError::Other {
            message: format!("failed to build HTTP client: {}", e),
        })
}
