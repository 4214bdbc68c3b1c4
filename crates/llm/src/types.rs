//! Provider Types
//!
//! Request criteria, configuration, and the error taxonomy shared by every
//! prompt provider.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use prompt_feed_core::{Category, Facet, Refinement};

/// Default model used for prompt generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// What to ask the provider for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchCriteria {
    /// `All` asks for the remote categories; `Only(c)` scopes to one category
    pub category: Facet<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refinement: Option<Refinement>,
}

impl FetchCriteria {
    pub fn new(category: Facet<Category>, refinement: Option<Refinement>) -> Self {
        Self {
            category,
            refinement,
        }
    }

    /// Categories the provider is expected to cover for this request.
    pub fn requested_categories(&self) -> Vec<Category> {
        match self.category {
            Facet::All => Category::remote_categories(),
            Facet::Only(category) => vec![category],
        }
    }

    /// Whether the request targets trend content, which carries
    /// platform/country/date fields and honours the refinement.
    pub fn is_trend_scope(&self) -> bool {
        self.category == Facet::Only(Category::ViralTrends)
    }
}

/// Provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; read from the environment, never persisted
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Override for the API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Number of prompts to request per call
    #[serde(default = "default_prompt_count")]
    pub prompt_count: u32,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_prompt_count() -> u32 {
    20
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: None,
            prompt_count: default_prompt_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Errors reported by a prompt provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Missing, invalid, or rejected API key
    #[error("authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// The requested model does not exist
    #[error("model not found: {model}")]
    ModelNotFound { model: String },

    /// Transport failure, including timeouts
    #[error("network error: {message}")]
    NetworkError { message: String },

    /// The payload was not valid JSON
    #[error("parse error: {message}")]
    ParseError { message: String },

    /// Valid JSON with the wrong shape
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },

    /// The provider rejected the request
    #[error("invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("server error ({status:?}): {message}")]
    ServerError {
        message: String,
        status: Option<u16>,
    },

    #[error("rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after: Option<u32>,
    },

    /// Anything not covered above
    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Coarse cause category of a provider failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Credential,
    Network,
    Parse,
    Provider,
    Unknown,
}

impl ProviderError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::AuthenticationFailed { .. } => FailureKind::Credential,
            Self::NetworkError { .. } => FailureKind::Network,
            Self::ParseError { .. } | Self::InvalidResponse { .. } => FailureKind::Parse,
            Self::ModelNotFound { .. }
            | Self::InvalidRequest { .. }
            | Self::ServerError { .. }
            | Self::RateLimited { .. } => FailureKind::Provider,
            Self::Other { .. } => FailureKind::Unknown,
        }
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: msg.into(),
        }
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other {
            message: msg.into(),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::ParseError {
                message: err.to_string(),
            }
        } else {
            Self::NetworkError {
                message: err.to_string(),
            }
        }
    }
}
