//! Settings Models
//!
//! Application configuration stored in config.json.

use serde::{Deserialize, Serialize};

use prompt_feed_core::{Category, Facet};
use prompt_feed_llm::ProviderConfig;

/// Default cap on tag suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Remote provider settings (the API key is never written out)
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub feed: FeedSettings,
}

/// Feed behaviour settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSettings {
    /// Maximum number of tag suggestions returned per fragment
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Category selected at startup
    #[serde(default)]
    pub default_category: Facet<Category>,
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            default_category: Facet::All,
        }
    }
}

impl AppConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.provider.model.trim().is_empty() {
            return Err("provider.model must not be empty".to_string());
        }

        if self.provider.prompt_count == 0 || self.provider.prompt_count > 100 {
            return Err(format!(
                "provider.prompt_count must be between 1 and 100, got {}",
                self.provider.prompt_count
            ));
        }

        if self.provider.timeout_secs == 0 {
            return Err("provider.timeout_secs must be at least 1".to_string());
        }

        if self.feed.suggestion_limit == 0 || self.feed.suggestion_limit > 50 {
            return Err(format!(
                "feed.suggestion_limit must be between 1 and 50, got {}",
                self.feed.suggestion_limit
            ));
        }

        Ok(())
    }
}
