//! Prompt Feed - Rust Backend Library
//!
//! Faceted feed over prompt records drawn from a static trend dataset and a
//! remote generative provider. It includes:
//! - Acquisition orchestration with stale-result suppression
//! - The facet filter pipeline and tag index
//! - Storage for the JSON config
//! - Data models and utilities

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use models::settings::{AppConfig, FeedSettings};
pub use services::{
    derive_tags, filter_records, trend_dataset, AcquisitionOrchestrator, AcquisitionOutcome,
    AcquisitionStatus, FeedSnapshot, FilterStage, PromptFeed, TagIndex,
};
pub use storage::config::ConfigService;
pub use utils::error::{AppError, AppResult};

pub use prompt_feed_core::{
    Category, Country, DateRange, Facet, FacetSelection, Platform, Prompt, SelectionUpdate,
};
pub use prompt_feed_llm::{FetchCriteria, GeminiProvider, PromptProvider, ProviderError};
