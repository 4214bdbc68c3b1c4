//! Prompt Feed
//!
//! The capability handed to presentation layers: read the visible records,
//! status, and tag suggestions, and change the facet selection. Cheap to
//! clone; clones share state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use prompt_feed_core::{FacetSelection, Prompt, SelectionUpdate};
use prompt_feed_llm::{GeminiProvider, PromptProvider};

use super::acquisition::{AcquisitionOrchestrator, AcquisitionOutcome, AcquisitionStatus};
use super::filter::filter_records;
use crate::models::settings::{AppConfig, FeedSettings};
use crate::utils::error::AppResult;

/// Point-in-time view of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub status: AcquisitionStatus,
    pub selection: FacetSelection,
    pub visible: Vec<Prompt>,
    /// Size of the full record set
    pub total: usize,
}

/// Faceted prompt feed over a shared acquisition state.
#[derive(Clone)]
pub struct PromptFeed {
    orchestrator: AcquisitionOrchestrator,
    selection: Arc<RwLock<FacetSelection>>,
    suggestion_limit: usize,
}

impl PromptFeed {
    pub fn new(provider: Arc<dyn PromptProvider>) -> Self {
        Self::with_settings(provider, &FeedSettings::default())
    }

    pub fn with_settings(provider: Arc<dyn PromptProvider>, settings: &FeedSettings) -> Self {
        Self::with_orchestrator(AcquisitionOrchestrator::new(provider), settings)
    }

    pub fn with_orchestrator(orchestrator: AcquisitionOrchestrator, settings: &FeedSettings) -> Self {
        Self {
            orchestrator,
            selection: Arc::new(RwLock::new(FacetSelection::for_category(
                settings.default_category,
            ))),
            suggestion_limit: settings.suggestion_limit,
        }
    }

    /// Feed backed by the Gemini provider described in `config`.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let provider = GeminiProvider::new(config.provider.clone())?;
        tracing::info!(
            "[Feed] Using provider '{}' with model '{}'",
            provider.name(),
            provider.model()
        );
        Ok(Self::with_settings(Arc::new(provider), &config.feed))
    }

    /// Initial acquisition for the startup selection.
    pub async fn start(&self) -> AcquisitionOutcome {
        self.refresh().await
    }

    /// Re-acquire the current selection. Selected tags are cleared.
    pub async fn refresh(&self) -> AcquisitionOutcome {
        let mut selection = self.selection.write().await;
        selection.selected_tags.clear();
        let ticket = self.orchestrator.begin().await;
        let (category, refinement) = (selection.category, selection.refinement());
        drop(selection);

        self.orchestrator.execute(ticket, category, refinement).await
    }

    /// Apply a partial facet change.
    ///
    /// Returns the acquisition outcome when the change required one
    /// (category, country or date range changed). Acquisition clears the
    /// selected tags, including any supplied in the same update.
    pub async fn update_selection(&self, update: SelectionUpdate) -> Option<AcquisitionOutcome> {
        let mut selection = self.selection.write().await;
        let change = update.apply(&mut selection);
        if !change.requires_acquisition {
            return None;
        }

        selection.selected_tags.clear();
        // Begin under the selection lock so tickets follow selection order
        let ticket = self.orchestrator.begin().await;
        let (category, refinement) = (selection.category, selection.refinement());
        drop(selection);

        Some(self.orchestrator.execute(ticket, category, refinement).await)
    }

    /// Select a tag. Returns false for blank or already selected tags.
    pub async fn add_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.selection.write().await.selected_tags.insert(tag.to_string())
    }

    pub async fn remove_tag(&self, tag: &str) -> bool {
        self.selection.write().await.selected_tags.remove(tag)
    }

    /// Records passing every active facet, in full-set order.
    pub async fn visible_records(&self) -> Vec<Prompt> {
        let records = self.orchestrator.records().await;
        let selection = self.selection.read().await;
        filter_records(&records, &selection)
    }

    pub async fn status(&self) -> AcquisitionStatus {
        self.orchestrator.status().await
    }

    pub async fn selection(&self) -> FacetSelection {
        self.selection.read().await.clone()
    }

    /// Every distinct tag in the full record set, ascending.
    pub async fn all_tags(&self) -> Vec<String> {
        self.orchestrator.tag_index().await.tags().to_vec()
    }

    /// Unselected tags containing `fragment`, capped at the configured limit.
    pub async fn tag_suggestions(&self, fragment: &str) -> Vec<String> {
        let index = self.orchestrator.tag_index().await;
        let selection = self.selection.read().await;
        index.suggest(fragment, &selection.selected_tags, self.suggestion_limit)
    }

    pub async fn snapshot(&self) -> FeedSnapshot {
        let status = self.orchestrator.status().await;
        let records = self.orchestrator.records().await;
        let selection = self.selection.read().await.clone();
        let visible = filter_records(&records, &selection);
        FeedSnapshot {
            status,
            selection,
            visible,
            total: records.len(),
        }
    }
}
